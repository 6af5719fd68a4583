//! Contact profile form, seeded with the current supplier record.

use leptos::prelude::*;
use model::SupplierPatch;
use model::SupplierRecord;

use crate::components::business_form::normalized_field;

#[cfg(test)]
#[path = "profile_form_test.rs"]
mod profile_form_test;

/// Build the patch the profile form submits; only contact-owned fields.
pub(crate) fn profile_patch(contact_name: &str, contact_email: &str) -> SupplierPatch {
    SupplierPatch {
        contact_name: normalized_field(contact_name),
        contact_email: normalized_field(contact_email),
        ..SupplierPatch::default()
    }
}

#[component]
pub fn ProfileForm(initial: SupplierRecord) -> impl IntoView {
    let contact_name = RwSignal::new(initial.contact_name.clone().unwrap_or_default());
    let contact_email = RwSignal::new(initial.contact_email.clone().unwrap_or_default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let patch = profile_patch(&contact_name.get(), &contact_email.get());
        if patch.is_empty() {
            info.set("Enter a contact name or email first.".to_owned());
            return;
        }
        busy.set(true);
        info.set("Saving...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_supplier(&patch).await {
                Ok(_) => info.set("Saved.".to_owned()),
                Err(e) => info.set(format!("Save failed: {e}")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = patch;
    };

    view! {
        <form class="settings-form" on:submit=on_submit>
            <label class="settings-form__label">
                "Contact name"
                <input
                    class="settings-form__input"
                    type="text"
                    prop:value=move || contact_name.get()
                    on:input=move |ev| contact_name.set(event_target_value(&ev))
                />
            </label>
            <label class="settings-form__label">
                "Contact email"
                <input
                    class="settings-form__input"
                    type="email"
                    prop:value=move || contact_email.get()
                    on:input=move |ev| contact_email.set(event_target_value(&ev))
                />
            </label>
            <button class="settings-form__submit" type="submit" disabled=move || busy.get()>
                "Save Changes"
            </button>
            <Show when=move || !info.get().is_empty()>
                <p class="settings-form__message">{move || info.get()}</p>
            </Show>
        </form>
    }
}
