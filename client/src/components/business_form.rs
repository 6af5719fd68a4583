//! Business details form, seeded with the current supplier record.

use leptos::prelude::*;
use model::SupplierPatch;
use model::SupplierRecord;

#[cfg(test)]
#[path = "business_form_test.rs"]
mod business_form_test;

/// Trimmed field value, or `None` when blank (blank fields are left
/// untouched by the patch).
pub(crate) fn normalized_field(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

/// Build the patch the business form submits; only business-owned fields.
pub(crate) fn business_patch(name: &str, description: &str, address: &str, phone: &str) -> SupplierPatch {
    SupplierPatch {
        name: normalized_field(name),
        description: normalized_field(description),
        address: normalized_field(address),
        phone: normalized_field(phone),
        ..SupplierPatch::default()
    }
}

#[component]
pub fn BusinessForm(initial: SupplierRecord) -> impl IntoView {
    let name = RwSignal::new(initial.name.clone());
    let description = RwSignal::new(initial.description.clone().unwrap_or_default());
    let address = RwSignal::new(initial.address.clone().unwrap_or_default());
    let phone = RwSignal::new(initial.phone.clone().unwrap_or_default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        if name.get().trim().is_empty() {
            info.set("Business name is required.".to_owned());
            return;
        }
        busy.set(true);
        info.set("Saving...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let patch = business_patch(&name.get(), &description.get(), &address.get(), &phone.get());
            leptos::task::spawn_local(async move {
                match crate::net::api::update_supplier(&patch).await {
                    Ok(record) => {
                        info.set("Saved.".to_owned());
                        name.set(record.name);
                    }
                    Err(e) => info.set(format!("Save failed: {e}")),
                }
                busy.set(false);
            });
        }
    };

    view! {
        <form class="settings-form" on:submit=on_submit>
            <label class="settings-form__label">
                "Business name"
                <input
                    class="settings-form__input"
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label class="settings-form__label">
                "Description"
                <textarea
                    class="settings-form__input settings-form__input--multiline"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
            </label>
            <label class="settings-form__label">
                "Address"
                <input
                    class="settings-form__input"
                    type="text"
                    prop:value=move || address.get()
                    on:input=move |ev| address.set(event_target_value(&ev))
                />
            </label>
            <label class="settings-form__label">
                "Phone"
                <input
                    class="settings-form__input"
                    type="tel"
                    prop:value=move || phone.get()
                    on:input=move |ev| phone.set(event_target_value(&ev))
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
