//! Onboarding landing page for principals without a supplier profile.
//!
//! SYSTEM CONTEXT
//! ==============
//! The presence guard sends row-less users here. Creating the profile is
//! what lets the settings guard chain pass afterwards.

use leptos::prelude::*;

#[component]
pub fn OnboardingPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let name_value = name.get().trim().to_owned();
        if name_value.is_empty() {
            info.set("Enter your business name first.".to_owned());
            return;
        }
        busy.set(true);
        info.set("Creating your profile...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_supplier(&name_value).await {
                Ok(_) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/settings/business");
                    }
                }
                Err(e) => {
                    info.set(format!("Could not create profile: {e}"));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = name_value;
    };

    view! {
        <main class="onboarding-page">
            <div class="onboarding-card">
                <h1>"Set up your supplier profile"</h1>
                <p class="onboarding-card__subtitle">
                    "You need a supplier profile before you can manage settings."
                </p>
                <form class="onboarding-form" on:submit=on_submit>
                    <input
                        class="onboarding-input"
                        type="text"
                        placeholder="Business name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <button class="onboarding-button" type="submit" disabled=move || busy.get()>
                        "Get Started"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="onboarding-message">{move || info.get()}</p>
                </Show>
            </div>
        </main>
    }
}
