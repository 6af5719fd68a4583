//! Buyer sign-in page.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is where the session guard sends unauthenticated requests. The page
//! mounts the supplier warning notice on arrival and offers the
//! local-development sign-in (production credentials are handled by the
//! external auth provider).

use leptos::prelude::*;

use crate::components::loading::LoadingPlaceholder;
use crate::components::mount_notice::SupplierLoginNotice;
use crate::state::toast::ToastState;

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

pub(crate) fn missing_fields_message() -> String {
    "Enter both email and name.".to_owned()
}

#[component]
pub fn LoginPage() -> impl IntoView {
    provide_context(RwSignal::new(ToastState::default()));

    let email = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let name_value = name.get().trim().to_owned();
        if email_value.is_empty() || name_value.is_empty() {
            info.set(missing_fields_message());
            return;
        }
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::dev_login(&email_value, &name_value).await {
                Ok(()) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/settings/business");
                    }
                }
                Err(e) => {
                    info.set(format!("Sign in failed: {e}"));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (email_value, name_value);
    };

    view! {
        <div class="login-page">
            <SupplierLoginNotice/>
            <div class="login-card">
                <h1>"Buyer Portal"</h1>
                <p class="login-card__subtitle">"Sign in to manage your account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Your name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || busy.get()>
                    <LoadingPlaceholder/>
                </Show>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
