//! Notification surface rendering the toast queue.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastState};

/// Renders every live toast from the shared [`ToastState`] with a native
/// dismiss button per toast.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host">
            <For
                each=move || toasts.get().toasts().to_vec()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let class = format!("toast toast--{}", toast.variant.css_suffix());
                    view! {
                        <div class=class role="status">
                            <p class="toast__title">{toast.title.clone()}</p>
                            <p class="toast__description">{toast.description.clone()}</p>
                            <button
                                class="toast__dismiss"
                                aria-label="Dismiss"
                                on:click=move |_| toasts.update(|s| s.dismiss(id))
                            >
                                "\u{d7}"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
