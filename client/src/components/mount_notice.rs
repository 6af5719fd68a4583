//! Mount-time supplier warning notice.
//!
//! DESIGN
//! ======
//! The warning is pushed in the component body, which Leptos runs exactly
//! once per mount (setup phase), not in an effect keyed on an empty
//! dependency list. The keyed `push_unique` makes the once-per-mount
//! contract hold even if the notice is ever instantiated twice in one tree.

use leptos::prelude::*;

use crate::components::toast::ToastHost;
use crate::state::toast::{ToastState, ToastVariant};

#[cfg(test)]
#[path = "mount_notice_test.rs"]
mod mount_notice_test;

pub const SUPPLIER_NOTICE_KEY: &str = "supplier-login-notice";
pub const SUPPLIER_NOTICE_TITLE: &str = "Supplier Login Not Supported";
pub const SUPPLIER_NOTICE_MESSAGE: &str =
    "This sign-in is for buyer accounts. Supplier accounts are managed separately.";

/// Fires the supplier warning toast once on mount and renders the
/// notification surface that displays it.
#[component]
pub fn SupplierLoginNotice() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    toasts.update(|state| {
        state.push_unique(SUPPLIER_NOTICE_KEY, SUPPLIER_NOTICE_TITLE, SUPPLIER_NOTICE_MESSAGE, ToastVariant::Warning);
    });

    view! { <ToastHost/> }
}
