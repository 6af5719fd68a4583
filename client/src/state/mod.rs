//! Client-side state shared across components via Leptos context.

pub mod toast;
