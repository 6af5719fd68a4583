//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page content and interaction surfaces while reading
//! shared state from Leptos context providers.

pub mod business_form;
pub mod loading;
pub mod mount_notice;
pub mod profile_form;
pub mod toast;
