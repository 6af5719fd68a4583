//! Leptos component library for the supplier portal.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders each page with the `ssr` feature and tags `<body>`
//! with a page slug plus an embedded initial-data JSON script. Under the
//! `hydrate` feature this crate is the WASM entrypoint: it reads the slug,
//! parses the seed data, and hydrates the matching page component.

pub mod components;
pub mod net;
pub mod pages;
pub mod state;

#[cfg(feature = "hydrate")]
fn page_slug() -> Option<String> {
    let body = web_sys::window()?.document()?.body()?;
    body.dataset().get("page")
}

#[cfg(feature = "hydrate")]
fn initial_record() -> Option<model::SupplierRecord> {
    let document = web_sys::window()?.document()?;
    let node = document.get_element_by_id("initial-data")?;
    let json = node.text_content()?;
    serde_json::from_str(&json).ok()
}

/// WASM entrypoint: hydrate the page the server rendered.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::view;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let Some(slug) = page_slug() else {
        log::warn!("no data-page slug on <body>; nothing to hydrate");
        return;
    };

    match slug.as_str() {
        "login" => leptos::mount::hydrate_body(pages::login::LoginPage),
        "onboarding" => leptos::mount::hydrate_body(pages::onboarding::OnboardingPage),
        "settings-business" => match initial_record() {
            Some(initial) => leptos::mount::hydrate_body(move || {
                view! { <pages::business_settings::BusinessSettingsPage initial=initial/> }
            }),
            None => log::error!("missing initial data for settings-business"),
        },
        "settings-profile" => match initial_record() {
            Some(initial) => leptos::mount::hydrate_body(move || {
                view! { <pages::profile_settings::ProfileSettingsPage initial=initial/> }
            }),
            None => log::error!("missing initial data for settings-profile"),
        },
        other => log::warn!("unknown page slug: {other}"),
    }
}
