//! Static loading placeholder.

use leptos::prelude::*;

#[cfg(test)]
#[path = "loading_test.rs"]
mod loading_test;

pub const LOADING_CAPTION: &str = "Loading...";

/// Spinner with a fixed caption. Purely presentational: no inputs, no
/// state, renders identically on every use.
#[component]
pub fn LoadingPlaceholder() -> impl IntoView {
    view! {
        <div class="loading">
            <div class="loading__spinner" aria-hidden="true"></div>
            <p class="loading__caption">{LOADING_CAPTION}</p>
        </div>
    }
}
