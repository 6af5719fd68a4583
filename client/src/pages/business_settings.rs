//! Business settings page.

use leptos::prelude::*;
use model::SupplierRecord;

use crate::components::business_form::BusinessForm;

/// Settings form for business details, seeded with the supplier record the
/// server's guard chain already resolved.
#[component]
pub fn BusinessSettingsPage(initial: SupplierRecord) -> impl IntoView {
    view! {
        <main class="settings-page">
            <h1>"Business Settings"</h1>
            <nav class="settings-nav">
                <a class="settings-nav__link settings-nav__link--active" href="/settings/business">
                    "Business"
                </a>
                <a class="settings-nav__link" href="/settings/profile">"Profile"</a>
            </nav>
            <BusinessForm initial=initial/>
        </main>
    }
}
