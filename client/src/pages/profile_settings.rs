//! Contact profile settings page.

use leptos::prelude::*;
use model::SupplierRecord;

use crate::components::profile_form::ProfileForm;

/// Settings form for contact details, seeded with the supplier record the
/// server's guard chain already resolved.
#[component]
pub fn ProfileSettingsPage(initial: SupplierRecord) -> impl IntoView {
    view! {
        <main class="settings-page">
            <h1>"Profile Settings"</h1>
            <nav class="settings-nav">
                <a class="settings-nav__link" href="/settings/business">"Business"</a>
                <a class="settings-nav__link settings-nav__link--active" href="/settings/profile">
                    "Profile"
                </a>
            </nav>
            <ProfileForm initial=initial/>
        </main>
    }
}
