//! Settings pages and the supplier profile API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both settings pages run the same two-step guard chain sequentially: the
//! session guard (extractor) resolves the principal, then the presence guard
//! fetches the one supplier row and redirects to onboarding when it does not
//! exist. Only after both pass is the form page rendered, seeded with the
//! fetched record.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use leptos::view;
use model::{SupplierPatch, SupplierRecord};

use super::auth::AuthPrincipal;
use crate::guard::{self, Guarded};
use crate::services::supplier::{self, SupplierError};
use crate::state::AppState;

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;

/// Fixed onboarding entry point the presence guard redirects to.
pub const ONBOARDING_PATH: &str = "/onboarding";

/// Run the entity presence guard for the authenticated principal.
///
/// Returns the supplier record or a terminal response (onboarding redirect
/// on absence, 500 on lookup failure).
async fn require_supplier(state: &AppState, auth: &AuthPrincipal) -> Result<SupplierRecord, Response> {
    match guard::require_row(supplier::fetch_for_user(&state.pool, auth.principal.id), ONBOARDING_PATH).await {
        Ok(Guarded::Found(record)) => Ok(record),
        Ok(Guarded::Missing(redirect)) => Err(redirect.into_response()),
        Err(e) => Err(e.into_response()),
    }
}

/// `GET /settings/business` — business details form, seeded with the
/// current supplier record.
pub async fn business_settings(State(state): State<AppState>, auth: AuthPrincipal) -> Response {
    let record = match require_supplier(&state, &auth).await {
        Ok(record) => record,
        Err(response) => return response,
    };

    let initial = record.clone();
    super::render_page("Business Settings", "settings-business", Some(&record), move || {
        view! { <client::pages::business_settings::BusinessSettingsPage initial=initial/> }
    })
}

/// `GET /settings/profile` — contact profile form, seeded with the
/// current supplier record.
pub async fn profile_settings(State(state): State<AppState>, auth: AuthPrincipal) -> Response {
    let record = match require_supplier(&state, &auth).await {
        Ok(record) => record,
        Err(response) => return response,
    };

    let initial = record.clone();
    super::render_page("Profile Settings", "settings-profile", Some(&record), move || {
        view! { <client::pages::profile_settings::ProfileSettingsPage initial=initial/> }
    })
}

/// `GET /onboarding` — landing page for principals without a supplier row.
pub async fn onboarding_page(_auth: AuthPrincipal) -> Response {
    super::render_page("Get Started", "onboarding", None::<&()>, client::pages::onboarding::OnboardingPage)
}

#[derive(serde::Deserialize)]
pub struct CreateSupplierRequest {
    name: String,
}

/// `POST /api/supplier` — create the caller's supplier row (onboarding
/// completion). Conflicts when a row already exists.
pub async fn create_supplier(
    State(state): State<AppState>,
    auth: AuthPrincipal,
    Json(req): Json<CreateSupplierRequest>,
) -> Result<(StatusCode, Json<SupplierRecord>), StatusCode> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }

    match supplier::create(&state.pool, auth.principal.id, name).await {
        Ok(record) => Ok((StatusCode::CREATED, Json(record))),
        Err(SupplierError::Database(e)) if e.as_database_error().is_some_and(|d| d.is_unique_violation()) => {
            Err(StatusCode::CONFLICT)
        }
        Err(e) => {
            tracing::error!(error = %e, "supplier creation failed");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// `PATCH /api/supplier` — apply a partial update to the caller's supplier row.
pub async fn update_supplier(
    State(state): State<AppState>,
    auth: AuthPrincipal,
    Json(patch): Json<SupplierPatch>,
) -> Result<Json<SupplierRecord>, StatusCode> {
    match supplier::update(&state.pool, auth.principal.id, &patch).await {
        Ok(record) => Ok(Json(record)),
        Err(SupplierError::EmptyPatch) => Err(StatusCode::UNPROCESSABLE_ENTITY),
        Err(SupplierError::NotFound(_)) => Err(StatusCode::NOT_FOUND),
        Err(SupplierError::Database(e)) => {
            tracing::error!(error = %e, "supplier update failed");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
