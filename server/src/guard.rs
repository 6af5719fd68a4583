//! Reusable fetch-then-branch-on-presence guard for page handlers.
//!
//! DESIGN
//! ======
//! Every settings page repeats the same shape: look up exactly one row for
//! the authenticated principal and redirect to an onboarding/entry path when
//! it is missing. `require_row` centralizes that branch so pages only supply
//! the lookup future and the not-found path.
//!
//! ERROR HANDLING
//! ==============
//! A failed query is NOT absence. Lookup errors surface as
//! `GuardError::Database` (rendered as 500) so a transient database failure
//! never routes an existing user into onboarding.

use std::future::Future;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;

/// Error raised by a presence guard, distinct from row absence.
#[derive(Debug, thiserror::Error)]
pub enum GuardError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for GuardError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "presence guard lookup failed");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}

/// Outcome of a presence guard: the row, or a terminal redirect.
pub enum Guarded<T> {
    Found(T),
    Missing(Redirect),
}

/// Run a zero-or-one-row lookup and branch on presence.
///
/// Returns the row when found, a redirect to `missing_path` when the lookup
/// legitimately yields no row, and `GuardError` when the lookup itself fails.
///
/// # Errors
///
/// Returns `GuardError::Database` if the lookup future fails.
pub async fn require_row<T, Fut>(lookup: Fut, missing_path: &str) -> Result<Guarded<T>, GuardError>
where
    Fut: Future<Output = Result<Option<T>, sqlx::Error>>,
{
    match lookup.await? {
        Some(row) => Ok(Guarded::Found(row)),
        None => Ok(Guarded::Missing(Redirect::temporary(missing_path))),
    }
}
