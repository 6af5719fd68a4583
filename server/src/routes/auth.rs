//! Auth routes — session guard, login page, logout, dev login.
//!
//! ARCHITECTURE
//! ============
//! The session guard is an extractor: page handlers take `AuthPrincipal` as
//! a parameter and never run without a resolved principal. Rejection is a
//! redirect to the login page, which terminates rendering for that request.
//! Principals themselves are provisioned externally; only the env-gated dev
//! login creates them here.

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use model::Principal;
use serde::Deserialize;
use time::Duration;
use uuid::Uuid;

use crate::services::session;
use crate::state::AppState;

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;

const COOKIE_NAME: &str = "session_token";

/// Fixed login entry point the session guard redirects to.
pub const LOGIN_PATH: &str = "/auth/login";

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

pub(crate) fn cookie_secure() -> bool {
    env_bool("COOKIE_SECURE").unwrap_or(false)
}

fn dev_login_enabled() -> bool {
    env_bool("DEV_LOGIN").unwrap_or(false)
}

fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(axum_extra::extract::cookie::SameSite::Lax)
        .secure(cookie_secure())
        .build()
}

fn clear_session_cookie() -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(axum_extra::extract::cookie::SameSite::Lax)
        .secure(cookie_secure())
        .max_age(Duration::ZERO)
        .build()
}

// =============================================================================
// SESSION GUARD
// =============================================================================

/// Authenticated principal extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthPrincipal {
    pub principal: Principal,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthPrincipal
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(Redirect::temporary(LOGIN_PATH).into_response());
        }

        let app_state = AppState::from_ref(state);
        // A failed session lookup is a server fault, not an anonymous user.
        let principal = session::validate_session(&app_state.pool, token)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "session lookup failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            })?
            .ok_or_else(|| Redirect::temporary(LOGIN_PATH).into_response())?;

        Ok(Self { principal, token: token.to_owned() })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /auth/login` — render the sign-in page.
///
/// This is a buyer-credentials entry point; the page mounts the
/// supplier-login warning notice on arrival.
pub async fn login_page() -> Response {
    super::render_page("Sign In", "login", None::<&()>, client::pages::login::LoginPage)
}

/// `GET /api/auth/me` — return the current principal.
pub async fn me(auth: AuthPrincipal) -> Json<Principal> {
    Json(auth.principal)
}

/// `POST /api/auth/logout` — delete session, clear cookie.
pub async fn logout(State(state): State<AppState>, auth: AuthPrincipal) -> impl IntoResponse {
    let _ = session::delete_session(&state.pool, &auth.token).await;

    let jar = CookieJar::new().add(clear_session_cookie());
    (jar, StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
pub struct DevLoginRequest {
    email: String,
    name: String,
}

/// Success response for the dev login: set the session cookie and nothing
/// else. The page navigates itself after a successful sign-in; a redirect
/// here would be re-POSTed by fetch and hit the GET-only settings route.
fn dev_login_success(token: String) -> Response {
    let jar = CookieJar::new().add(session_cookie(token));
    (jar, StatusCode::NO_CONTENT).into_response()
}

/// `POST /auth/dev-login` — local-development session bootstrap.
///
/// Enabled only when `DEV_LOGIN=true`; production principals come from the
/// external auth provider.
pub async fn dev_login(State(state): State<AppState>, Json(req): Json<DevLoginRequest>) -> Result<Response, StatusCode> {
    if !dev_login_enabled() {
        return Err(StatusCode::NOT_FOUND);
    }

    let user_id: Uuid = sqlx::query_scalar(
        "INSERT INTO users (id, email, name) VALUES ($1, $2, $3)
         ON CONFLICT (email) DO UPDATE SET name = EXCLUDED.name
         RETURNING id",
    )
    .bind(Uuid::new_v4())
    .bind(req.email.trim())
    .bind(req.name.trim())
    .fetch_one(&state.pool)
    .await
    .map_err(|e| {
        tracing::error!(error = %e, "dev login user upsert failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let token = session::create_session(&state.pool, user_id).await.map_err(|e| {
        tracing::error!(error = %e, "dev login session creation failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    tracing::info!(%user_id, "dev login session issued");
    Ok(dev_login_success(token))
}
