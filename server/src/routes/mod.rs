//! Router assembly and the server-side page shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages are routed by Axum and rendered to HTML per-handler: each page
//! handler runs its guard chain first and only renders once every guard has
//! passed. Hydration assets are served from `/pkg`; the shell tags `<body>`
//! with a page slug and embeds initial data as JSON for the client
//! entrypoint.

pub mod auth;
pub mod settings;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use leptos::prelude::{IntoView, Owner, RenderHtml};
use serde::Serialize;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route(auth::LOGIN_PATH, get(auth::login_page))
        .route("/auth/dev-login", post(auth::dev_login))
        .route(settings::ONBOARDING_PATH, get(settings::onboarding_page))
        .route("/settings/business", get(settings::business_settings))
        .route("/settings/profile", get(settings::profile_settings))
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/supplier", post(settings::create_supplier).patch(settings::update_supplier))
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(pkg_dir()))
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Landing route: the settings guard chain decides where the user ends up.
async fn root() -> Redirect {
    Redirect::temporary("/settings/business")
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Resolve the directory holding hydration assets (WASM, JS, CSS).
fn pkg_dir() -> PathBuf {
    std::env::var("PKG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../client/pkg"))
}

/// Escape embedded JSON so a `</script>` inside a field cannot close the
/// initial-data tag.
pub(crate) fn escape_json_for_script(json: &str) -> String {
    json.replace("</", "<\\/")
}

/// Render a page component into the HTML shell.
///
/// `slug` lands on `<body data-page="...">` and selects the page the client
/// entrypoint mounts; `initial` is embedded as JSON for hydration seed data.
pub(crate) fn render_page<F, N>(title: &str, slug: &str, initial: Option<&impl Serialize>, page: F) -> Response
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    let initial_tag = match initial.map(serde_json::to_string) {
        None => String::new(),
        Some(Ok(json)) => {
            format!(
                "<script id=\"initial-data\" type=\"application/json\">{}</script>",
                escape_json_for_script(&json)
            )
        }
        Some(Err(e)) => {
            tracing::error!(error = %e, "failed to serialize initial page data");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    // Render under a fresh reactive owner so components can provide/consume
    // context during SSR.
    let owner = Owner::new();
    let body = owner.with(move || page().to_html());
    let html = format!(
        "<!DOCTYPE html>\
         <html lang=\"en\">\
         <head>\
         <meta charset=\"utf-8\"/>\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"/>\
         <title>{title}</title>\
         <link rel=\"stylesheet\" href=\"/pkg/portal.css\"/>\
         </head>\
         <body data-page=\"{slug}\">{body}{initial_tag}\
         <script type=\"module\">import init from '/pkg/client.js'; init();</script>\
         </body>\
         </html>"
    );

    Html(html).into_response()
}
