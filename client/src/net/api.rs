//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs with message strings instead of panics so a
//! failed save degrades to an inline form message without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use model::{SupplierPatch, SupplierRecord};

#[cfg(any(test, feature = "hydrate"))]
fn save_failed_message(status: u16) -> String {
    format!("save failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn sign_in_failed_message(status: u16) -> String {
    format!("sign in failed: {status}")
}

/// Apply a partial update to the caller's supplier row via `PATCH /api/supplier`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn update_supplier(patch: &SupplierPatch) -> Result<SupplierRecord, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::patch("/api/supplier")
            .json(patch)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(save_failed_message(resp.status()));
        }
        resp.json::<SupplierRecord>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = patch;
        Err("not available on server".to_owned())
    }
}

/// Create the caller's supplier row via `POST /api/supplier` (onboarding
/// completion).
///
/// # Errors
///
/// Returns an error string if the request fails, including a conflict when
/// a profile already exists.
pub async fn create_supplier(name: &str) -> Result<SupplierRecord, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "name": name });
        let resp = gloo_net::http::Request::post("/api/supplier")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(save_failed_message(resp.status()));
        }
        resp.json::<SupplierRecord>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        Err("not available on server".to_owned())
    }
}

/// Local-development sign-in via `POST /auth/dev-login`.
///
/// # Errors
///
/// Returns an error string if the request fails or dev login is disabled
/// on the server.
pub async fn dev_login(email: &str, name: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "name": name });
        let resp = gloo_net::http::Request::post("/auth/dev-login")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(sign_in_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, name);
        Err("not available on server".to_owned())
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout").send().await;
    }
}
