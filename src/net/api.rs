//! REST client for the subscription API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side (SSR):
//! inert stubs returning a transport error, since authentication only
//! happens in the browser.
//!
//! TOKEN HANDLING
//! ==============
//! The bearer token is process-global, mirroring the API collaborator's
//! single mutable credential slot. WASM runs the UI on one thread, so a
//! `thread_local` cell is the whole synchronization story. Callers should
//! prefer the credential helpers in `state::session`, which keep this slot
//! and persisted storage in step.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::cell::RefCell;

use super::types::{ApiError, LoginResponse, Profile};

/// POST target for interactive sign-in.
pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
/// GET target for the current account's profile.
pub const PROFILE_ENDPOINT: &str = "/api/auth/profile";

thread_local! {
    static BEARER_TOKEN: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Configure the bearer token attached to authenticated requests.
pub fn set_token(token: &str) {
    BEARER_TOKEN.with(|cell| *cell.borrow_mut() = Some(token.to_owned()));
}

/// Drop the configured bearer token.
pub fn remove_token() {
    BEARER_TOKEN.with(|cell| *cell.borrow_mut() = None);
}

/// The currently configured bearer token, if any.
pub fn token() -> Option<String> {
    BEARER_TOKEN.with(|cell| cell.borrow().clone())
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(feature = "hydrate")]
async fn error_from_response(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let message = resp
        .json::<super::types::ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message);
    ApiError::from_status(status, message)
}

/// Sign in with email + password via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns an [`ApiError`] carrying the server's message for rejected
/// credentials, or an empty transport error when the request itself failed.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .json(&payload)
            .map_err(|err| {
                log::warn!("login request could not be built: {err}");
                ApiError::transport()
            })?
            .send()
            .await
            .map_err(|err| {
                log::warn!("login request failed: {err}");
                ApiError::transport()
            })?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        resp.json::<LoginResponse>().await.map_err(|err| {
            log::warn!("login response did not decode: {err}");
            ApiError::transport()
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::transport())
    }
}

/// Fetch the profile behind the configured token via `GET /api/auth/profile`.
///
/// # Errors
///
/// Returns an [`ApiError`] when no usable response arrives or the server
/// rejects the token.
pub async fn fetch_profile() -> Result<Profile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let mut req = gloo_net::http::Request::get(PROFILE_ENDPOINT);
        if let Some(token) = token() {
            req = req.header("Authorization", &bearer_header(&token));
        }
        let resp = req.send().await.map_err(|err| {
            log::warn!("profile request failed: {err}");
            ApiError::transport()
        })?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        resp.json::<Profile>().await.map_err(|err| {
            log::warn!("profile response did not decode: {err}");
            ApiError::transport()
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::transport())
    }
}
