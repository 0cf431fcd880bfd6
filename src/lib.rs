//! # linguaclub-client
//!
//! Leptos + WASM client for the LinguaClub language-learning subscription
//! site's admin area. Owns the session, locale, and notification providers
//! that the route components consume via context.
//!
//! The interesting machinery lives in `state`: an asynchronous
//! token-bootstrap for the admin session and a persisted locale with
//! catalog-backed translation. `net` talks to the subscription API, which
//! this crate treats as an external service.

pub mod app;
pub mod components;
pub mod i18n;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: take over the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
