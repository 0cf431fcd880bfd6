//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Admin-only routes should apply identical unauthorized redirect behavior.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionContext;

/// Redirect to `/login` whenever the session has loaded without an admin.
pub fn install_admin_redirect<F>(session: SessionContext, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        if !session.loading() && !session.is_admin() {
            navigate("/login", NavigateOptions::default());
        }
    });
}
