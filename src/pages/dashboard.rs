//! Admin dashboard page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authenticated landing route. Gates on the session bootstrap, kicks
//! non-admins back to `/login`, and hosts the locale switcher + sign-out.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::locale_switcher::LocaleSwitcher;
use crate::net::types::Profile;
use crate::state::locale::use_locale;
use crate::state::session::use_session;
use crate::util::auth::install_admin_redirect;

/// Name to greet the admin with; falls back to the email when the account
/// has no display name set.
fn display_name(profile: &Profile) -> &str {
    if profile.name.trim().is_empty() {
        &profile.email
    } else {
        &profile.name
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let locale = use_locale();
    let navigate = use_navigate();

    install_admin_redirect(session, navigate);

    let welcome = move || {
        session
            .session()
            .map(|profile| {
                locale.t_with("dashboard.welcome", &[("name", display_name(&profile))])
            })
            .unwrap_or_default()
    };

    let signed_in_as = move || {
        session
            .session()
            .map(|profile| {
                locale.t_with(
                    "dashboard.signed_in_as",
                    &[("name", display_name(&profile)), ("email", &profile.email)],
                )
            })
            .unwrap_or_default()
    };

    view! {
        <div class="dashboard-page">
            <Show
                when=move || !session.loading()
                fallback=move || {
                    view! {
                        <p class="dashboard-loading">{move || locale.t("dashboard.loading")}</p>
                    }
                }
            >
                <header class="dashboard-header">
                    <h1>{move || locale.t("dashboard.title")}</h1>
                    <LocaleSwitcher/>
                    <button class="dashboard-signout" on:click=move |_| session.logout()>
                        {move || locale.t("dashboard.sign_out")}
                    </button>
                </header>
                <section class="dashboard-body">
                    <p class="dashboard-welcome">{welcome}</p>
                    <p class="dashboard-identity">{signed_in_as}</p>
                </section>
            </Show>
        </div>
    }
}
