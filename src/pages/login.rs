//! Admin sign-in page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only unauthenticated route. Submits credentials through the session
//! context and leaves all outcome messaging to the toast sink; the page
//! itself only reports local validation problems.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::locale::use_locale;
use crate::state::session::use_session;

/// Trim and require both fields. The email is trimmed; the password is
/// taken verbatim since trailing spaces can be legitimate.
fn validate_login_input(email: &str, password: &str) -> Option<(String, String)> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return None;
    }
    Some((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let locale = use_locale();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    // Someone with a live admin session has no business on this page.
    let navigate_home = navigate.clone();
    Effect::new(move || {
        if !session.loading() && session.is_admin() {
            navigate_home("/", NavigateOptions::default());
        }
    });

    let navigate_submit = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if session.loading() {
            return;
        }
        let Some((email_value, password_value)) =
            validate_login_input(&email.get(), &password.get())
        else {
            info.set(locale.t("login.missing_fields"));
            return;
        };
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate_submit.clone();
            leptos::task::spawn_local(async move {
                if session.login(&email_value, &password_value).await {
                    navigate("/", NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, &navigate_submit);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>{move || locale.t("login.title")}</h1>
                <p class="login-card__subtitle">{move || locale.t("login.subtitle")}</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder=move || locale.t("login.email")
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder=move || locale.t("login.password")
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button
                        class="login-button"
                        type="submit"
                        disabled=move || session.loading()
                    >
                        {move || locale.t("login.submit")}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
