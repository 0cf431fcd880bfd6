//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_host::ToastHost;
use crate::pages::{dashboard::DashboardPage, login::LoginPage};
use crate::state::{locale, session, toast};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Installs the shared contexts and sets up client-side routing. Order
/// matters: the toast sink must exist before the session provider captures
/// it, and both locale and session start their persisted-state bootstrap
/// here, once per application instance.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let toasts = toast::provide_toasts();
    let _locale = locale::provide_locale(None);
    let _session = session::provide_session(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/linguaclub.css"/>
        <Title text="LinguaClub Admin"/>

        <ToastHost/>
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
