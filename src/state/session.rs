//! Admin session state: bootstrap, login, logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the only writable copy of the admin session. Consumers read through
//! the context handle; every mutation funnels through `login`/`logout` (plus
//! the one-shot bootstrap), never through direct field writes.
//!
//! CREDENTIALS
//! ===========
//! The persisted token and the API client's bearer slot are two halves of
//! one logical credential. `store_credentials`/`clear_credentials` write or
//! clear both together so no code path can leave them out of step.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{ApiError, LoginResponse, Profile};
use crate::state::toast::ToastContext;
use crate::util::storage;

/// localStorage key for the persisted admin token. Deliberately distinct
/// from any member-facing session key.
pub const ADMIN_TOKEN_KEY: &str = "linguaclub_admin_token";

const LOGIN_FALLBACK_MESSAGE: &str = "Something went wrong. Please try again.";

/// Admin session state.
///
/// `loading` starts true and flips false exactly once per operation
/// completion; consumers must not interpret `session` until it is false.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    /// The authenticated admin, when one exists. A populated value always
    /// carries the admin role.
    pub session: Option<Profile>,
    /// True while bootstrap or an interactive login is in flight.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            session: None,
            loading: true,
        }
    }
}

impl SessionState {
    /// True iff a session is present and carries the admin role.
    ///
    /// Derived on every read rather than stored, so it can never diverge
    /// from `session`.
    pub fn is_admin(&self) -> bool {
        self.session.as_ref().is_some_and(Profile::is_admin)
    }
}

/// Keep a fetched profile only when it carries the admin role.
#[cfg(any(test, feature = "hydrate"))]
fn admit_admin(profile: Profile) -> Option<Profile> {
    profile.is_admin().then_some(profile)
}

/// What an interactive login attempt decided, before side effects apply.
#[derive(Debug, PartialEq)]
enum LoginVerdict {
    /// Admin account: persist the token, populate the session.
    Granted { user: Profile, token: String },
    /// Authenticated fine, but not an admin. Nothing is persisted; the
    /// returned token is discarded.
    Denied,
    /// The request failed; the message is already user-presentable.
    Failed(String),
}

fn login_verdict(result: Result<LoginResponse, ApiError>) -> LoginVerdict {
    match result {
        Ok(resp) if resp.user.is_admin() => LoginVerdict::Granted {
            user: resp.user,
            token: resp.token,
        },
        Ok(_) => LoginVerdict::Denied,
        Err(err) => LoginVerdict::Failed(err.message_or(LOGIN_FALLBACK_MESSAGE)),
    }
}

/// Persist the token and configure the API client, as one step.
fn store_credentials(token: &str) {
    storage::set_item(ADMIN_TOKEN_KEY, token);
    api::set_token(token);
}

/// Remove the persisted token and clear the API client, as one step.
fn clear_credentials() {
    storage::remove_item(ADMIN_TOKEN_KEY);
    api::remove_token();
}

/// Handle to the admin session context.
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: RwSignal<SessionState>,
    toasts: ToastContext,
}

/// Install the session context and start the one-shot storage bootstrap.
///
/// The toast handle is captured here so every notification the session
/// lifecycle emits goes through the same sink.
pub fn provide_session(toasts: ToastContext) -> SessionContext {
    let ctx = SessionContext {
        state: RwSignal::new(SessionState::default()),
        toasts,
    };
    provide_context(ctx);
    ctx.start_bootstrap();
    ctx
}

/// Access the session context.
///
/// # Panics
///
/// Panics when called outside the provider scope; that is a wiring defect,
/// not a runtime condition to recover from.
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

impl SessionContext {
    /// The current admin, when one exists (reactive read).
    pub fn session(self) -> Option<Profile> {
        self.state.with(|s| s.session.clone())
    }

    /// True while bootstrap or a login is in flight (reactive read).
    pub fn loading(self) -> bool {
        self.state.with(|s| s.loading)
    }

    /// Whether the current session holds admin access (reactive read).
    pub fn is_admin(self) -> bool {
        self.state.with(SessionState::is_admin)
    }

    /// Attempt an interactive admin login. Resolves to whether access was
    /// granted; all failures surface as toasts, never as errors to catch.
    pub async fn login(self, email: &str, password: &str) -> bool {
        // Reject overlapping attempts instead of letting them race.
        if self.state.with_untracked(|s| s.loading) {
            return false;
        }
        self.state.update(|s| s.loading = true);

        let granted = match login_verdict(api::login(email, password).await) {
            LoginVerdict::Granted { user, token } => {
                store_credentials(&token);
                self.state.update(|s| s.session = Some(user));
                self.toasts
                    .success("Signed in", "Welcome to the LinguaClub admin area.");
                true
            }
            LoginVerdict::Denied => {
                self.toasts.error(
                    "Access denied",
                    "This account does not have administrator access.",
                );
                false
            }
            LoginVerdict::Failed(message) => {
                self.toasts.error("Sign-in failed", &message);
                false
            }
        };

        // Every verdict path lands here, so loading cannot stick.
        self.state.update(|s| s.loading = false);
        granted
    }

    /// End the admin session. Synchronous and infallible.
    pub fn logout(self) {
        clear_credentials();
        self.state.update(|s| s.session = None);
        self.toasts
            .success("Signed out", "Your admin session has ended.");
    }

    /// Kick off the asynchronous bootstrap without blocking render. On the
    /// server this is inert; the hydrating client runs the real thing.
    fn start_bootstrap(self) {
        #[cfg(feature = "hydrate")]
        {
            let state = self.state;
            leptos::task::spawn_local(async move {
                let session = bootstrap_session().await;
                state.update(|s| {
                    s.session = session;
                    s.loading = false;
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = self;
        }
    }
}

/// Try to rebuild a session from the persisted token.
///
/// Absent token: resolves immediately, no request made. Anything short of
/// an admin profile clears the stored credential so the next visit starts
/// clean. Failures are logged, never surfaced.
#[cfg(feature = "hydrate")]
async fn bootstrap_session() -> Option<Profile> {
    let token = storage::get_item(ADMIN_TOKEN_KEY)?;
    api::set_token(&token);
    match api::fetch_profile().await {
        Ok(profile) => {
            let admitted = admit_admin(profile);
            if admitted.is_none() {
                log::warn!("stored admin token belongs to a non-admin account");
                clear_credentials();
            }
            admitted
        }
        Err(err) => {
            log::warn!("admin session bootstrap failed: {err}");
            clear_credentials();
            None
        }
    }
}
