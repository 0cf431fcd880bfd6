use super::*;
use crate::net::types::Role;

fn profile(role: Role) -> Profile {
    Profile {
        id: "u1".to_owned(),
        email: "ana@linguaclub.example".to_owned(),
        name: "Ana".to_owned(),
        role,
    }
}

// =============================================================
// SessionState defaults and derived access
// =============================================================

#[test]
fn state_starts_loading_with_no_session() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(state.session.is_none());
}

#[test]
fn is_admin_is_false_without_a_session() {
    assert!(!SessionState::default().is_admin());
}

#[test]
fn is_admin_tracks_the_session_role_exactly() {
    let mut state = SessionState::default();

    state.session = Some(profile(Role::Admin));
    assert!(state.is_admin());

    // A non-admin profile must never read as admin, even if forced in.
    state.session = Some(profile(Role::Teacher));
    assert!(!state.is_admin());

    state.session = None;
    assert!(!state.is_admin());
}

#[test]
fn is_admin_follows_login_and_logout_transitions() {
    let mut state = SessionState::default();

    // Bootstrap completes with an admitted admin.
    state.session = admit_admin(profile(Role::Admin));
    state.loading = false;
    assert!(state.is_admin());

    // Logout clears the session.
    state.session = None;
    assert!(!state.is_admin());
}

// =============================================================
// Bootstrap admission
// =============================================================

#[test]
fn admit_admin_keeps_admin_profiles() {
    let admitted = admit_admin(profile(Role::Admin));
    assert_eq!(admitted, Some(profile(Role::Admin)));
}

#[test]
fn admit_admin_rejects_every_other_role() {
    for role in [Role::Teacher, Role::Student, Role::Unknown] {
        assert_eq!(admit_admin(profile(role)), None);
    }
}

// =============================================================
// Login verdicts
// =============================================================

#[test]
fn login_verdict_grants_admin_logins_with_their_token() {
    let verdict = login_verdict(Ok(LoginResponse {
        user: profile(Role::Admin),
        token: "tok-1".to_owned(),
    }));
    assert_eq!(
        verdict,
        LoginVerdict::Granted {
            user: profile(Role::Admin),
            token: "tok-1".to_owned(),
        }
    );
}

#[test]
fn login_verdict_denies_non_admin_logins() {
    // The server handed back a valid token; the verdict drops it.
    let verdict = login_verdict(Ok(LoginResponse {
        user: profile(Role::Student),
        token: "tok-1".to_owned(),
    }));
    assert_eq!(verdict, LoginVerdict::Denied);
}

#[test]
fn login_verdict_surfaces_the_server_message_on_failure() {
    let verdict = login_verdict(Err(ApiError::from_status(
        401,
        Some("Invalid credentials".to_owned()),
    )));
    assert_eq!(
        verdict,
        LoginVerdict::Failed("Invalid credentials".to_owned())
    );
}

#[test]
fn login_verdict_uses_the_generic_fallback_without_a_server_message() {
    let verdict = login_verdict(Err(ApiError::transport()));
    assert_eq!(
        verdict,
        LoginVerdict::Failed(LOGIN_FALLBACK_MESSAGE.to_owned())
    );
}

// =============================================================
// Storage keys
// =============================================================

#[test]
fn admin_token_key_is_scoped_away_from_member_sessions() {
    assert_eq!(ADMIN_TOKEN_KEY, "linguaclub_admin_token");
    assert_ne!(ADMIN_TOKEN_KEY, crate::state::locale::LOCALE_KEY);
}
