use super::*;

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header("tok-1"), "Bearer tok-1");
}

#[test]
fn endpoints_are_under_the_auth_prefix() {
    assert_eq!(LOGIN_ENDPOINT, "/api/auth/login");
    assert_eq!(PROFILE_ENDPOINT, "/api/auth/profile");
}

// Token slot transitions live in one test: the slot is thread-local and the
// test harness runs each #[test] on its own thread.
#[test]
fn token_slot_set_read_remove() {
    assert!(token().is_none());

    set_token("tok-1");
    assert_eq!(token().as_deref(), Some("tok-1"));

    set_token("tok-2");
    assert_eq!(token().as_deref(), Some("tok-2"));

    remove_token();
    assert!(token().is_none());

    // Removing again is harmless.
    remove_token();
    assert!(token().is_none());
}
