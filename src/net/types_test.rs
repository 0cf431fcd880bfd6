use super::*;

fn profile_json(role: &str) -> String {
    format!(
        r#"{{"id":"u1","email":"ana@linguaclub.example","name":"Ana","role":"{role}"}}"#
    )
}

#[test]
fn profile_decodes_admin_role() {
    let profile: Profile = serde_json::from_str(&profile_json("admin")).unwrap();
    assert_eq!(profile.role, Role::Admin);
    assert!(profile.is_admin());
}

#[test]
fn profile_decodes_teacher_role_as_non_admin() {
    let profile: Profile = serde_json::from_str(&profile_json("teacher")).unwrap();
    assert_eq!(profile.role, Role::Teacher);
    assert!(!profile.is_admin());
}

#[test]
fn profile_decodes_unrecognized_role_as_unknown() {
    let profile: Profile = serde_json::from_str(&profile_json("superuser")).unwrap();
    assert_eq!(profile.role, Role::Unknown);
    assert!(!profile.is_admin());
}

#[test]
fn login_response_decodes_user_and_token() {
    let json = format!(r#"{{"user":{},"token":"tok-1"}}"#, profile_json("admin"));
    let resp: LoginResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.token, "tok-1");
    assert_eq!(resp.user.email, "ana@linguaclub.example");
}

#[test]
fn error_body_message_is_optional() {
    let with: ErrorBody = serde_json::from_str(r#"{"message":"bad credentials"}"#).unwrap();
    assert_eq!(with.message.as_deref(), Some("bad credentials"));

    let without: ErrorBody = serde_json::from_str("{}").unwrap();
    assert!(without.message.is_none());
}

#[test]
fn api_error_message_or_prefers_server_message() {
    let err = ApiError::from_status(401, Some("bad credentials".to_owned()));
    assert_eq!(err.message_or("fallback"), "bad credentials");
}

#[test]
fn api_error_message_or_falls_back_when_server_is_silent() {
    let err = ApiError::transport();
    assert_eq!(err.message_or("fallback"), "fallback");
}

#[test]
fn api_error_display_covers_all_shapes() {
    assert_eq!(
        ApiError::from_status(401, Some("nope".to_owned())).to_string(),
        "nope (status 401)"
    );
    assert_eq!(
        ApiError::from_status(500, None).to_string(),
        "request failed with status 500"
    );
    assert_eq!(ApiError::transport().to_string(), "request failed");
}
