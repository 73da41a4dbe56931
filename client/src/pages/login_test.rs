use super::*;

#[test]
fn rejected_login_shows_backend_message() {
    let err = ApiError::rejected(401, r#"{"message":"Invalid password"}"#);
    assert_eq!(login_error_text(&err), "Invalid password");
}

#[test]
fn rejected_login_without_message_uses_fallback() {
    let err = ApiError::rejected(401, "");
    assert_eq!(login_error_text(&err), "Login failed. Check your credentials.");
}

#[test]
fn network_failure_uses_generic_text() {
    let err = ApiError::Network("offline".into());
    assert_eq!(login_error_text(&err), "Something went wrong during login.");
    let err = ApiError::Decode("missing field".into());
    assert_eq!(login_error_text(&err), "Something went wrong during login.");
}

#[test]
fn redirect_waits_two_seconds() {
    assert_eq!(REDIRECT_DELAY_MS, 2000);
}
