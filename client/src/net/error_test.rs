use super::*;

#[test]
fn rejected_extracts_backend_message() {
    let err = ApiError::rejected(400, r#"{"message":"Email already registered"}"#);
    assert_eq!(err, ApiError::Rejected { status: 400, message: Some("Email already registered".to_owned()) });
}

#[test]
fn rejected_ignores_non_json_and_blank_messages() {
    assert_eq!(ApiError::rejected(500, "<html>oops</html>"), ApiError::Rejected { status: 500, message: None });
    assert_eq!(ApiError::rejected(400, r#"{"message":"   "}"#), ApiError::Rejected { status: 400, message: None });
    assert_eq!(ApiError::rejected(400, ""), ApiError::Rejected { status: 400, message: None });
}

#[test]
fn describe_prefers_backend_message_then_fallbacks() {
    let rejected_fallback = "Login failed. Check your credentials.";
    let failed_fallback = "Something went wrong during login.";

    let with_message = ApiError::Rejected { status: 401, message: Some("Bad password".to_owned()) };
    assert_eq!(with_message.describe(rejected_fallback, failed_fallback), "Bad password");

    let bare = ApiError::Rejected { status: 401, message: None };
    assert_eq!(bare.describe(rejected_fallback, failed_fallback), rejected_fallback);

    let network = ApiError::Network("offline".to_owned());
    assert_eq!(network.describe(rejected_fallback, failed_fallback), failed_fallback);
    assert_eq!(ApiError::Decode("x".to_owned()).describe(rejected_fallback, failed_fallback), failed_fallback);
}

#[test]
fn display_formats() {
    assert_eq!(ApiError::Rejected { status: 502, message: None }.to_string(), "request failed: 502");
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}
