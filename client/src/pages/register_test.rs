use super::*;

fn filled_form() -> RegisterForm {
    let mut form = RegisterForm::default();
    for (name, value) in [
        ("email", " owner@shop.test "),
        ("password", " secret "),
        ("tenantId", "shop-1"),
        ("shopifyBaseUrl", "https://shop-1.myshopify.com "),
        ("accessToken", "shpat_123"),
        ("shopName", "Shop One"),
    ] {
        form.set_field(name, value.to_owned());
    }
    form
}

#[test]
fn every_listed_field_round_trips_through_the_form() {
    let form = filled_form();
    for (name, _, _) in FIELDS {
        assert!(!form.field(name).is_empty(), "field {name} should be set");
    }
}

#[test]
fn unknown_field_names_are_ignored() {
    let mut form = RegisterForm::default();
    form.set_field("bogus", "x".into());
    assert_eq!(form, RegisterForm::default());
    assert_eq!(form.field("bogus"), "");
}

#[test]
fn request_nests_store_fields_under_tenant() {
    let body = serde_json::to_value(filled_form().to_request()).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "email": "owner@shop.test",
            "password": " secret ",
            "tenant": {
                "tenantId": "shop-1",
                "shopifyBaseUrl": "https://shop-1.myshopify.com",
                "accessToken": "shpat_123",
                "shopName": "Shop One"
            }
        })
    );
}

#[test]
fn registration_rejection_includes_backend_message() {
    let err = ApiError::rejected(409, r#"{"message":"Email already registered"}"#);
    assert_eq!(registration_error_text(&err), "Registration failed: Email already registered");
}

#[test]
fn registration_rejection_without_message_is_unknown() {
    let err = ApiError::rejected(500, "<html>");
    assert_eq!(registration_error_text(&err), "Registration failed: Unknown error");
}

#[test]
fn registration_network_failure_is_generic() {
    let err = ApiError::Network("offline".into());
    assert_eq!(registration_error_text(&err), "Something went wrong during registration.");
}

#[test]
fn otp_errors_distinguish_rejection_from_failure() {
    assert_eq!(otp_error_text(&ApiError::rejected(400, "")), "Invalid OTP. Please try again.");
    assert_eq!(otp_error_text(&ApiError::Unavailable), "Something went wrong while verifying OTP.");
}
