use super::*;
use chrono::NaiveDate;

fn may_range() -> DateRange {
    DateRange::new(
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 5, 31).unwrap(),
    )
}

#[test]
fn auth_endpoints_are_relative_api_paths() {
    assert_eq!(LOGIN_ENDPOINT, "/api/auth/login");
    assert_eq!(REGISTER_TENANT_ENDPOINT, "/api/auth/register/tenant");
    assert_eq!(VERIFY_OTP_ENDPOINT, "/api/auth/verify-otp");
    assert_eq!(RESET_PASSWORD_ENDPOINT, "/api/auth/reset-password");
}

#[test]
fn tenant_endpoints_are_relative_api_paths() {
    assert_eq!(TENANT_SYNC_ENDPOINT, "/api/tenant/sync");
    assert_eq!(TENANTS_ENDPOINT, "/api/tenants");
}

#[test]
fn forgot_password_endpoint_encodes_email() {
    assert_eq!(
        forgot_password_endpoint("a+b@shop.test"),
        "/api/auth/forgot-password?email=a%2Bb%40shop.test"
    );
}

#[test]
fn dashboard_endpoint_formats_range_query() {
    assert_eq!(
        dashboard_endpoint("shop-1", &may_range()),
        "/api/tenant/shop-1/dashboard?from=2024-05-01&to=2024-05-31"
    );
}

#[test]
fn dashboard_endpoint_escapes_tenant_id() {
    assert_eq!(
        dashboard_endpoint("a/b", &may_range()),
        "/api/tenant/a%2Fb/dashboard?from=2024-05-01&to=2024-05-31"
    );
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_outside_the_browser() {
    let session: Session = serde_json::from_value(serde_json::json!({
        "email": "owner@shop.test",
        "role": "isTenant",
        "tenantId": "shop-1",
        "accessToken": "t",
        "tokenType": "Bearer"
    }))
    .unwrap();
    let result = poll_ready(fetch_tenants(&session));
    assert_eq!(result, Err(ApiError::Unavailable));
    let result = poll_ready(login("a@b.com", "pw"));
    assert_eq!(result, Err(ApiError::Unavailable));
}

/// Poll a future that completes without ever awaiting (SSR stubs).
#[cfg(not(feature = "hydrate"))]
fn poll_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("stub future should complete immediately"),
    }
}
