//! REST API helpers for the tenant backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against the host's
//! same-origin `/api` proxy.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>`; pages turn failures into
//! toasts with `ApiError::describe` and never panic on a bad response.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{DashboardSummary, RegisterTenantRequest, ResetPasswordRequest, Tenant};
use crate::state::session::Session;
use crate::util::format::DateRange;

#[cfg(any(test, feature = "hydrate"))]
const LOGIN_ENDPOINT: &str = "/api/auth/login";
#[cfg(any(test, feature = "hydrate"))]
const REGISTER_TENANT_ENDPOINT: &str = "/api/auth/register/tenant";
#[cfg(any(test, feature = "hydrate"))]
const VERIFY_OTP_ENDPOINT: &str = "/api/auth/verify-otp";
#[cfg(any(test, feature = "hydrate"))]
const RESET_PASSWORD_ENDPOINT: &str = "/api/auth/reset-password";
#[cfg(any(test, feature = "hydrate"))]
const TENANT_SYNC_ENDPOINT: &str = "/api/tenant/sync";
#[cfg(any(test, feature = "hydrate"))]
const TENANTS_ENDPOINT: &str = "/api/tenants";

#[cfg(any(test, feature = "hydrate"))]
fn encode_component(raw: &str) -> String {
    url::form_urlencoded::byte_serialize(raw.as_bytes()).collect()
}

#[cfg(any(test, feature = "hydrate"))]
fn forgot_password_endpoint(email: &str) -> String {
    format!("/api/auth/forgot-password?email={}", encode_component(email))
}

#[cfg(any(test, feature = "hydrate"))]
fn dashboard_endpoint(tenant_id: &str, range: &DateRange) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("from", &range.from_param())
        .append_pair("to", &range.to_param())
        .finish();
    format!("/api/tenant/{}/dashboard?{query}", encode_component(tenant_id))
}

#[cfg(feature = "hydrate")]
async fn send(
    endpoint: &str,
    request: Result<gloo_net::http::Request, gloo_net::Error>,
) -> Result<gloo_net::http::Response, ApiError> {
    let request = request.map_err(|e| ApiError::Network(e.to_string()))?;
    let resp = request.send().await.map_err(|e| {
        leptos::logging::warn!("api {endpoint}: network failure: {e}");
        ApiError::Network(e.to_string())
    })?;
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        leptos::logging::warn!("api {endpoint}: status {status}");
        return Err(ApiError::rejected(status, &body));
    }
    Ok(resp)
}

#[cfg(feature = "hydrate")]
async fn decode<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Authenticate via `POST /api/auth/login` and return the session to persist.
///
/// # Errors
///
/// Returns an error if the request fails, the credentials are rejected, or
/// the response is not a session.
pub async fn login(email: &str, password: &str) -> Result<Session, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = super::types::LoginRequest { email: email.to_owned(), password: password.to_owned() };
        let request = gloo_net::http::Request::post(LOGIN_ENDPOINT).json(&payload);
        let resp = send(LOGIN_ENDPOINT, request).await?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// Create a tenant account via `POST /api/auth/register/tenant`. The backend
/// emails an OTP that must then go to [`verify_otp`].
///
/// # Errors
///
/// Returns an error if the request fails or registration is rejected.
pub async fn register_tenant(request: &RegisterTenantRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let built = gloo_net::http::Request::post(REGISTER_TENANT_ENDPOINT).json(request);
        send(REGISTER_TENANT_ENDPOINT, built).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Confirm registration via `POST /api/auth/verify-otp`.
///
/// # Errors
///
/// Returns an error if the request fails or the OTP is rejected.
pub async fn verify_otp(email: &str, otp: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = super::types::VerifyOtpRequest { email: email.to_owned(), otp: otp.to_owned() };
        let built = gloo_net::http::Request::post(VERIFY_OTP_ENDPOINT).json(&payload);
        send(VERIFY_OTP_ENDPOINT, built).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, otp);
        Err(ApiError::Unavailable)
    }
}

/// Ask the backend to email a password-reset OTP
/// (`POST /api/auth/forgot-password?email=...`).
///
/// # Errors
///
/// Returns an error if the request fails or the email is unknown.
pub async fn request_password_reset(email: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let endpoint = forgot_password_endpoint(email);
        let built = gloo_net::http::Request::post(&endpoint).build();
        send(&endpoint, built).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err(ApiError::Unavailable)
    }
}

/// Set a new password with the emailed OTP via `POST /api/auth/reset-password`.
///
/// # Errors
///
/// Returns an error if the request fails or the OTP is rejected.
pub async fn reset_password(request: &ResetPasswordRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let built = gloo_net::http::Request::post(RESET_PASSWORD_ENDPOINT).json(request);
        send(RESET_PASSWORD_ENDPOINT, built).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Trigger a Shopify data sync for the signed-in tenant (`POST /api/tenant/sync`).
///
/// # Errors
///
/// Returns an error if the request fails or the sync is rejected.
pub async fn sync_tenant(session: &Session) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = super::types::SyncRequest { email: session.email.clone() };
        let built = gloo_net::http::Request::post(TENANT_SYNC_ENDPOINT)
            .header("Authorization", &session.authorization())
            .json(&payload);
        send(TENANT_SYNC_ENDPOINT, built).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
        Err(ApiError::Unavailable)
    }
}

/// Fetch aggregated metrics via `GET /api/tenant/{tenant_id}/dashboard?from=&to=`.
///
/// # Errors
///
/// Returns an error if the request fails, is rejected, or the body does not
/// decode as a dashboard summary.
pub async fn fetch_dashboard(
    session: &Session,
    tenant_id: &str,
    range: &DateRange,
) -> Result<DashboardSummary, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let endpoint = dashboard_endpoint(tenant_id, range);
        let built = gloo_net::http::Request::get(&endpoint)
            .header("Authorization", &session.authorization())
            .header("Content-Type", "application/json")
            .build();
        let resp = send(&endpoint, built).await?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, tenant_id, range);
        Err(ApiError::Unavailable)
    }
}

/// List every registered store via `GET /api/tenants` (admin only).
///
/// # Errors
///
/// Returns an error if the request fails, is rejected, or the body is not a
/// tenant list.
pub async fn fetch_tenants(session: &Session) -> Result<Vec<Tenant>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let built = gloo_net::http::Request::get(TENANTS_ENDPOINT)
            .header("Authorization", &session.authorization())
            .header("Content-Type", "application/json")
            .build();
        let resp = send(TENANTS_ENDPOINT, built).await?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
        Err(ApiError::Unavailable)
    }
}
