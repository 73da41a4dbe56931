//! Failure type shared by every REST helper.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::MessageBody;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS, proxy down).
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("request failed: {status}")]
    Rejected { status: u16, message: Option<String> },
    /// A 2xx response whose body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Called outside the browser (SSR).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a `Rejected` error from a status and raw response body, pulling
    /// the backend's `message` field when the body is JSON.
    #[must_use]
    pub fn rejected(status: u16, body: &str) -> Self {
        Self::Rejected { status, message: backend_message(body) }
    }

    /// Toast text for this failure.
    ///
    /// Rejections show the backend's message when it sent one, otherwise
    /// `rejected_fallback`; every other failure shows `failed_fallback`.
    #[must_use]
    pub fn describe(&self, rejected_fallback: &str, failed_fallback: &str) -> String {
        match self {
            Self::Rejected { message: Some(message), .. } => message.clone(),
            Self::Rejected { message: None, .. } => rejected_fallback.to_owned(),
            _ => failed_fallback.to_owned(),
        }
    }
}

/// Extract a non-empty `message` field from a JSON error body.
pub(crate) fn backend_message(body: &str) -> Option<String> {
    serde_json::from_str::<MessageBody>(body)
        .ok()
        .and_then(|b| b.message)
        .map(|m| m.trim().to_owned())
        .filter(|m| !m.is_empty())
}
