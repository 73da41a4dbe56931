//! Same-origin forwarding of `/api/*` to the tenant backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser app only ever calls relative `/api/...` paths. This handler
//! replays each request against `BACKEND_URL`, keeping method, path, query,
//! body and the auth header, and relays status + body back unchanged.
//!
//! ERROR HANDLING
//! ==============
//! Failures produced here are JSON `{ "message": ... }` bodies, the same
//! shape the backend uses, so client-side error parsing needs no special case.

use axum::body::{Body, Bytes};
use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use futures::StreamExt;

use crate::state::AppState;

/// Request headers replayed upstream. Everything else (cookies, hop-by-hop,
/// host) stays on this side.
const FORWARDED_REQUEST_HEADERS: [header::HeaderName; 3] =
    [header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT];

const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("request body exceeds {limit} bytes")]
    BodyTooLarge { limit: usize },
    #[error("could not read request body")]
    BadBody,
    #[error("backend did not respond in time")]
    Timeout,
    #[error("backend unavailable")]
    Upstream(#[source] reqwest::Error),
}

impl ProxyError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BodyTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::BadBody => StatusCode::BAD_REQUEST,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { Self::Timeout } else { Self::Upstream(err) }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(serde_json::json!({ "message": self.to_string() }))).into_response()
    }
}

/// `ANY /api/{*path}`: forward to the backend and relay its response.
pub async fn forward(State(state): State<AppState>, req: Request) -> Result<Response, ProxyError> {
    let (parts, body) = req.into_parts();
    let limit = state.config.max_body_bytes;
    if declared_length_exceeds(&parts.headers, limit) {
        return Err(ProxyError::BodyTooLarge { limit });
    }
    let body = read_body(body, limit).await?;

    let path_and_query = parts
        .uri
        .path_and_query()
        .map_or_else(|| parts.uri.path().to_owned(), |pq| pq.as_str().to_owned());
    let url = state.backend_url(&path_and_query);
    let request_id = uuid::Uuid::new_v4().to_string();

    let mut headers = forwardable_headers(&parts.headers);
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        headers.insert(REQUEST_ID_HEADER, value);
    }

    let upstream = state
        .http
        .request(parts.method.clone(), &url)
        .headers(headers)
        .body(body)
        .send()
        .await
        .map_err(|e| {
            tracing::warn!(%request_id, method = %parts.method, %url, error = %e, "backend request failed");
            ProxyError::from(e)
        })?;

    let status = upstream.status();
    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let bytes: Bytes = upstream.bytes().await.map_err(|e| {
        tracing::warn!(%request_id, %url, error = %e, "backend response body failed");
        ProxyError::from(e)
    })?;

    tracing::debug!(%request_id, method = %parts.method, path = %parts.uri.path(), status = status.as_u16(), "proxied");

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    if let Some(content_type) = content_type {
        response.headers_mut().insert(header::CONTENT_TYPE, content_type);
    }
    Ok(response)
}

/// Buffer the request body, failing as soon as it grows past `limit`.
/// Covers chunked uploads that carry no `Content-Length`.
pub(crate) async fn read_body(body: Body, limit: usize) -> Result<Bytes, ProxyError> {
    let mut stream = body.into_data_stream();
    let mut buf = Vec::new();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|_| ProxyError::BadBody)?;
        if buf.len() + chunk.len() > limit {
            return Err(ProxyError::BodyTooLarge { limit });
        }
        buf.extend_from_slice(&chunk);
    }
    Ok(Bytes::from(buf))
}

/// Copy the allow-listed request headers for the upstream call.
pub(crate) fn forwardable_headers(incoming: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in &FORWARDED_REQUEST_HEADERS {
        for value in incoming.get_all(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// True when `Content-Length` is present and larger than `limit`.
pub(crate) fn declared_length_exceeds(headers: &HeaderMap, limit: usize) -> bool {
    headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<usize>().ok())
        .is_some_and(|len| len > limit)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
