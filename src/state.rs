//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the upstream HTTP client (one connection pool for every proxied
//! request) and the parsed host configuration.

use std::sync::Arc;

use crate::config::ConsoleConfig;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub config: Arc<ConsoleConfig>,
}

impl AppState {
    /// Build state with an upstream client honoring the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(config: ConsoleConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.timeouts.request())
            .connect_timeout(config.timeouts.connect())
            .build()?;
        Ok(Self { http, config: Arc::new(config) })
    }

    /// Absolute backend URL for a path that already starts with `/api/`.
    #[must_use]
    pub fn backend_url(&self, path_and_query: &str) -> String {
        format!("{}{path_and_query}", self.config.backend_url)
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
