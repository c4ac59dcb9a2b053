//! Shared host state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds one pooled `reqwest` client for forwarding `/api` calls and the
//! parsed [`Config`]. Both are cheap to clone.

use std::sync::Arc;

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub config: Arc<Config>,
}

impl AppState {
    /// # Errors
    ///
    /// Fails when the TLS backend cannot be initialised.
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(config.backend_timeout).build()?;
        Ok(Self { http, config: Arc::new(config) })
    }

    /// Backend URL for a proxied `/api/...` path and query.
    #[must_use]
    pub fn backend_url(&self, path_and_query: &str) -> String {
        format!("{}{path_and_query}", self.config.backend_url)
    }
}
