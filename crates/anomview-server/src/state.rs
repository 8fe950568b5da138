//! Shared application state for the Axum server.

use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub service_url: Arc<str>,
    pub client: reqwest::Client,
}

impl AppState {
    pub fn new(service_url: &str) -> Self {
        Self {
            service_url: Arc::from(service_url.trim_end_matches('/')),
            client: reqwest::Client::new(),
        }
    }
}

/// Configuration for the dev host.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Base URL of the analysis service requests are forwarded to.
    pub service_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            service_url: "http://localhost:5002".to_string(),
        }
    }
}
