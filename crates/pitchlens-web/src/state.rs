//! Application state.

use pitchlens_core::PitchApi;
use std::sync::Arc;

/// Default listening port.
pub const DEFAULT_PORT: u16 = 5173;

/// Default request body limit for deck uploads, in megabytes.
pub const DEFAULT_MAX_UPLOAD_MB: usize = 25;

/// Web server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Body limit for `POST /upload`.
    pub max_upload_bytes: usize,
    /// Backend base URL, reported by `/health`.
    pub backend_url: String,
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    pub fn with_max_upload_mb(mut self, megabytes: usize) -> Self {
        self.max_upload_bytes = megabytes.saturating_mul(1024 * 1024);
        self
    }

    pub fn with_backend_url(mut self, url: impl Into<String>) -> Self {
        self.backend_url = url.into();
        self
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_MB * 1024 * 1024,
            backend_url: pitchlens_core::config::DEFAULT_API_URL.to_string(),
        }
    }
}

/// Application state shared across handlers.
///
/// Holds no per-pitch data: records live only for the request that
/// fetched them.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn PitchApi>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(api: Arc<dyn PitchApi>, config: ServerConfig) -> Self {
        Self {
            api,
            config: Arc::new(config),
        }
    }
}
