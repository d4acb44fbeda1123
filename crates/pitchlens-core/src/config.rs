//! Backend connection settings.
//!
//! The base URL comes from `PITCHLENS_API_URL` and falls back to a local
//! backend. An optional request timeout comes from
//! `PITCHLENS_API_TIMEOUT_SECS`; when unset the HTTP client's defaults apply.

use std::time::Duration;
use tracing::debug;

use crate::error::{PitchError, PitchResult};

/// Default backend URL.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Environment variable holding the backend URL.
pub const API_URL_ENV: &str = "PITCHLENS_API_URL";

/// Environment variable holding the request timeout in seconds.
pub const API_TIMEOUT_ENV: &str = "PITCHLENS_API_TIMEOUT_SECS";

/// Where the backend lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl ApiConfig {
    /// Create a config for the given base URL, without a timeout.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            timeout: None,
        }
    }

    /// Build the config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> PitchResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(API_URL_ENV)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let timeout = match lookup(API_TIMEOUT_ENV).filter(|v| !v.trim().is_empty()) {
            Some(raw) => Some(parse_timeout_secs(&raw)?),
            None => None,
        };

        let config = Self::new(&base_url).with_timeout(timeout);
        config.validate()?;
        debug!(base_url = %config.base_url, timeout = ?config.timeout, "API config loaded");
        Ok(config)
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Check that the base URL is an absolute http(s) URL.
    pub fn validate(&self) -> PitchResult<()> {
        let url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| PitchError::config(format!("invalid API URL '{}': {}", self.base_url, e)))?;

        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(PitchError::config(format!(
                "unsupported API URL scheme '{}' in '{}'",
                other, self.base_url
            ))),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

/// Parse a whole number of seconds.
pub fn parse_timeout_secs(raw: &str) -> PitchResult<Duration> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| PitchError::config(format!("invalid timeout '{}': expected whole seconds", raw)))
}
