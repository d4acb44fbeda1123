//! Health check endpoint.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
    pub backend: BackendStatus,
}

/// Reachability of the analysis backend.
#[derive(Debug, Serialize)]
pub struct BackendStatus {
    pub url: String,
    pub reachable: bool,
    /// Status reported by the backend, or the error when unreachable.
    pub status: String,
}

/// GET /health
///
/// The front end itself is always "ok"; backend trouble is reported in
/// the `backend` block rather than failing the probe.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let backend = match state.api.health().await {
        Ok(health) => BackendStatus {
            url: state.config.backend_url.clone(),
            reachable: true,
            status: health.status,
        },
        Err(e) => BackendStatus {
            url: state.config.backend_url.clone(),
            reachable: false,
            status: e.to_string(),
        },
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        module: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        backend,
    })
}
