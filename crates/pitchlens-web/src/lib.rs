//! PitchLens Web Front End
//!
//! Axum server rendering the upload, analysis and compare pages. Every page
//! is rendered from a single backend call made while handling the request.

pub mod routes;
pub mod state;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use pitchlens_core::PitchApi;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub use state::{AppState, ServerConfig};

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let upload_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/", get(routes::home::index))
        .route("/upload", post(routes::home::upload).layer(upload_limit))
        .route("/analyze/{pitch_id}", get(routes::analyze::show))
        .route("/compare", get(routes::compare::show))
        .route("/health", get(routes::health::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(config: ServerConfig, api: Arc<dyn PitchApi>) -> anyhow::Result<()> {
    let addr = config.bind_addr();
    let state = AppState::new(api, config);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Web front end listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
