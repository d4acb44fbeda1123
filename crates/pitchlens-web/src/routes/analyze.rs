//! Detail page handler.

use askama::Template;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use pitchlens_core::error::ANALYSIS_FAILED;
use pitchlens_core::report::Report;
use tracing::warn;

use super::{error_status, render};
use crate::state::AppState;

#[derive(Template)]
#[template(path = "analyze.html")]
struct AnalyzeTemplate {
    report: Option<Report>,
    error: Option<String>,
}

/// GET /analyze/{pitch_id} - Fetch one record and render its report.
pub async fn show(State(state): State<AppState>, Path(pitch_id): Path<String>) -> Response {
    match state.api.get_analysis(&pitch_id).await {
        Ok(record) => {
            let template = AnalyzeTemplate {
                report: Some(Report::from_record(&record)),
                error: None,
            };
            render(StatusCode::OK, &template)
        }
        Err(e) => {
            warn!(pitch_id = %pitch_id, error = %e, "Failed to load analysis");
            let template = AnalyzeTemplate {
                report: None,
                error: Some(e.user_message(ANALYSIS_FAILED)),
            };
            render(error_status(&e), &template)
        }
    }
}
