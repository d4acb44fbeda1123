//! Compare page handler.
//!
//! The form submits with GET, so `/compare` alone shows the empty form and
//! `/compare?pitch_ids=...` runs the comparison.

use askama::Template;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Response,
};
use pitchlens_core::error::COMPARE_FAILED;
use pitchlens_core::form;
use pitchlens_core::report::{compare_rows, CompareRow};
use serde::Deserialize;
use tracing::{debug, warn};

use super::{error_status, render};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CompareQuery {
    pub pitch_ids: Option<String>,
}

#[derive(Template)]
#[template(path = "compare.html")]
struct CompareTemplate {
    pitch_ids: String,
    rows: Vec<CompareRow>,
    error: Option<String>,
}

/// GET /compare - Render the form and, when submitted, the comparison table.
pub async fn show(State(state): State<AppState>, Query(query): Query<CompareQuery>) -> Response {
    let Some(input) = query.pitch_ids else {
        let template = CompareTemplate {
            pitch_ids: String::new(),
            rows: Vec::new(),
            error: None,
        };
        return render(StatusCode::OK, &template);
    };

    let result = match form::require_pitch_ids(&input) {
        Ok(ids) => state.api.compare(ids).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(records) => {
            debug!(count = records.len(), "Rendering comparison");
            let template = CompareTemplate {
                pitch_ids: input,
                rows: compare_rows(&records),
                error: None,
            };
            render(StatusCode::OK, &template)
        }
        Err(e) => {
            warn!(pitch_ids = %input, error = %e, "Comparison failed");
            let template = CompareTemplate {
                error: Some(e.user_message(COMPARE_FAILED)),
                pitch_ids: input,
                rows: Vec::new(),
            };
            render(error_status(&e), &template)
        }
    }
}
