//! Route handlers.

pub mod analyze;
pub mod compare;
pub mod health;
pub mod home;

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use pitchlens_core::PitchError;

/// Render a template with the given status.
pub(crate) fn render<T: Template>(status: StatusCode, template: &T) -> Response {
    match template.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(format!("Template error: {}", e)),
        )
            .into_response(),
    }
}

/// Status for a page that shows `err` inline.
///
/// Client errors from the backend are passed through; everything else
/// from upstream is a bad gateway.
pub(crate) fn error_status(err: &PitchError) -> StatusCode {
    if let PitchError::Validation(_) = err {
        return StatusCode::BAD_REQUEST;
    }
    err.status()
        .and_then(|s| StatusCode::from_u16(s).ok())
        .filter(|s| s.is_client_error())
        .unwrap_or(StatusCode::BAD_GATEWAY)
}

/// Client route of the detail page for a pitch.
pub fn analyze_path(pitch_id: &str) -> String {
    format!("/analyze/{}", urlencoding::encode(pitch_id))
}
