//! Upload page handlers.
//!
//! `GET /` shows the upload form; `POST /upload` forwards the deck to the
//! backend and redirects to the detail page of the created record.

use askama::Template;
use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use pitchlens_core::client::{content_type_for, UPLOAD_FIELD};
use pitchlens_core::error::UPLOAD_FAILED;
use pitchlens_core::{form, UploadFile};
use tracing::{debug, warn};

use super::{analyze_path, error_status, render};
use crate::state::AppState;

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    error: Option<String>,
}

/// GET / - Render the upload form.
pub async fn index() -> Response {
    render(StatusCode::OK, &HomeTemplate { error: None })
}

/// POST /upload - Forward the deck, then redirect to its report.
pub async fn upload(State(state): State<AppState>, multipart: Multipart) -> Response {
    let selected = match read_upload(multipart).await {
        Ok(selected) => selected,
        Err(e) => {
            warn!(error = %e, "Rejected malformed upload");
            let template = HomeTemplate {
                error: Some(UPLOAD_FAILED.to_string()),
            };
            return render(e.status(), &template);
        }
    };

    let file = match form::require_file(selected) {
        Ok(file) => file,
        Err(e) => {
            let template = HomeTemplate {
                error: Some(e.user_message(UPLOAD_FAILED)),
            };
            return render(error_status(&e), &template);
        }
    };

    match state.api.upload(file).await {
        Ok(created) => {
            debug!(pitch_id = %created.pitch_id, "Upload complete");
            Redirect::to(&analyze_path(&created.pitch_id)).into_response()
        }
        Err(e) => {
            warn!(error = %e, "Upload failed");
            let template = HomeTemplate {
                error: Some(e.user_message(UPLOAD_FAILED)),
            };
            render(error_status(&e), &template)
        }
    }
}

/// Pull the `file` part out of the form.
///
/// Browsers send an empty part with an empty file name when nothing was
/// picked; that counts as no file.
async fn read_upload(mut multipart: Multipart) -> Result<Option<UploadFile>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        if file_name.is_empty() {
            return Ok(None);
        }

        let content_type = field
            .content_type()
            .map(str::to_string)
            .unwrap_or_else(|| content_type_for(&file_name).to_string());
        let bytes = field.bytes().await?;

        return Ok(Some(UploadFile::new(file_name, content_type, bytes.to_vec())));
    }

    Ok(None)
}
