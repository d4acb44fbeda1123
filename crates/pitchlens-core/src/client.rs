//! HTTP client for the PitchLens analysis backend.
//!
//! Each operation maps to exactly one backend call. There is no retry,
//! caching or backoff; the timeout is whatever [`ApiConfig`] says.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::error::{PitchError, PitchResult};
use crate::pitch::model::PitchRecord;

/// Multipart field name the backend reads the deck from.
pub const UPLOAD_FIELD: &str = "file";

/// The backend operations a front end depends on.
#[async_trait]
pub trait PitchApi: Send + Sync {
    /// `POST /upload` with the deck as multipart form data.
    async fn upload(&self, file: UploadFile) -> PitchResult<PitchRecord>;

    /// `GET /analysis/{pitch_id}`.
    async fn get_analysis(&self, pitch_id: &str) -> PitchResult<PitchRecord>;

    /// `GET /compare?pitch_ids=<comma-separated>`.
    async fn compare(&self, pitch_ids: &str) -> PitchResult<Vec<PitchRecord>>;

    /// `GET /health`.
    async fn health(&self) -> PitchResult<BackendHealth>;
}

/// A deck ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Read a deck from disk. The content type is guessed from the extension.
    pub async fn from_path(path: &Path) -> PitchResult<Self> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload.pdf".to_string());
        let content_type = content_type_for(&file_name);
        Ok(Self::new(file_name, content_type, bytes))
    }
}

/// Content type for a file name, by extension.
pub fn content_type_for(file_name: &str) -> &'static str {
    let is_pdf = Path::new(file_name)
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);
    if is_pdf {
        "application/pdf"
    } else {
        "application/octet-stream"
    }
}

/// Body of the backend health probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendHealth {
    pub status: String,
}

/// Backend client over `reqwest`.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    /// Create a client for the given config.
    pub fn new(config: &ApiConfig) -> PitchResult<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn analysis_url(&self, pitch_id: &str) -> String {
        format!("{}/analysis/{}", self.base_url, urlencoding::encode(pitch_id))
    }

    fn compare_url(&self, pitch_ids: &str) -> String {
        format!("{}/compare?pitch_ids={}", self.base_url, encode_id_list(pitch_ids))
    }
}

#[async_trait]
impl PitchApi for ApiClient {
    async fn upload(&self, file: UploadFile) -> PitchResult<PitchRecord> {
        let url = format!("{}/upload", self.base_url);
        debug!(url = %url, file_name = %file.file_name, bytes = file.bytes.len(), "Uploading pitch deck");

        let part = reqwest::multipart::Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(&file.content_type)?;
        let form = reqwest::multipart::Form::new().part(UPLOAD_FIELD, part);

        let response = self.client.post(&url).multipart(form).send().await?;
        let record: PitchRecord = read_json(response).await?;

        debug!(pitch_id = %record.pitch_id, "Upload accepted");
        Ok(record)
    }

    async fn get_analysis(&self, pitch_id: &str) -> PitchResult<PitchRecord> {
        let url = self.analysis_url(pitch_id);
        debug!(url = %url, pitch_id = %pitch_id, "Fetching analysis");

        let response = self.client.get(&url).send().await?;
        read_json(response).await
    }

    async fn compare(&self, pitch_ids: &str) -> PitchResult<Vec<PitchRecord>> {
        let url = self.compare_url(pitch_ids);
        debug!(url = %url, "Fetching comparison");

        let response = self.client.get(&url).send().await?;
        let records: Vec<PitchRecord> = read_json(response).await?;

        debug!(count = records.len(), "Comparison received");
        Ok(records)
    }

    async fn health(&self) -> PitchResult<BackendHealth> {
        let url = format!("{}/health", self.base_url);
        let response = self.client.get(&url).send().await?;
        read_json(response).await
    }
}

/// Percent-encode each identifier but keep the separating commas literal.
pub fn encode_id_list(pitch_ids: &str) -> String {
    pitch_ids
        .split(',')
        .map(|id| urlencoding::encode(id).into_owned())
        .collect::<Vec<_>>()
        .join(",")
}

/// Decode a successful body, or classify a failed one.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> PitchResult<T> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let err = error_from_body(status.as_u16(), &body);
        warn!(
            status = status.as_u16(),
            detail = err.detail().unwrap_or("-"),
            "Backend request failed"
        );
        return Err(err);
    }

    serde_json::from_str(&body).map_err(|e| {
        debug!(error = %e, body_len = body.len(), "Backend returned malformed JSON");
        PitchError::Decode(e)
    })
}

/// Turn an error response into a [`PitchError`].
///
/// Only a JSON object whose `detail` is a string counts as a backend
/// detail; anything else is an unclassified failure.
pub fn error_from_body(status: u16, body: &str) -> PitchError {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(str::to_string));

    match detail {
        Some(detail) => PitchError::Backend { status, detail },
        None => PitchError::UnexpectedStatus {
            status,
            body: body.to_string(),
        },
    }
}
