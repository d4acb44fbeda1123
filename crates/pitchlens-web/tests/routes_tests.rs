//! Page tests for the web front end against a fake backend.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use pitchlens_core::pitch::model::{Analysis, EnrichedData, Sections, Swot};
use pitchlens_core::{BackendHealth, PitchApi, PitchError, PitchRecord, PitchResult, UploadFile};
use pitchlens_web::{create_router, AppState, ServerConfig};
use tower::util::ServiceExt;

const BOUNDARY: &str = "pitchlens-test-boundary";

/// Backend double that records every call it receives.
#[derive(Default)]
struct FakeApi {
    calls: Mutex<Vec<String>>,
    uploads: Mutex<Vec<UploadFile>>,
    down: bool,
}

impl FakeApi {
    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

fn record(pitch_id: &str, analysis: Option<Analysis>) -> PitchRecord {
    PitchRecord {
        pitch_id: pitch_id.to_string(),
        filename: Some(format!("{}.pdf", pitch_id)),
        created_at: "2025-03-14T09:26:53.589793".to_string(),
        sections: Sections {
            team: "T".repeat(200),
            market: "Mid-market logistics".to_string(),
            product_traction: "3 paying pilots".to_string(),
        },
        enriched_data: EnrichedData {
            company_name: format!("Company {}", pitch_id).into(),
            funding_raised: "$1,500,000".into(),
            team_size: 11i64.into(),
            location: "Berlin, Germany".into(),
            industry: "AI".into(),
        },
        analysis,
    }
}

fn full_analysis() -> Analysis {
    Analysis {
        summary: Some("Robots for warehouses.".to_string()),
        swot: Some(Swot {
            strengths: Some("Deep tech team".to_string()),
            weaknesses: Some("Hardware margins".to_string()),
            opportunities: Some("Labour shortages".to_string()),
            threats: Some("Incumbent vendors".to_string()),
        }),
        risks: Some(vec!["Long sales cycles".to_string(), "Capex heavy".to_string()]),
    }
}

#[async_trait]
impl PitchApi for FakeApi {
    async fn upload(&self, file: UploadFile) -> PitchResult<PitchRecord> {
        self.calls.lock().unwrap().push(format!("upload {}", file.file_name));
        let rejected = !file.file_name.ends_with(".pdf");
        self.uploads.lock().unwrap().push(file);
        if rejected {
            return Err(PitchError::Backend {
                status: 400,
                detail: "Only PDF files are allowed".to_string(),
            });
        }
        Ok(PitchRecord {
            pitch_id: "abc123".to_string(),
            filename: None,
            created_at: String::new(),
            sections: Sections::default(),
            enriched_data: EnrichedData::default(),
            analysis: None,
        })
    }

    async fn get_analysis(&self, pitch_id: &str) -> PitchResult<PitchRecord> {
        self.calls.lock().unwrap().push(format!("analysis {}", pitch_id));
        match pitch_id {
            "missing" => Err(PitchError::Backend {
                status: 404,
                detail: "Pitch not found".to_string(),
            }),
            "broken" => Err(PitchError::UnexpectedStatus {
                status: 500,
                body: "Internal Server Error".to_string(),
            }),
            "no-summary" => Ok(record(
                pitch_id,
                Some(Analysis {
                    summary: None,
                    ..full_analysis()
                }),
            )),
            "no-risks" => Ok(record(
                pitch_id,
                Some(Analysis {
                    risks: Some(Vec::new()),
                    ..full_analysis()
                }),
            )),
            "bare" => Ok(record(pitch_id, None)),
            id => Ok(record(id, Some(full_analysis()))),
        }
    }

    async fn compare(&self, pitch_ids: &str) -> PitchResult<Vec<PitchRecord>> {
        self.calls.lock().unwrap().push(format!("compare {}", pitch_ids));
        if pitch_ids == "ghost" {
            return Err(PitchError::Backend {
                status: 404,
                detail: "No pitches found for comparison".to_string(),
            });
        }
        Ok(pitch_ids.split(',').map(|id| record(id, None)).collect())
    }

    async fn health(&self) -> PitchResult<BackendHealth> {
        if self.down {
            return Err(PitchError::UnexpectedStatus {
                status: 503,
                body: String::new(),
            });
        }
        Ok(BackendHealth {
            status: "healthy".to_string(),
        })
    }
}

fn app(api: Arc<FakeApi>) -> Router {
    create_router(AppState::new(api, ServerConfig::default()))
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn multipart_request(file_name: &str, content: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\n",
            file_name
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/pdf\r\n\r\n");
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());

    Request::builder()
        .method("POST")
        .uri("/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

// =============================================================================
// Layout and upload page
// =============================================================================

#[tokio::test]
async fn test_home_renders_upload_form_and_chrome() {
    let (status, html) = get(app(Arc::default()), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Upload Pitch Deck"));
    assert!(html.contains(r#"accept=".pdf""#));
    assert!(html.contains(r#"href="/compare""#));
    assert!(html.contains("PitchLens. All rights reserved."));
}

#[tokio::test]
async fn test_upload_button_disables_while_in_flight() {
    let (_, html) = get(app(Arc::default()), "/").await;

    assert!(html.contains("onsubmit="));
    assert!(html.contains("b.disabled = true"));
    assert!(html.contains("b.textContent = 'Uploading...'"));
    assert!(html.contains(r#"<button type="submit">Upload</button>"#));
}

#[tokio::test]
async fn test_upload_without_file_sends_nothing() {
    let api = Arc::new(FakeApi::default());

    let (status, html) = send(app(api.clone()), multipart_request("", b"")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(html.contains("Please select a PDF file"));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_upload_success_redirects_to_report() {
    let api = Arc::new(FakeApi::default());

    let response = app(api.clone())
        .oneshot(multipart_request("acme_robotics.pdf", b"%PDF-1.4 slides"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/analyze/abc123"
    );
    assert_eq!(api.calls(), vec!["upload acme_robotics.pdf".to_string()]);

    let uploads = api.uploads.lock().unwrap();
    assert_eq!(uploads[0].bytes, b"%PDF-1.4 slides".to_vec());
    assert_eq!(uploads[0].content_type, "application/pdf");
}

#[tokio::test]
async fn test_upload_rejection_shows_detail() {
    let api = Arc::new(FakeApi::default());

    let (status, html) = send(app(api), multipart_request("notes.txt", b"hello")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(html.contains("Only PDF files are allowed"));
    assert!(html.contains("Upload Pitch Deck"));
}

// =============================================================================
// Analysis page
// =============================================================================

#[tokio::test]
async fn test_analysis_renders_full_report() {
    let api = Arc::new(FakeApi::default());

    let (status, html) = get(app(api.clone()), "/analyze/p1").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Company p1"));
    assert!(html.contains("Robots for warehouses."));
    assert!(html.contains("Deep tech team"));
    assert!(html.contains("Incumbent vendors"));
    assert!(html.contains("Capex heavy"));
    assert!(html.contains("2025-03-14 09:26:53 UTC"));
    assert!(html.contains(&"T".repeat(200)));
    assert_eq!(api.calls(), vec!["analysis p1".to_string()]);
}

#[tokio::test]
async fn test_analysis_missing_summary_fallback() {
    let (_, html) = get(app(Arc::default()), "/analyze/no-summary").await;

    assert!(html.contains("No summary available"));
    assert!(!html.contains("No risks identified"));
}

#[tokio::test]
async fn test_analysis_empty_risks_fallback() {
    let (_, html) = get(app(Arc::default()), "/analyze/no-risks").await;

    assert!(html.contains("No risks identified"));
    assert!(html.contains("Robots for warehouses."));
}

#[tokio::test]
async fn test_analysis_without_analysis_block() {
    let (status, html) = get(app(Arc::default()), "/analyze/bare").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("No summary available"));
    assert!(html.contains("No SWOT analysis available"));
    assert!(html.contains("No risks identified"));
}

#[tokio::test]
async fn test_analysis_not_found_shows_detail() {
    let (status, html) = get(app(Arc::default()), "/analyze/missing").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains(r#"<div class="error page">Pitch not found</div>"#));
}

#[tokio::test]
async fn test_analysis_unclassified_failure_fallback() {
    let (status, html) = get(app(Arc::default()), "/analyze/broken").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(html.contains("Failed to load analysis"));
    assert!(!html.contains("Internal Server Error"));
}

// =============================================================================
// Compare page
// =============================================================================

#[tokio::test]
async fn test_compare_form_without_query() {
    let api = Arc::new(FakeApi::default());

    let (status, html) = get(app(api.clone()), "/compare").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Enter pitch IDs (comma-separated)"));
    assert!(!html.contains("<table>"));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_compare_empty_input_is_blocked() {
    let api = Arc::new(FakeApi::default());

    let (status, html) = get(app(api.clone()), "/compare?pitch_ids=").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(html.contains("Please enter pitch IDs"));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_compare_renders_one_row_per_record() {
    let api = Arc::new(FakeApi::default());

    let (status, html) = get(app(api.clone()), "/compare?pitch_ids=1%2C2%2C3").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(api.calls(), vec!["compare 1,2,3".to_string()]);
    assert_eq!(html.matches("<tr data-pitch-id=").count(), 3);
    assert!(html.contains(r#"value="1,2,3""#));
}

#[tokio::test]
async fn test_compare_truncates_team_column() {
    let (_, html) = get(app(Arc::default()), "/compare?pitch_ids=solo").await;

    let expected = format!("<td>{}...</td>", "T".repeat(50));
    assert!(html.contains(&expected));
    assert!(!html.contains(&"T".repeat(51)));
    assert!(html.contains("<td>Mid-market logistics...</td>"));
}

#[tokio::test]
async fn test_compare_failure_shows_detail_and_no_table() {
    let (status, html) = get(app(Arc::default()), "/compare?pitch_ids=ghost").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("No pitches found for comparison"));
    assert!(!html.contains("<table>"));
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_reports_backend() {
    let (status, body) = get(app(Arc::default()), "/health").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["module"], "pitchlens-web");
    assert_eq!(json["backend"]["reachable"], true);
    assert_eq!(json["backend"]["status"], "healthy");
}

#[tokio::test]
async fn test_health_with_backend_down() {
    let api = Arc::new(FakeApi {
        down: true,
        ..FakeApi::default()
    });

    let (status, body) = get(app(api), "/health").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["backend"]["reachable"], false);
}
