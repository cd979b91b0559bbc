//! HTTP routes.

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use sheetkeeper_domain::SHEET_FILE_NAME;

use super::render::sheet_page;
use super::submission::SheetSubmission;
use crate::app::App;
use crate::infrastructure::correlation::CorrelationId;
use crate::use_cases::{CharacterSheetError, UploadOutcome};

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(home).post(home))
        .route("/download", post(download))
        .route("/upload", post(upload))
        .route("/api/health", get(health))
}

async fn health() -> &'static str {
    "OK"
}

async fn home(State(app): State<Arc<App>>) -> Html<String> {
    sheet_page(&app.use_cases.character_sheet.blank())
}

async fn download(
    State(app): State<Arc<App>>,
    submission: SheetSubmission,
) -> Result<Response, ApiError> {
    let correlation_id = CorrelationId::new();
    let sheets = &app.use_cases.character_sheet;

    let record = sheets.extract(&submission.form);
    let contents = sheets.export(&record).await.map_err(|e| {
        tracing::error!(
            correlation_id = %correlation_id.short(),
            error = %e,
            "Failed to export sheet"
        );
        ApiError::from(e)
    })?;

    tracing::info!(
        correlation_id = %correlation_id.short(),
        bytes = contents.len(),
        "Sheet exported"
    );

    let disposition = format!("attachment; filename=\"{SHEET_FILE_NAME}\"");
    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        contents,
    )
        .into_response())
}

async fn upload(State(app): State<Arc<App>>, submission: SheetSubmission) -> Html<String> {
    let correlation_id = CorrelationId::new();

    let outcome = app
        .use_cases
        .character_sheet
        .import_or_extract(submission.upload.as_deref(), &submission.form);

    match &outcome {
        UploadOutcome::Imported(_) => {
            tracing::info!(correlation_id = %correlation_id.short(), "Sheet imported");
        }
        UploadOutcome::FellBack { reason, .. } => {
            tracing::debug!(
                correlation_id = %correlation_id.short(),
                reason = %reason,
                "Upload not importable, showing submitted form instead"
            );
        }
    }

    sheet_page(outcome.record())
}

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => {
                (axum::http::StatusCode::BAD_REQUEST, msg).into_response()
            }
            ApiError::Internal(_) => (
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                "Internal error",
            )
                .into_response(),
        }
    }
}

impl From<CharacterSheetError> for ApiError {
    fn from(e: CharacterSheetError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request as HttpRequest, http::StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::infrastructure::config::EngineConfig;
    use crate::infrastructure::export::FileSheetExporter;
    use crate::infrastructure::ports::{ExportError, MockSheetExportPort};

    const BOUNDARY: &str = "sheet-boundary";

    fn router_with(exporter: Arc<dyn crate::infrastructure::ports::SheetExportPort>) -> Router {
        let app = Arc::new(App::new(EngineConfig::default(), exporter));
        crate::api::router(app)
    }

    fn accepting_exporter() -> Arc<MockSheetExportPort> {
        let mut exporter = MockSheetExportPort::new();
        exporter.expect_write_export().returning(|_| Ok(()));
        Arc::new(exporter)
    }

    fn form_post(uri: &str, body: &str) -> HttpRequest<Body> {
        HttpRequest::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn upload_post(file: &str, fields: &[(&str, &str)]) -> HttpRequest<Body> {
        let mut body = String::new();
        for (name, value) in fields {
            body.push_str(&format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            ));
        }
        body.push_str(&format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"upload\"; filename=\"player_sheet.json\"\r\nContent-Type: application/json\r\n\r\n{file}\r\n--{BOUNDARY}--\r\n"
        ));
        HttpRequest::builder()
            .method("POST")
            .uri("/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(body.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let request = HttpRequest::builder()
            .uri("/api/health")
            .body(Body::empty())
            .unwrap();
        let response = router_with(accepting_exporter())
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "OK");
    }

    #[tokio::test]
    async fn test_home_renders_blank_sheet_for_get_and_post() {
        for method in ["GET", "POST"] {
            let request = HttpRequest::builder()
                .method(method)
                .uri("/")
                .body(Body::empty())
                .unwrap();
            let response = router_with(accepting_exporter())
                .oneshot(request)
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let page = body_text(response).await;
            assert!(page.contains(r#"name="max-skill" value="""#));
        }
    }

    #[tokio::test]
    async fn test_download_exports_submitted_fields() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        let exporter = Arc::new(FileSheetExporter::new(temp_dir.path()));

        let response = router_with(exporter)
            .oneshot(form_post("/download", "max-skill=12&page-num=3"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"player_sheet.json\""
        );
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");

        let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
        let map = body.as_object().unwrap();
        assert_eq!(map.len(), 18);
        assert_eq!(map["max_skill"], "12");
        assert_eq!(map["checkpoint"], "3");
        for (key, value) in map {
            if key != "max_skill" && key != "checkpoint" {
                assert!(value.is_null(), "{key} should be null");
            }
        }

        let on_disk: Value = serde_json::from_slice(
            &std::fs::read(temp_dir.path().join("player_sheet.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(on_disk, body);
    }

    #[tokio::test]
    async fn test_download_without_fields_exports_all_nulls() {
        let response = router_with(accepting_exporter())
            .oneshot(form_post("/download", ""))
            .await
            .unwrap();

        let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert!(body.as_object().unwrap().values().all(Value::is_null));
    }

    #[tokio::test]
    async fn test_download_export_failure_is_internal_error() {
        let mut exporter = MockSheetExportPort::new();
        exporter
            .expect_write_export()
            .returning(|_| Err(ExportError::Task("disk on fire".to_string())));

        let response = router_with(Arc::new(exporter))
            .oneshot(form_post("/download", "gold=1"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, "Internal error");
    }

    #[tokio::test]
    async fn test_upload_renders_imported_sheet() {
        let response = router_with(accepting_exporter())
            .oneshot(upload_post(r#"{"max_skill":"9"}"#, &[("max-skill", "4")]))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let page = body_text(response).await;
        assert!(page.contains(r#"name="max-skill" value="9""#));
        assert!(page.contains(r#"name="cur-skill" value="""#));
        assert!(page.contains(r#"name="clues"></textarea>"#));
    }

    #[tokio::test]
    async fn test_upload_invalid_json_falls_back_to_form() {
        let response = router_with(accepting_exporter())
            .oneshot(upload_post("not-json", &[("max-skill", "4"), ("clues", "key")]))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let page = body_text(response).await;
        assert!(page.contains(r#"name="max-skill" value="4""#));
        assert!(page.contains(r#"name="clues">key</textarea>"#));
    }

    #[tokio::test]
    async fn test_upload_non_object_falls_back_to_form() {
        for file in ["42", "[]"] {
            let response = router_with(accepting_exporter())
                .oneshot(upload_post(file, &[("gold", "8")]))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK);
            let page = body_text(response).await;
            assert!(page.contains(r#"name="gold" value="8""#));
        }
    }

    #[tokio::test]
    async fn test_upload_without_file_falls_back_to_form() {
        let response = router_with(accepting_exporter())
            .oneshot(form_post("/upload", "food=3"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let page = body_text(response).await;
        assert!(page.contains(r#"name="food" value="3""#));
    }

    #[tokio::test]
    async fn test_download_then_upload_round_trip() {
        let fields = "max-skill=11&cur-skill=9&max-hp=20&cur-hp=14&max-luck=10&cur-luck=7\
            &page-num=400&gold=25&treasures=gem&food=1&provisions=4\
            &equipment-and-items=sword&conditions=poisoned&clues=door+code+7\
            &book-1=I&book-2=II&book-3=III&book-4=IV";
        let download = router_with(accepting_exporter())
            .oneshot(form_post("/download", fields))
            .await
            .unwrap();
        let exported = body_text(download).await;

        let response = router_with(accepting_exporter())
            .oneshot(upload_post(&exported, &[]))
            .await
            .unwrap();
        let page = body_text(response).await;
        assert!(page.contains(r#"name="page-num" value="400""#));
        assert!(page.contains(r#"name="clues">door code 7</textarea>"#));
        assert!(page.contains(r#"name="book-4" value="IV""#));
    }

    #[test]
    fn test_api_error_status_codes() {
        assert_eq!(
            ApiError::BadRequest("bad".to_string()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Internal("secret".to_string()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
