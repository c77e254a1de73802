//! Web server for scanning picking list PDFs.
//!
//! Serves the upload page, handles form and API uploads, and renders the
//! found/possible line item tables for a scanned document.

mod assets;
mod handlers;
mod routes;
mod template_structs;

pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::Settings;
use crate::services::ScanService;

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub scan_service: Arc<ScanService>,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            scan_service: Arc::new(ScanService::new(settings.clone())),
        }
    }
}

/// Start the web server.
pub async fn serve(settings: &Settings, host: &str, port: u16) -> anyhow::Result<()> {
    settings.ensure_directories()?;

    let state = AppState::new(settings);
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tempfile::tempdir;
    use tower::ServiceExt;

    fn setup_test_app() -> (axum::Router, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let settings = Settings {
            upload_dir: dir.path().join("uploads"),
            ..Settings::default()
        };

        let app = create_router(AppState::new(&settings));
        (app, dir)
    }

    fn multipart_request(uri: &str, filename: &str, content: &[u8]) -> Request<Body> {
        let boundary = "picklist-test-boundary";
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"pdf\"; filename=\"{}\"\r\n\
                 Content-Type: application/pdf\r\n\r\n",
                filename
            )
            .as_bytes(),
        );
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());

        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", boundary),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(body.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_index_page() {
        let (app, _dir) = setup_test_app();

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Picklist"));
        assert!(html.contains("pdf-input"));
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _dir) = setup_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_static_assets() {
        let (app, _dir) = setup_test_app();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/static/style.css")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/css"
        );

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/static/app.js")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/javascript"
        );
    }

    #[tokio::test]
    async fn test_api_scan_rejects_missing_file() {
        let (app, _dir) = setup_test_app();

        let boundary = "picklist-test-boundary";
        let body = format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"other\"\r\n\r\nvalue\r\n--{b}--\r\n",
            b = boundary
        );
        let request = Request::builder()
            .method("POST")
            .uri("/api/scan")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", boundary),
            )
            .body(Body::from(body))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "No file was uploaded");
    }

    #[tokio::test]
    async fn test_api_scan_rejects_wrong_extension() {
        let (app, _dir) = setup_test_app();

        let response = app
            .oneshot(multipart_request("/api/scan", "notes.txt", b"%PDF-1.4"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert!(json["error"]
            .as_str()
            .unwrap()
            .contains("File type not allowed"));
    }

    #[tokio::test]
    async fn test_api_scan_rejects_non_pdf_content() {
        let (app, _dir) = setup_test_app();

        let response = app
            .oneshot(multipart_request("/api/scan", "list.pdf", b"just text"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "File content is not a PDF");
    }

    #[tokio::test]
    async fn test_api_scan_unreadable_pdf_is_unprocessable() {
        let (app, _dir) = setup_test_app();

        // Passes validation by magic bytes but has no readable page
        // structure, so extraction fails regardless of the local poppler
        // install.
        let response = app
            .oneshot(multipart_request(
                "/api/scan",
                "list.pdf",
                b"%PDF-1.4\nnot a real pdf body",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = body_json(response).await;
        assert!(!json["error"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_form_scan_renders_error_banner() {
        let (app, _dir) = setup_test_app();

        let response = app
            .oneshot(multipart_request("/", "notes.txt", b"%PDF-1.4"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Upload a valid PDF file."));
    }
}
