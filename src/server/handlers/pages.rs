//! Page handlers for the upload form and the form-based scan flow.

use askama::Template;
use axum::{
    extract::{Multipart, State},
    response::{Html, IntoResponse},
};

use super::super::template_structs::IndexTemplate;
use super::super::AppState;
use super::helpers::read_upload;
use crate::services::ScanError;

fn render(template: IndexTemplate) -> Html<String> {
    Html(
        template
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Upload page.
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    render(IndexTemplate::empty(state.scan_service.settings()))
}

/// Handle a form upload and re-render the page with the scan results.
pub async fn scan_form(State(state): State<AppState>, multipart: Multipart) -> impl IntoResponse {
    let settings = state.scan_service.settings().clone();

    let (filename, bytes) = match read_upload(multipart).await {
        Ok(parts) => parts,
        Err(_) => {
            return render(IndexTemplate::with_error(
                &settings,
                "Upload a valid PDF file.".to_string(),
            ));
        }
    };

    let service = state.scan_service.clone();
    let name = filename.clone();
    // The scan shells out to poppler, so keep it off the async workers.
    let result = tokio::task::spawn_blocking(move || service.scan_upload(&name, &bytes)).await;

    let template = match result {
        Ok(Ok(report)) => IndexTemplate::with_report(&settings, filename, &report),
        Ok(Err(ScanError::InvalidUpload(_))) => {
            IndexTemplate::with_error(&settings, "Upload a valid PDF file.".to_string())
        }
        Ok(Err(e)) => {
            IndexTemplate::with_error(&settings, format!("Error processing the PDF: {}", e))
        }
        Err(e) => IndexTemplate::with_error(&settings, format!("Error processing the PDF: {}", e)),
    };
    render(template)
}
