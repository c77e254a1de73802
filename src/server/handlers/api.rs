//! API endpoint handlers.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use super::super::AppState;
use super::helpers::{read_upload, ErrorResponse};
use crate::models::ScanReport;
use crate::services::ScanError;

/// Health check endpoint for container orchestration.
pub async fn health() -> impl IntoResponse {
    StatusCode::OK
}

/// Successful scan payload.
#[derive(Debug, Serialize)]
pub struct ScanResponse {
    pub filename: String,
    #[serde(flatten)]
    pub report: ScanReport,
}

/// Scan an uploaded PDF and return the report as JSON.
pub async fn api_scan(State(state): State<AppState>, multipart: Multipart) -> Response {
    let (filename, bytes) = match read_upload(multipart).await {
        Ok(parts) => parts,
        Err(e) => {
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(e))).into_response();
        }
    };

    let service = state.scan_service.clone();
    let name = filename.clone();
    // The scan shells out to poppler, so keep it off the async workers.
    let result = tokio::task::spawn_blocking(move || service.scan_upload(&name, &bytes)).await;

    match result {
        Ok(Ok(report)) => Json(ScanResponse { filename, report }).into_response(),
        Ok(Err(e @ ScanError::InvalidUpload(_))) => {
            (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(e))).into_response()
        }
        Ok(Err(e @ ScanError::Extraction(_))) => {
            (StatusCode::UNPROCESSABLE_ENTITY, Json(ErrorResponse::new(e))).into_response()
        }
        Ok(Err(e)) => {
            (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::new(e))).into_response()
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(format!("Scan task failed: {}", e))),
        )
            .into_response(),
    }
}
