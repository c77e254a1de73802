//! Helper types and utility functions for handlers.

use axum::extract::Multipart;
use serde::Serialize;

use crate::services::UploadError;

/// JSON error payload.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl ToString) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

/// Pull the `pdf` field out of a multipart form.
///
/// Returns the client-supplied filename and the raw bytes. Reports a missing
/// field, an empty filename, or an unreadable body as upload errors.
pub async fn read_upload(mut multipart: Multipart) -> Result<(String, Vec<u8>), UploadError> {
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() != Some("pdf") {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await.map_err(|e| {
            tracing::warn!("Failed to read upload bytes: {}", e);
            UploadError::ReadFailed
        })?;
        file = Some((filename, bytes.to_vec()));
    }

    match file {
        Some((name, _)) if name.is_empty() => Err(UploadError::EmptyFilename),
        Some(parts) => Ok(parts),
        None => Err(UploadError::MissingFile),
    }
}
