//! Document scanning service.
//!
//! Ties upload validation, text extraction, and token classification
//! together. Separated from UI concerns so the CLI and the web server share
//! one pipeline.

use std::path::Path;

use thiserror::Error;

use crate::classify::{tokenize, TokenScanner};
use crate::config::Settings;
use crate::extract::{ExtractionError, PdfTextExtractor};
use crate::models::ScanReport;
use crate::storage;

/// Upload validation failures. These are caller errors, reported before any
/// file is staged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("No file was uploaded")]
    MissingFile,

    #[error("No file was selected")]
    EmptyFilename,

    #[error("File type not allowed: {0}")]
    DisallowedExtension(String),

    #[error("File exceeds the maximum upload size of {max} bytes")]
    TooLarge { max: u64 },

    #[error("File content is not a PDF")]
    NotAPdf,

    #[error("Failed to read the uploaded file data")]
    ReadFailed,
}

/// Failures in the scan pipeline. Extraction errors are terminal for the
/// whole document; no partial results are reported.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error(transparent)]
    InvalidUpload(#[from] UploadError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Service for scanning documents into line item reports.
pub struct ScanService {
    settings: Settings,
    extractor: PdfTextExtractor,
}

impl ScanService {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            extractor: PdfTextExtractor::new(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Validate an upload before staging it. Checks the filename extension,
    /// the size cap, and the content magic bytes.
    pub fn validate_upload(&self, filename: &str, content: &[u8]) -> Result<(), UploadError> {
        if filename.is_empty() {
            return Err(UploadError::EmptyFilename);
        }
        if !self.settings.is_allowed_extension(filename) {
            return Err(UploadError::DisallowedExtension(filename.to_string()));
        }
        if content.len() as u64 > self.settings.max_file_size_bytes {
            return Err(UploadError::TooLarge {
                max: self.settings.max_file_size_bytes,
            });
        }
        let is_pdf = infer::get(content)
            .map(|t| t.mime_type() == "application/pdf")
            .unwrap_or(false);
        if !is_pdf {
            return Err(UploadError::NotAPdf);
        }
        Ok(())
    }

    /// Scan a PDF already on disk.
    pub fn scan_file(&self, path: &Path) -> Result<ScanReport, ScanError> {
        self.scan_file_with_progress(path, |_, _| {})
    }

    /// Scan a PDF already on disk, reporting `(page, total)` after each
    /// scanned page.
    pub fn scan_file_with_progress(
        &self,
        path: &Path,
        mut on_page: impl FnMut(u32, u32),
    ) -> Result<ScanReport, ScanError> {
        let total = self.extractor.page_count(path)?;
        tracing::debug!("Scanning {} pages from {}", total, path.display());

        let mut scanner = TokenScanner::new();
        for page in 1..=total {
            let text = self.extractor.page_text(path, page)?;
            scanner.scan_page(&tokenize(&text));
            on_page(page, total);
        }

        let report = scanner.finish();
        tracing::info!(
            "Scan of {} finished: {} found, {} possible across {} pages",
            path.display(),
            report.found_count,
            report.possible_count,
            report.pages
        );
        Ok(report)
    }

    /// Validate, stage, and scan an uploaded file. The staged copy stays in
    /// the upload directory after the scan.
    pub fn scan_upload(&self, filename: &str, content: &[u8]) -> Result<ScanReport, ScanError> {
        self.validate_upload(filename, content)?;

        let path = storage::save_upload(&self.settings.upload_dir, filename, content)?;
        self.scan_file(&path)
    }
}
