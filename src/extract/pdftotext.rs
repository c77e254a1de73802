//! Page-by-page PDF text extraction via poppler-utils.

use std::path::Path;
use std::process::Command;

use thiserror::Error;

/// Tools the extractor shells out to.
pub const REQUIRED_TOOLS: [&str; 2] = ["pdfinfo", "pdftotext"];

/// Errors that can occur while pulling text out of a PDF.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("External tool not found: {0}")]
    ToolNotFound(String),

    #[error("Extraction failed: {0}")]
    ExtractionFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Handle command output, extracting stdout on success or returning the
/// appropriate error.
fn handle_cmd_output(
    result: std::io::Result<std::process::Output>,
    tool_name: &str,
    error_prefix: &str,
) -> Result<String, ExtractionError> {
    match result {
        Ok(output) => {
            if output.status.success() {
                Ok(String::from_utf8_lossy(&output.stdout).to_string())
            } else {
                let stderr = String::from_utf8_lossy(&output.stderr);
                Err(ExtractionError::ExtractionFailed(format!(
                    "{}: {}",
                    error_prefix, stderr
                )))
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(ExtractionError::ToolNotFound(tool_name.to_string()))
        }
        Err(e) => Err(ExtractionError::Io(e)),
    }
}

/// Pull the page count out of pdfinfo's stdout.
fn parse_page_count(stdout: &str) -> Option<u32> {
    for line in stdout.lines() {
        if line.starts_with("Pages:") {
            return line.split_whitespace().nth(1).and_then(|s| s.parse().ok());
        }
    }
    None
}

/// Text extractor backed by the poppler command line tools.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Number of pages in the PDF, via pdfinfo.
    pub fn page_count(&self, file_path: &Path) -> Result<u32, ExtractionError> {
        let output = Command::new("pdfinfo").arg(file_path).output();
        let stdout = handle_cmd_output(output, "pdfinfo (install poppler-utils)", "pdfinfo failed")?;

        parse_page_count(&stdout).ok_or_else(|| {
            ExtractionError::ExtractionFailed("pdfinfo output has no page count".to_string())
        })
    }

    /// Extract the text of a single page, preserving layout.
    pub fn page_text(&self, file_path: &Path, page: u32) -> Result<String, ExtractionError> {
        let page_str = page.to_string();
        let output = Command::new("pdftotext")
            .args(["-layout", "-enc", "UTF-8", "-f", &page_str, "-l", &page_str])
            .arg(file_path)
            .arg("-") // Output to stdout
            .output();

        handle_cmd_output(
            output,
            "pdftotext (install poppler-utils)",
            &format!("pdftotext failed on page {}", page),
        )
    }

    /// Check which required tools are on PATH.
    pub fn check_tools() -> Vec<(String, bool)> {
        REQUIRED_TOOLS
            .iter()
            .map(|tool| (tool.to_string(), which::which(tool).is_ok()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_count() {
        let stdout = "Title:          Pick list\nPages:          7\nEncrypted:      no\n";
        assert_eq!(parse_page_count(stdout), Some(7));
    }

    #[test]
    fn test_parse_page_count_missing() {
        assert_eq!(parse_page_count("Title: whatever\n"), None);
        assert_eq!(parse_page_count("Pages: many\n"), None);
    }

    #[test]
    fn test_check_tools_lists_both() {
        let tools = PdfTextExtractor::check_tools();
        assert_eq!(tools.len(), REQUIRED_TOOLS.len());
        for (tool, _) in tools {
            assert!(REQUIRED_TOOLS.contains(&tool.as_str()));
        }
    }
}
