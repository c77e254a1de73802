//! Askama template structs for the web interface.
//!
//! Each struct corresponds to an HTML template in the templates/ directory.
//! Askama provides compile-time verification that templates are valid.

use askama::Template;

use crate::config::Settings;
use crate::models::{FoundItem, PossibleItem, ScanReport};
use crate::utils::format_size;

/// Helper struct for high-confidence item rows.
pub struct FoundRow {
    pub code: String,
    pub quantity: String,
}

impl FoundRow {
    pub fn from_item(item: &FoundItem) -> Self {
        Self {
            code: item.code.clone(),
            quantity: item.quantity.to_string(),
        }
    }
}

/// Helper struct for low-confidence candidate rows.
pub struct PossibleRow {
    pub code: String,
    pub quantity: String,
    pub reason: String,
}

impl PossibleRow {
    pub fn from_item(item: &PossibleItem) -> Self {
        Self {
            code: item.code_label().to_string(),
            quantity: item.quantity_label(),
            reason: item.reason.to_string(),
        }
    }
}

/// Main page: upload form plus, after a scan, the result tables.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub title: String,
    pub max_size_str: String,
    pub has_error: bool,
    pub error: String,
    pub has_results: bool,
    pub filename: String,
    pub found: Vec<FoundRow>,
    pub possible: Vec<PossibleRow>,
    pub found_count: usize,
    pub possible_count: usize,
    pub has_found: bool,
    pub has_possible: bool,
    pub pages: u32,
}

impl IndexTemplate {
    /// The bare upload page.
    pub fn empty(settings: &Settings) -> Self {
        Self {
            title: "Picklist".to_string(),
            max_size_str: format_size(settings.max_file_size_bytes),
            has_error: false,
            error: String::new(),
            has_results: false,
            filename: String::new(),
            found: Vec::new(),
            possible: Vec::new(),
            found_count: 0,
            possible_count: 0,
            has_found: false,
            has_possible: false,
            pages: 0,
        }
    }

    /// The upload page with a validation or scan error banner.
    pub fn with_error(settings: &Settings, message: String) -> Self {
        Self {
            has_error: true,
            error: message,
            ..Self::empty(settings)
        }
    }

    /// The upload page with the result tables for a finished scan.
    pub fn with_report(settings: &Settings, filename: String, report: &ScanReport) -> Self {
        Self {
            has_results: true,
            filename,
            found: report.found.iter().map(FoundRow::from_item).collect(),
            possible: report.possible.iter().map(PossibleRow::from_item).collect(),
            found_count: report.found_count,
            possible_count: report.possible_count,
            has_found: report.found_count > 0,
            has_possible: report.possible_count > 0,
            pages: report.pages,
            ..Self::empty(settings)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Reason;

    #[test]
    fn test_index_template_renders_results() {
        let report = ScanReport {
            found: vec![FoundItem::new("ABC-123", 3)],
            possible: vec![PossibleItem {
                code: None,
                quantity: Some(7),
                reason: Reason::MarkerWithoutCode {
                    next_token: "the".to_string(),
                },
            }],
            found_count: 1,
            possible_count: 1,
            pages: 2,
        };

        let template =
            IndexTemplate::with_report(&Settings::default(), "list.pdf".to_string(), &report);
        let html = template.render().unwrap();

        assert!(html.contains("ABC-123"));
        assert!(html.contains("list.pdf"));
        assert!(html.contains("quantity marker with no clear following code"));
        // Unknown codes render as the placeholder.
        assert!(html.contains("data-code=\"?\""));
    }

    #[test]
    fn test_index_template_renders_error() {
        let template =
            IndexTemplate::with_error(&Settings::default(), "File type not allowed".to_string());
        let html = template.render().unwrap();
        assert!(html.contains("File type not allowed"));
        assert!(!html.contains("results-section"));
    }

    #[test]
    fn test_index_template_empty_scan() {
        let template = IndexTemplate::with_report(
            &Settings::default(),
            "empty.pdf".to_string(),
            &ScanReport {
                pages: 1,
                ..ScanReport::default()
            },
        );
        let html = template.render().unwrap();
        assert!(html.contains("No codes or quantities found in the PDF."));
    }
}
