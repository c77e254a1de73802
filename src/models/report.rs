//! Per-document scan results.

use serde::Serialize;

use super::{FoundItem, PossibleItem};

/// Everything a single document scan produced.
///
/// `found`/`possible` keep page order, then token-scan order within a page.
/// The counts are derived once, after the last page, and an empty report is a
/// normal outcome rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScanReport {
    pub found: Vec<FoundItem>,
    pub possible: Vec<PossibleItem>,
    pub found_count: usize,
    pub possible_count: usize,
    /// Number of pages the extractor handed to the scanner.
    pub pages: u32,
}

impl ScanReport {
    /// True when a fully successful scan matched nothing at all.
    pub fn is_empty(&self) -> bool {
        self.found_count == 0 && self.possible_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Reason;

    #[test]
    fn test_empty_report() {
        let report = ScanReport::default();
        assert!(report.is_empty());
        assert_eq!(report.found_count, 0);
        assert_eq!(report.possible_count, 0);
    }

    #[test]
    fn test_non_empty_report() {
        let report = ScanReport {
            found: vec![FoundItem::new("ABC-1", 3)],
            possible: vec![],
            found_count: 1,
            possible_count: 0,
            pages: 1,
        };
        assert!(!report.is_empty());

        let report = ScanReport {
            found: vec![],
            possible: vec![PossibleItem {
                code: Some("123456".to_string()),
                quantity: None,
                reason: Reason::CodeWithoutQuantity,
            }],
            found_count: 0,
            possible_count: 1,
            pages: 2,
        };
        assert!(!report.is_empty());
    }
}
