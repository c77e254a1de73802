//! Data models for picklist.

mod item;
mod report;

pub use item::{FoundItem, PossibleItem, Reason, UNKNOWN_MARKER};
pub use report::ScanReport;
