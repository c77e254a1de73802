//! Service layer for picklist business logic.
//!
//! This module contains domain logic separated from UI concerns.
//! Services can be used by the CLI, the web server, or other interfaces.

pub mod scan;

pub use scan::{ScanError, ScanService, UploadError};
