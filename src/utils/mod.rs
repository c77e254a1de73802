//! Shared utility functions.
//!
//! This module contains reusable utilities used across the codebase:
//! - `format`: Human-readable formatting (sizes, etc.)

mod format;

pub use format::format_size;
