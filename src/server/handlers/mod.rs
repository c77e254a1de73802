//! HTTP request handlers for the web server.

mod api;
mod helpers;
mod pages;
mod static_files;

// Re-export handlers for use by the router
pub use api::{api_scan, health};
pub use pages::{index, scan_form};
pub use static_files::{serve_css, serve_js};
