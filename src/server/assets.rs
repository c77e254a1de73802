//! Static asset constants (CSS and JavaScript).

/// Stylesheet for the web interface.
pub const CSS: &str = include_str!("styles.css");

/// JavaScript for upload handling and copy-to-clipboard.
pub const JS: &str = include_str!("app.js");
