//! Router configuration for the web server.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use super::handlers;
use super::AppState;

/// Headroom over the file cap for multipart framing.
const BODY_LIMIT_SLACK: usize = 64 * 1024;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.scan_service.settings().body_limit();

    Router::new()
        // Upload page and form submission
        .route("/", get(handlers::index).post(handlers::scan_form))
        // Scan API
        .route("/api/scan", post(handlers::api_scan))
        .route("/api/health", get(handlers::health))
        // Static assets (CSS/JS)
        .route("/static/style.css", get(handlers::serve_css))
        .route("/static/app.js", get(handlers::serve_js))
        .layer(DefaultBodyLimit::max(body_limit.saturating_add(BODY_LIMIT_SLACK)))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
