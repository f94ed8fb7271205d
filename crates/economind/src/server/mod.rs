//! HTTP surface: the upload page and the JSON analysis endpoint.

mod handlers;
mod page;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use economind_core::{Analyzer, Config};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared, read-only server state. Credentials are never stored here.
pub struct AppState {
    pub analyzer: Analyzer,
}

/// Build the application router from configuration.
pub fn router(config: Config) -> Router {
    let body_limit = config.server.max_upload_mb * 1024 * 1024;
    let state = Arc::new(AppState {
        analyzer: Analyzer::new(config),
    });

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/api/analyze", post(handlers::analyze))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
