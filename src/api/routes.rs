//! API route configuration.

use crate::api::handlers::{health_handler, redirect_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Public API routes.
///
/// # Endpoints
///
/// - `GET /s/{site}/...` - Resolve a site and redirect
/// - `GET /health`       - Cache backend health report
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/s/{*site}", get(redirect_handler))
        .route("/health", get(health_handler))
}
