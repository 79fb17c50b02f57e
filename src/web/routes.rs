//! Page route configuration.

use crate::state::AppState;
use crate::web::handlers::{index_handler, site_help_handler};
use axum::{Router, routing::get};

/// Informational page routes.
///
/// # Endpoints
///
/// - `GET /`  - Index page describing the service
/// - `GET /s` - Usage help for the redirect route (400, no site given)
///
/// Unmatched paths are served the index page through the router fallback
/// configured in [`crate::routes::app_router`].
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/s", get(site_help_handler))
}
