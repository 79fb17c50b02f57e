//! Top-level router configuration combining API and page routes.
//!
//! # Route Structure
//!
//! - `GET  /`            - Index page
//! - `GET  /s`           - Usage help (400, no site name)
//! - `GET  /s/{site}`    - Resolve and redirect (302 / 404)
//! - `GET  /health`      - Cache health check
//! - anything else       - Index page
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket
//! - **Path normalization** - Trailing slash handling, so `/s/` is `/s`

use crate::api;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use crate::web::handlers::index_handler;
use anyhow::Result;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `rate_limit_period_seconds` / `rate_limit_burst` - per-IP token bucket;
///   the service must be served with `ConnectInfo<SocketAddr>`
///
/// # Errors
///
/// Returns an error if the rate limit settings are invalid.
pub fn app_router(
    state: AppState,
    rate_limit_period_seconds: u64,
    rate_limit_burst: u32,
) -> Result<NormalizePath<Router>> {
    let router = Router::new()
        .merge(web::routes::public_routes())
        .merge(api::routes::public_routes())
        .fallback(index_handler)
        .with_state(state)
        .layer(rate_limit::layer(rate_limit_period_seconds, rate_limit_burst)?)
        .layer(tracing::layer());

    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}
