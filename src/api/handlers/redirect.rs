//! Handler for site redirects.

use axum::{
    extract::State,
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use tracing::info;

use crate::domain::SiteKey;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a site name to its live Google Sites URL.
///
/// # Endpoint
///
/// `GET /s/{site}` (further path segments are accepted and ignored)
///
/// # Request Flow
///
/// 1. Parse the site key from the request path
/// 2. Resolve via [`crate::application::services::ResolverService`]
///    (cache first, then legacy and current probes)
/// 3. Return 302 Found with the destination in `Location`
///
/// # Errors
///
/// Returns 400 Bad Request if the site name is missing or invalid.
/// Returns 404 Not Found with a plain-text body if neither hosting scheme
/// serves the site.
pub async fn redirect_handler(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Response, AppError> {
    let key = SiteKey::from_path(uri.path())?;

    let destination = state
        .resolver
        .resolve(&key)
        .await
        .ok_or(AppError::SiteNotFound)?;

    info!(
        "Redirecting {} to {} ({:?})",
        uri.path(),
        destination.url,
        destination.from
    );

    Ok((StatusCode::FOUND, [(header::LOCATION, destination.url)]).into_response())
}
