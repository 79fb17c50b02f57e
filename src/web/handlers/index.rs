//! Index page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::response::IntoResponse;

use crate::state::AppState;

/// Template for the index page.
///
/// Renders `templates/index.html` with the configured Workspace domain and
/// an example of the redirect route.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub domain: String,
}

/// Renders the index page.
///
/// # Endpoint
///
/// `GET /` and any path outside the redirect route.
///
/// Render failures are logged by `askama_web` and answered with 500.
pub async fn index_handler(State(state): State<AppState>) -> impl IntoResponse {
    IndexTemplate {
        domain: state.resolver.bases().domain().to_string(),
    }
}
