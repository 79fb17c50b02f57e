//! Usage page for the bare redirect prefix.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::state::AppState;

/// Template explaining how to use `/s/<site-name>`.
#[derive(Template, WebTemplate)]
#[template(path = "site.html")]
pub struct SiteHelpTemplate {
    pub domain: String,
    pub legacy_base: String,
    pub current_base: String,
}

/// Answers `/s` and `/s/` (no site name) with 400 and the usage page.
pub async fn site_help_handler(State(state): State<AppState>) -> impl IntoResponse {
    let bases = state.resolver.bases();

    (
        StatusCode::BAD_REQUEST,
        SiteHelpTemplate {
            domain: bases.domain().to_string(),
            legacy_base: bases.legacy().to_string(),
            current_base: bases.current().to_string(),
        },
    )
}
