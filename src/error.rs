//! HTTP-facing error type.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::domain::SiteKeyError;

/// Body returned when neither hosting scheme serves the requested site.
pub const SITE_NOT_FOUND_MESSAGE: &str = "404: Unable to locate Google site";

/// Errors surfaced to HTTP clients as plain-text responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{}", SITE_NOT_FOUND_MESSAGE)]
    SiteNotFound,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::SiteNotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl From<SiteKeyError> for AppError {
    fn from(e: SiteKeyError) -> Self {
        Self::BadRequest(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}
