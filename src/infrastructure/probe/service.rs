//! Prober trait and error types.

use async_trait::async_trait;

/// Errors that prevent a probe from producing a status code.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("Probe timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),
}

/// Checks whether a candidate URL is live.
///
/// Callers only care whether the status is exactly `200`; a [`ProbeError`]
/// is treated the same as any other non-200 answer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SiteProber: Send + Sync {
    /// Issues a GET against `url` and returns the final HTTP status code.
    async fn probe(&self, url: &str) -> Result<u16, ProbeError>;
}
