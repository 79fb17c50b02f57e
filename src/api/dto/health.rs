//! DTOs for the `/health` endpoint.

use serde::Serialize;

/// Health report for the redirect service.
///
/// `status` is `"healthy"` when every check passes and `"degraded"`
/// otherwise; the handler answers 503 in the degraded case.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

/// Component checks. The destination cache is the only stateful
/// collaborator; the prober is not checked since Google Sites is outside
/// the service's control.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    /// Result of the active cache backend's own health check
    /// (Redis `PING`, always ok for the memory and null backends)
    pub cache: CheckStatus,
}

/// Outcome of one check: `"ok"` or `"error"`, with a message naming the
/// cache backend.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
