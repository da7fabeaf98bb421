//! Response DTOs

use serde::Serialize;

/// Successful POST /api/submit-quote response
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    /// Always true
    pub success: bool,

    pub message: String,

    /// Commit instant of the written row (RFC 3339)
    pub timestamp: String,
}

/// Health check response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Always "OK"
    pub status: String,

    pub message: String,

    /// Server clock (RFC 3339)
    pub timestamp: String,

    /// Accepted submissions not yet written
    pub pending_writes: usize,
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Always false
    pub success: bool,

    /// Machine-readable reason (`name_required`, `storage_error`, ...)
    pub error: String,

    /// Human-readable message
    pub message: String,

    /// Whether the client can retry the same request
    pub recoverable: bool,
}
