//! Server error types

use axum::http::StatusCode;
use thiserror::Error;

/// Main server error type
#[derive(Debug, Error)]
pub enum ServerError {
    // ========== Validation Errors ==========
    /// Submission rejected by the validator
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Request body could not be parsed
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    // ========== Storage Errors ==========
    /// Storage operation failed
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Log content could not be decoded
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    // ========== Server Errors ==========
    /// Sequencer is not accepting requests (shut down)
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Reasons a submission is rejected before it reaches the log
///
/// Checked in declaration order; the first failing rule wins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// `name` missing or blank after trimming
    #[error("name is required")]
    NameRequired,

    /// `email` missing or blank after trimming
    #[error("email is required")]
    EmailRequired,

    /// `email` does not look like an address
    #[error("email address is not valid")]
    EmailInvalid,

    /// A field exceeds the configured length bound
    #[error("field '{field}' exceeds {max} characters")]
    FieldTooLong { field: &'static str, max: usize },
}

impl ValidationError {
    /// Stable machine-readable reason returned to clients
    pub fn reason(&self) -> &'static str {
        match self {
            ValidationError::NameRequired => "name_required",
            ValidationError::EmailRequired => "email_required",
            ValidationError::EmailInvalid => "email_invalid",
            ValidationError::FieldTooLong { .. } => "field_too_long",
        }
    }
}

/// Storage-specific errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// I/O error (missing medium, permission denied, disk full)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Blocking storage task panicked or was cancelled
    #[error("storage task failed: {0}")]
    TaskFailed(String),
}

/// Errors produced while decoding CSV log content
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A quoted field was never closed
    #[error("unterminated quoted field starting on line {line}")]
    UnterminatedQuote { line: usize },

    /// Row does not have the expected number of columns
    #[error("expected {expected} fields, found {actual}")]
    FieldCount { expected: usize, actual: usize },
}

/// Server result type alias
pub type ServerResult<T> = Result<T, ServerError>;

impl ServerError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            ServerError::Validation(_) | ServerError::InvalidArgument(_) => {
                StatusCode::BAD_REQUEST
            }

            // 503 Service Unavailable
            ServerError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,

            // 500 Internal Server Error
            ServerError::Storage(_)
            | ServerError::Codec(_)
            | ServerError::Internal(_)
            | ServerError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code for API response
    pub fn error_code(&self) -> &'static str {
        match self {
            ServerError::Validation(e) => e.reason(),
            ServerError::InvalidArgument(_) => "invalid_body",
            ServerError::Storage(_) => "storage_error",
            ServerError::Codec(_) => "codec_error",
            ServerError::ServiceUnavailable(_) => "service_unavailable",
            ServerError::Internal(_) => "internal_error",
            ServerError::Config(_) => "config_error",
        }
    }

    /// Check if error is recoverable (client can retry)
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ServerError::ServiceUnavailable(_) | ServerError::Storage(StorageError::Io(_))
        )
    }
}

impl From<serde_json::Error> for ServerError {
    fn from(e: serde_json::Error) -> Self {
        ServerError::InvalidArgument(e.to_string())
    }
}

impl From<tokio::task::JoinError> for StorageError {
    fn from(e: tokio::task::JoinError) -> Self {
        StorageError::TaskFailed(e.to_string())
    }
}
