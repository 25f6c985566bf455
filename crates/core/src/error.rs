//! Service error model.

use thiserror::Error;

/// Result type used across the service layer.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service-level error.
///
/// Keep this focused on the four observable failure kinds of the catalog
/// operations. Transport mapping (status codes, response envelopes) belongs
/// to the API layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Malformed or missing input (maps to a client-error response).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A duplicate resource was detected (e.g. category name taken).
    #[error("conflict: {0}")]
    Conflict(String),

    /// A referenced record is absent.
    #[error("not found: {0}")]
    NotFound(String),

    /// An unexpected store failure, carrying the underlying message.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
