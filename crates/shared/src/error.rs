//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request body could not be parsed.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Path id is not a positive integer.
    #[error("Invalid id: {0}")]
    InvalidId(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Authentication failed.
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Uploaded file exceeds the configured limit.
    #[error("File too large: {0}")]
    PayloadTooLarge(String),

    /// Uploaded file has a MIME type outside the allow list.
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    /// File storage backend failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::InvalidRequest(_) | Self::InvalidId(_) | Self::Validation(_) => 400,
            Self::Unauthorized(_) => 401,
            Self::NotFound(_) => 404,
            Self::PayloadTooLarge(_) => 413,
            Self::UnsupportedMediaType(_) => 415,
            Self::Storage(_) => 502,
            Self::Database(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidRequest(_) => "invalid_request",
            Self::InvalidId(_) => "invalid_id",
            Self::Validation(_) => "validation_error",
            Self::Unauthorized(_) => "unauthorized",
            Self::NotFound(_) => "not_found",
            Self::PayloadTooLarge(_) => "file_too_large",
            Self::UnsupportedMediaType(_) => "unsupported_media_type",
            Self::Storage(_) => "storage_error",
            Self::Database(_) | Self::Internal(_) => "internal_error",
        }
    }

    /// Message safe to show to API clients.
    ///
    /// Server-side failures are reduced to a generic sentence so driver or
    /// backend details never leak into responses.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::Database(_) | Self::Internal(_) => "An error occurred".to_string(),
            Self::Storage(_) => "Storage operation failed".to_string(),
            Self::InvalidRequest(msg)
            | Self::InvalidId(msg)
            | Self::Validation(msg)
            | Self::Unauthorized(msg)
            | Self::NotFound(msg)
            | Self::PayloadTooLarge(msg)
            | Self::UnsupportedMediaType(msg) => msg.clone(),
        }
    }
}
