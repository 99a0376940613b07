//! Content error types.

use thiserror::Error;

use sekolah_shared::AppError;

use crate::attachment::AttachmentError;
use crate::storage::StorageError;

/// Content operation errors.
#[derive(Debug, Error)]
pub enum ContentError {
    /// No record with this id.
    #[error("{resource} {id} not found")]
    NotFound {
        /// Resource name.
        resource: &'static str,
        /// Requested id.
        id: i32,
    },

    /// A file was sent to a resource without file column.
    #[error("{resource} does not accept file uploads")]
    UnexpectedFile {
        /// Resource name.
        resource: &'static str,
    },

    /// Attachment could not be stored.
    #[error(transparent)]
    Attachment(#[from] AttachmentError),

    /// Repository operation failed.
    #[error("repository error: {0}")]
    Repository(String),
}

impl ContentError {
    /// Create a not found error.
    #[must_use]
    pub fn not_found(resource: &'static str, id: i32) -> Self {
        Self::NotFound { resource, id }
    }

    /// Create a repository error.
    #[must_use]
    pub fn repository(msg: impl Into<String>) -> Self {
        Self::Repository(msg.into())
    }
}

impl From<ContentError> for AppError {
    fn from(err: ContentError) -> Self {
        match err {
            ContentError::NotFound { .. } => Self::NotFound(err.to_string()),
            ContentError::UnexpectedFile { .. } => Self::InvalidRequest(err.to_string()),
            ContentError::Attachment(e) => match e.storage_error() {
                StorageError::FileTooLarge { .. } => Self::PayloadTooLarge(e.to_string()),
                StorageError::InvalidMimeType { .. } => Self::UnsupportedMediaType(e.to_string()),
                StorageError::EmptyFile => Self::Validation(e.to_string()),
                _ => Self::Storage(e.to_string()),
            },
            ContentError::Repository(msg) => Self::Database(msg),
        }
    }
}
