//! Attachment error types.

use thiserror::Error;

use crate::storage::StorageError;

/// Attachment operation errors.
#[derive(Debug, Error)]
pub enum AttachmentError {
    /// The upload was rejected or could not be written. Nothing was mutated.
    #[error("failed to store upload: {0}")]
    StorageWrite(#[source] StorageError),

    /// A blob could not be removed.
    #[error("failed to delete '{reference}': {source}")]
    StorageDelete {
        /// Reference that is still live.
        reference: String,
        /// Backend failure.
        #[source]
        source: StorageError,
    },
}

impl AttachmentError {
    /// Create a delete error for a reference.
    #[must_use]
    pub fn storage_delete(reference: impl Into<String>, source: StorageError) -> Self {
        Self::StorageDelete {
            reference: reference.into(),
            source,
        }
    }

    /// Underlying storage error.
    #[must_use]
    pub fn storage_error(&self) -> &StorageError {
        match self {
            Self::StorageWrite(source) | Self::StorageDelete { source, .. } => source,
        }
    }
}
