//! Storage error types.

use thiserror::Error;

/// Errors raised by a blob store.
///
/// The first three variants are upload rejections: nothing was written.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Upload is larger than the configured limit.
    #[error("file size {size} bytes exceeds the {max} byte limit")]
    FileTooLarge {
        /// Upload size.
        size: u64,
        /// Configured limit.
        max: u64,
    },

    /// Upload MIME type is not on the allow list.
    #[error("MIME type '{mime_type}' is not allowed")]
    InvalidMimeType {
        /// Declared MIME type.
        mime_type: String,
    },

    /// Upload has no content.
    #[error("uploaded file is empty")]
    EmptyFile,

    /// No blob under this reference.
    #[error("file not found: {reference}")]
    NotFound {
        /// Missing reference.
        reference: String,
    },

    /// Backend could not be built from configuration.
    #[error("storage configuration error: {0}")]
    Configuration(String),

    /// Backend call failed.
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl StorageError {
    /// Upload larger than `max`.
    #[must_use]
    pub fn file_too_large(size: u64, max: u64) -> Self {
        Self::FileTooLarge { size, max }
    }

    /// Upload of a disallowed type.
    #[must_use]
    pub fn invalid_mime_type(mime_type: impl Into<String>) -> Self {
        Self::InvalidMimeType {
            mime_type: mime_type.into(),
        }
    }

    /// Missing blob.
    #[must_use]
    pub fn not_found(reference: impl Into<String>) -> Self {
        Self::NotFound {
            reference: reference.into(),
        }
    }

    /// Bad backend configuration.
    #[must_use]
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Failed backend call.
    #[must_use]
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }

    /// Whether the upload was refused before anything was written.
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::FileTooLarge { .. } | Self::InvalidMimeType { .. } | Self::EmptyFile
        )
    }
}

impl From<opendal::Error> for StorageError {
    fn from(err: opendal::Error) -> Self {
        match err.kind() {
            opendal::ErrorKind::NotFound => Self::not_found(err.to_string()),
            opendal::ErrorKind::ConfigInvalid => Self::Configuration(err.to_string()),
            _ => Self::Backend(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejections() {
        assert!(StorageError::EmptyFile.is_rejection());
        assert!(StorageError::file_too_large(2, 1).is_rejection());
        assert!(StorageError::invalid_mime_type("text/html").is_rejection());
        assert!(!StorageError::backend("timeout").is_rejection());
        assert!(!StorageError::not_found("news/a.png").is_rejection());
    }

    #[test]
    fn test_from_opendal_kind() {
        let err = opendal::Error::new(opendal::ErrorKind::NotFound, "gone");
        assert!(matches!(StorageError::from(err), StorageError::NotFound { .. }));

        let err = opendal::Error::new(opendal::ErrorKind::PermissionDenied, "denied");
        assert!(matches!(StorageError::from(err), StorageError::Backend(_)));
    }
}
