//! Attachment domain types.

use bytes::Bytes;
use serde::Serialize;

use crate::storage::StorageError;

/// A file received with a create or update request.
#[derive(Debug, Clone)]
pub struct Upload {
    /// Client-supplied filename, unsanitized.
    pub filename: String,
    /// Declared MIME type.
    pub content_type: String,
    /// File contents.
    pub bytes: Bytes,
}

impl Upload {
    /// Create a new upload.
    #[must_use]
    pub fn new(
        filename: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        Self {
            filename: filename.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Size in bytes.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// A blob that should have been deleted but is still live.
///
/// Returned next to a successful result; never rolls anything back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanupFailure {
    /// Orphaned reference.
    pub reference: String,
    /// Backend error message.
    pub message: String,
}

impl CleanupFailure {
    /// Record a failed deletion of `reference`.
    #[must_use]
    pub fn new(reference: impl Into<String>, source: &StorageError) -> Self {
        Self {
            reference: reference.into(),
            message: source.to_string(),
        }
    }
}

/// Result of a complete update resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAttachment {
    /// Reference the record must carry from now on.
    pub reference: Option<String>,
    /// Set when the superseded blob could not be deleted.
    pub cleanup: Option<CleanupFailure>,
}

/// An update whose upload step is done but whose superseded blob still exists.
///
/// The record write happens between staging and
/// [`AttachmentManager::commit`](super::AttachmentManager::commit); if it fails,
/// [`AttachmentManager::abandon`](super::AttachmentManager::abandon) removes the
/// fresh blob instead.
#[derive(Debug)]
#[must_use = "a staged attachment must be committed or abandoned"]
pub struct StagedAttachment {
    pub(super) reference: Option<String>,
    pub(super) superseded: Option<String>,
    pub(super) fresh: Option<String>,
}

impl StagedAttachment {
    /// Staging for an update without upload.
    pub(super) fn unchanged(existing: Option<&str>) -> Self {
        Self {
            reference: existing.map(str::to_owned),
            superseded: None,
            fresh: None,
        }
    }

    /// Reference to write into the record.
    #[must_use]
    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    /// Whether a new blob was stored.
    #[must_use]
    pub fn is_replacement(&self) -> bool {
        self.fresh.is_some()
    }
}
