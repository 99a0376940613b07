//! Storage backend capability.

use std::future::Future;

use bytes::Bytes;

use super::error::StorageError;

/// Result of removing a blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deletion {
    /// The blob existed and was removed.
    Deleted,
    /// Nothing was stored under the reference.
    AlreadyAbsent,
}

/// Key→blob object store consumed by the attachment manager.
///
/// References returned by [`BlobStore::put`] are opaque and round-trip into
/// [`BlobStore::read`] and [`BlobStore::delete`].
pub trait BlobStore: Send + Sync {
    /// Store `bytes` under `key` and return the reference to persist.
    fn put(
        &self,
        key: &str,
        bytes: Bytes,
        content_type: &str,
    ) -> impl Future<Output = Result<String, StorageError>> + Send;

    /// Fetch the blob behind a reference.
    fn read(&self, reference: &str) -> impl Future<Output = Result<Bytes, StorageError>> + Send;

    /// Remove the blob behind a reference. Removing a missing blob is not an error.
    fn delete(
        &self,
        reference: &str,
    ) -> impl Future<Output = Result<Deletion, StorageError>> + Send;

    /// URL under which clients can download the blob.
    fn public_url(&self, reference: &str) -> String;
}
