//! Attachment manager implementation.

use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use super::error::AttachmentError;
use super::types::{CleanupFailure, ResolvedAttachment, StagedAttachment, Upload};
use crate::storage::{BlobStore, Deletion};

/// Longest sanitized filename kept in a storage key.
const MAX_FILENAME_LEN: usize = 100;

/// Manages the single optional file of one kind of record.
///
/// Every stored blob gets a fresh key under `namespace`, so two records never
/// share a reference.
pub struct AttachmentManager<S: BlobStore> {
    store: Arc<S>,
    namespace: &'static str,
}

impl<S: BlobStore> Clone for AttachmentManager<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            namespace: self.namespace,
        }
    }
}

impl<S: BlobStore> AttachmentManager<S> {
    /// Create a manager storing blobs under `namespace`.
    #[must_use]
    pub fn new(store: Arc<S>, namespace: &'static str) -> Self {
        Self { store, namespace }
    }

    /// Key prefix of this manager.
    #[must_use]
    pub fn namespace(&self) -> &'static str {
        self.namespace
    }

    /// Store the upload of a new record.
    ///
    /// Returns `None` without touching storage when there is no upload.
    ///
    /// # Errors
    ///
    /// Returns `StorageWrite` if the upload is rejected or cannot be written.
    pub async fn resolve_for_create(
        &self,
        upload: Option<Upload>,
    ) -> Result<Option<String>, AttachmentError> {
        match upload {
            Some(upload) => self.store_upload(upload).await.map(Some),
            None => Ok(None),
        }
    }

    /// Resolve the reference of an updated record and drop the superseded blob.
    ///
    /// Use [`Self::stage_update`] and [`Self::commit`] instead when a record
    /// write has to happen in between.
    ///
    /// # Errors
    ///
    /// Returns `StorageWrite` if the upload fails; nothing is deleted then.
    pub async fn resolve_for_update(
        &self,
        existing: Option<&str>,
        upload: Option<Upload>,
    ) -> Result<ResolvedAttachment, AttachmentError> {
        let staged = self.stage_update(existing, upload).await?;
        let reference = staged.reference.clone();
        let cleanup = self.commit(staged).await;
        Ok(ResolvedAttachment { reference, cleanup })
    }

    /// Store the new upload of an update, leaving the existing blob alone.
    ///
    /// # Errors
    ///
    /// Returns `StorageWrite` if the upload fails.
    pub async fn stage_update(
        &self,
        existing: Option<&str>,
        upload: Option<Upload>,
    ) -> Result<StagedAttachment, AttachmentError> {
        let Some(upload) = upload else {
            return Ok(StagedAttachment::unchanged(existing));
        };

        let fresh = self.store_upload(upload).await?;
        let superseded = existing.filter(|r| *r != fresh).map(str::to_owned);

        Ok(StagedAttachment {
            reference: Some(fresh.clone()),
            superseded,
            fresh: Some(fresh),
        })
    }

    /// Delete the blob superseded by a staged update.
    ///
    /// Call only after the record points at the new reference. A failed delete
    /// is logged and returned, never propagated.
    pub async fn commit(&self, staged: StagedAttachment) -> Option<CleanupFailure> {
        let superseded = staged.superseded?;
        self.discard(&superseded).await
    }

    /// Delete the blob uploaded by a staged update whose record write failed.
    pub async fn abandon(&self, staged: StagedAttachment) -> Option<CleanupFailure> {
        let fresh = staged.fresh?;
        self.discard(&fresh).await
    }

    /// Delete the blob of a deleted record.
    ///
    /// A blob that is already gone counts as deleted.
    ///
    /// # Errors
    ///
    /// Returns `StorageDelete` for any other backend failure.
    pub async fn resolve_for_delete(&self, existing: Option<&str>) -> Result<(), AttachmentError> {
        let Some(reference) = existing else {
            return Ok(());
        };

        match self.store.delete(reference).await {
            Ok(Deletion::Deleted) => {
                debug!(reference, "deleted attachment");
                Ok(())
            }
            Ok(Deletion::AlreadyAbsent) => {
                debug!(reference, "attachment already absent");
                Ok(())
            }
            Err(e) => Err(AttachmentError::storage_delete(reference, e)),
        }
    }

    /// Delete a blob, converting failure into a cleanup report.
    pub async fn discard(&self, reference: &str) -> Option<CleanupFailure> {
        match self.resolve_for_delete(Some(reference)).await {
            Ok(()) => None,
            Err(e) => {
                warn!(reference, error = %e, "failed to delete attachment, blob is orphaned");
                Some(CleanupFailure::new(reference, e.storage_error()))
            }
        }
    }

    /// Public URL of a reference.
    #[must_use]
    pub fn public_url(&self, reference: Option<&str>) -> Option<String> {
        reference.map(|r| self.store.public_url(r))
    }

    async fn store_upload(&self, upload: Upload) -> Result<String, AttachmentError> {
        let key = generate_storage_key(self.namespace, &upload.filename);
        let reference = self
            .store
            .put(&key, upload.bytes, &upload.content_type)
            .await
            .map_err(AttachmentError::StorageWrite)?;
        debug!(reference = %reference, "stored attachment");
        Ok(reference)
    }
}

/// Generate a unique storage key: `{namespace}/{uuid}-{sanitized filename}`.
#[must_use]
pub fn generate_storage_key(namespace: &str, filename: &str) -> String {
    format!("{namespace}/{}-{}", Uuid::new_v4(), sanitize_filename(filename))
}

/// Sanitize a filename for use inside a storage key.
///
/// Path components are dropped, anything outside ASCII alphanumerics, `.`,
/// `-` and `_` becomes `_`.
#[must_use]
pub fn sanitize_filename(filename: &str) -> String {
    let base = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();

    let sanitized: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .take(MAX_FILENAME_LEN)
        .collect();

    if sanitized.trim_matches('.').is_empty() {
        "file".to_string()
    } else {
        sanitized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{StorageError, StorageService};
    use bytes::Bytes;
    use proptest::prelude::*;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, Ordering};

    /// In-memory blob store with switchable failures.
    #[derive(Default)]
    struct FlakyStore {
        blobs: Mutex<HashMap<String, Bytes>>,
        fail_puts: AtomicBool,
        fail_deletes: AtomicBool,
    }

    impl FlakyStore {
        fn contains(&self, reference: &str) -> bool {
            self.blobs.lock().unwrap().contains_key(reference)
        }

        fn len(&self) -> usize {
            self.blobs.lock().unwrap().len()
        }

        fn insert(&self, reference: &str) {
            self.blobs
                .lock()
                .unwrap()
                .insert(reference.to_string(), Bytes::from_static(b"old"));
        }
    }

    impl BlobStore for FlakyStore {
        async fn put(
            &self,
            key: &str,
            bytes: Bytes,
            _content_type: &str,
        ) -> Result<String, StorageError> {
            if self.fail_puts.load(Ordering::SeqCst) {
                return Err(StorageError::backend("backend unavailable"));
            }
            self.blobs.lock().unwrap().insert(key.to_string(), bytes);
            Ok(key.to_string())
        }

        async fn read(&self, reference: &str) -> Result<Bytes, StorageError> {
            self.blobs
                .lock()
                .unwrap()
                .get(reference)
                .cloned()
                .ok_or_else(|| StorageError::not_found(reference))
        }

        async fn delete(&self, reference: &str) -> Result<Deletion, StorageError> {
            if self.fail_deletes.load(Ordering::SeqCst) {
                return Err(StorageError::backend("permission denied"));
            }
            Ok(match self.blobs.lock().unwrap().remove(reference) {
                Some(_) => Deletion::Deleted,
                None => Deletion::AlreadyAbsent,
            })
        }

        fn public_url(&self, reference: &str) -> String {
            format!("https://files.test/{reference}")
        }
    }

    fn png(name: &str, size: usize) -> Upload {
        Upload::new(name, "image/png", vec![7u8; size])
    }

    fn flaky() -> (Arc<FlakyStore>, AttachmentManager<FlakyStore>) {
        let store = Arc::new(FlakyStore::default());
        let manager = AttachmentManager::new(Arc::clone(&store), "news");
        (store, manager)
    }

    #[tokio::test]
    async fn test_create_without_upload_is_none() {
        let (store, manager) = flaky();
        assert_eq!(manager.resolve_for_create(None).await.unwrap(), None);
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn test_create_with_upload_stores_blob() {
        let (store, manager) = flaky();
        let reference = manager
            .resolve_for_create(Some(png("photo.png", 10)))
            .await
            .unwrap()
            .unwrap();

        assert!(reference.starts_with("news/"));
        assert!(reference.ends_with("-photo.png"));
        assert!(store.contains(&reference));
    }

    #[tokio::test]
    async fn test_create_upload_failure_is_storage_write() {
        let (store, manager) = flaky();
        store.fail_puts.store(true, Ordering::SeqCst);

        let err = manager
            .resolve_for_create(Some(png("photo.png", 10)))
            .await
            .unwrap_err();
        assert!(matches!(err, AttachmentError::StorageWrite(_)));
    }

    #[tokio::test]
    async fn test_update_without_upload_keeps_reference() {
        let (store, manager) = flaky();
        store.insert("news/existing.png");

        let resolved = manager
            .resolve_for_update(Some("news/existing.png"), None)
            .await
            .unwrap();

        assert_eq!(resolved.reference.as_deref(), Some("news/existing.png"));
        assert!(resolved.cleanup.is_none());
        assert!(store.contains("news/existing.png"));
    }

    #[tokio::test]
    async fn test_update_with_upload_replaces_blob() {
        let (store, manager) = flaky();
        store.insert("news/existing.png");

        let resolved = manager
            .resolve_for_update(Some("news/existing.png"), Some(png("new.png", 10)))
            .await
            .unwrap();

        let reference = resolved.reference.unwrap();
        assert_ne!(reference, "news/existing.png");
        assert!(store.contains(&reference));
        assert!(!store.contains("news/existing.png"));
        assert!(resolved.cleanup.is_none());
    }

    #[tokio::test]
    async fn test_update_upload_failure_deletes_nothing() {
        let (store, manager) = flaky();
        store.insert("news/existing.png");
        store.fail_puts.store(true, Ordering::SeqCst);

        let err = manager
            .resolve_for_update(Some("news/existing.png"), Some(png("new.png", 10)))
            .await
            .unwrap_err();

        assert!(matches!(err, AttachmentError::StorageWrite(_)));
        assert!(store.contains("news/existing.png"));
    }

    #[tokio::test]
    async fn test_update_cleanup_failure_is_reported() {
        let (store, manager) = flaky();
        store.insert("news/existing.png");
        store.fail_deletes.store(true, Ordering::SeqCst);

        let resolved = manager
            .resolve_for_update(Some("news/existing.png"), Some(png("new.png", 10)))
            .await
            .unwrap();

        let reference = resolved.reference.unwrap();
        assert!(store.contains(&reference));
        assert!(store.contains("news/existing.png"));

        let cleanup = resolved.cleanup.expect("cleanup failure reported");
        assert_eq!(cleanup.reference, "news/existing.png");
        assert!(cleanup.message.contains("permission denied"));
    }

    #[tokio::test]
    async fn test_abandon_removes_fresh_blob_only() {
        let (store, manager) = flaky();
        store.insert("news/existing.png");

        let staged = manager
            .stage_update(Some("news/existing.png"), Some(png("new.png", 10)))
            .await
            .unwrap();
        let fresh = staged.reference().unwrap().to_string();
        assert!(staged.is_replacement());
        assert!(store.contains(&fresh));

        assert!(manager.abandon(staged).await.is_none());
        assert!(!store.contains(&fresh));
        assert!(store.contains("news/existing.png"));
    }

    #[tokio::test]
    async fn test_abandon_without_upload_is_noop() {
        let (store, manager) = flaky();
        store.insert("news/existing.png");

        let staged = manager
            .stage_update(Some("news/existing.png"), None)
            .await
            .unwrap();
        assert!(!staged.is_replacement());
        assert!(manager.abandon(staged).await.is_none());
        assert!(store.contains("news/existing.png"));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let (store, manager) = flaky();
        store.insert("news/existing.png");

        manager
            .resolve_for_delete(Some("news/existing.png"))
            .await
            .unwrap();
        manager
            .resolve_for_delete(Some("news/existing.png"))
            .await
            .unwrap();
        manager.resolve_for_delete(None).await.unwrap();
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn test_delete_failure_is_storage_delete() {
        let (store, manager) = flaky();
        store.insert("news/existing.png");
        store.fail_deletes.store(true, Ordering::SeqCst);

        let err = manager
            .resolve_for_delete(Some("news/existing.png"))
            .await
            .unwrap_err();
        assert!(
            matches!(err, AttachmentError::StorageDelete { ref reference, .. } if reference == "news/existing.png")
        );
    }

    #[tokio::test]
    async fn test_photo_lifecycle_against_memory_backend() {
        let store = Arc::new(StorageService::in_memory().unwrap());
        let manager = AttachmentManager::new(Arc::clone(&store), "alumni");

        let first = manager
            .resolve_for_create(Some(png("photo.png", 500)))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(store.read(&first).await.unwrap().len(), 500);

        let resolved = manager
            .resolve_for_update(Some(&first), Some(png("photo2.png", 700)))
            .await
            .unwrap();
        let second = resolved.reference.unwrap();
        assert_eq!(store.read(&second).await.unwrap().len(), 700);
        assert!(matches!(
            store.read(&first).await,
            Err(StorageError::NotFound { .. })
        ));

        manager.resolve_for_delete(Some(&second)).await.unwrap();
        assert!(matches!(
            store.read(&second).await,
            Err(StorageError::NotFound { .. })
        ));
        manager.resolve_for_delete(Some(&second)).await.unwrap();
    }

    #[tokio::test]
    async fn test_record_without_file_gains_one() {
        let store = Arc::new(StorageService::in_memory().unwrap());
        let manager = AttachmentManager::new(Arc::clone(&store), "staff");

        let created = manager.resolve_for_create(None).await.unwrap();
        assert!(created.is_none());

        let unchanged = manager
            .resolve_for_update(created.as_deref(), None)
            .await
            .unwrap();
        assert!(unchanged.reference.is_none());

        let upload = png("cv.png", 64);
        let expected = upload.bytes.clone();
        let resolved = manager
            .resolve_for_update(None, Some(upload))
            .await
            .unwrap();
        let reference = resolved.reference.expect("reference set");
        assert_eq!(store.read(&reference).await.unwrap(), expected);
    }

    #[tokio::test]
    async fn test_rejected_upload_against_memory_backend() {
        let store = Arc::new(StorageService::in_memory().unwrap());
        let manager = AttachmentManager::new(store, "news");

        let err = manager
            .resolve_for_create(Some(Upload::new("run.exe", "application/x-msdownload", vec![1u8; 8])))
            .await
            .unwrap_err();
        assert!(err.storage_error().is_rejection());
    }

    #[test]
    fn test_public_url() {
        let (_, manager) = flaky();
        assert_eq!(
            manager.public_url(Some("news/a.png")).as_deref(),
            Some("https://files.test/news/a.png")
        );
        assert_eq!(manager.public_url(None), None);
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("photo.png"), "photo.png");
        assert_eq!(sanitize_filename("my photo (1).jpg"), "my_photo__1_.jpg");
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("C:\\Users\\guru\\foto.png"), "foto.png");
        assert_eq!(sanitize_filename(""), "file");
        assert_eq!(sanitize_filename(".."), "file");
    }

    proptest! {
        #[test]
        fn prop_storage_key_is_namespaced_and_safe(filename in ".{0,300}") {
            let key = generate_storage_key("gallery", &filename);
            let rest = key.strip_prefix("gallery/").expect("namespace prefix");
            prop_assert!(!rest.contains('/'));
            prop_assert!(rest.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_')));
            prop_assert!(rest.len() <= 36 + 1 + MAX_FILENAME_LEN);
        }

        #[test]
        fn prop_storage_keys_are_unique(filename in "[a-z]{1,12}\\.png") {
            prop_assert_ne!(
                generate_storage_key("news", &filename),
                generate_storage_key("news", &filename)
            );
        }

        #[test]
        fn prop_update_without_upload_is_noop(existing in proptest::option::of("[a-z0-9/._-]{1,40}")) {
            let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
            let (store, manager) = flaky();
            let resolved = runtime
                .block_on(manager.resolve_for_update(existing.as_deref(), None))
                .unwrap();
            prop_assert_eq!(resolved.reference, existing);
            prop_assert!(resolved.cleanup.is_none());
            prop_assert_eq!(store.len(), 0);
        }
    }
}
