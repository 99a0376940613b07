//! Content service implementation.

use std::sync::Arc;

use tracing::{info, warn};

use sekolah_shared::types::{PageRequest, PageResponse};

use super::error::ContentError;
use super::store::{AttachableRecord, RecordStore};
use crate::attachment::{AttachmentManager, CleanupFailure, Upload};
use crate::storage::BlobStore;

/// Result of a mutation together with any non-fatal cleanup failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<T> {
    /// Created, updated or deleted record.
    pub record: T,
    /// Blob that could not be removed.
    pub cleanup: Option<CleanupFailure>,
}

impl<T> Outcome<T> {
    fn clean(record: T) -> Self {
        Self {
            record,
            cleanup: None,
        }
    }
}

/// CRUD over one kind of attachable record.
pub struct ContentService<R: RecordStore, S: BlobStore> {
    records: R,
    attachments: AttachmentManager<S>,
}

impl<R: RecordStore, S: BlobStore> ContentService<R, S> {
    /// Create a new content service.
    #[must_use]
    pub fn new(records: R, store: Arc<S>) -> Self {
        let attachments = AttachmentManager::new(store, records.resource());
        Self {
            records,
            attachments,
        }
    }

    /// Resource name.
    #[must_use]
    pub fn resource(&self) -> &'static str {
        self.records.resource()
    }

    /// List one page of records.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository fails.
    pub async fn list(&self, page: PageRequest) -> Result<PageResponse<R::Record>, ContentError> {
        self.records.list(page.normalized()).await
    }

    /// Get a record by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if there is no such record.
    pub async fn get(&self, id: i32) -> Result<R::Record, ContentError> {
        self.records
            .find_by_id(id)
            .await?
            .ok_or_else(|| ContentError::not_found(self.resource(), id))
    }

    /// Create a record, storing its upload first.
    ///
    /// If the insert fails the freshly stored blob is removed again.
    ///
    /// # Errors
    ///
    /// Returns an error if the upload is rejected or the insert fails.
    pub async fn create(
        &self,
        input: R::Create,
        upload: Option<Upload>,
    ) -> Result<Outcome<R::Record>, ContentError> {
        self.ensure_accepts(upload.as_ref())?;

        let reference = self.attachments.resolve_for_create(upload).await?;

        match self.records.create(input, reference.clone()).await {
            Ok(record) => {
                info!(
                    resource = self.resource(),
                    id = record.id(),
                    reference = record.attachment(),
                    "created record"
                );
                Ok(Outcome::clean(record))
            }
            Err(e) => {
                if let Some(reference) = reference {
                    self.attachments.discard(&reference).await;
                }
                Err(e)
            }
        }
    }

    /// Update a record.
    ///
    /// With an upload, the new blob is stored, the row is switched to it, and
    /// only then is the superseded blob deleted. Without one the reference is
    /// left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`, an upload error or a repository error. In every
    /// error case the stored record and its blob are unchanged.
    pub async fn update(
        &self,
        id: i32,
        input: R::Update,
        upload: Option<Upload>,
    ) -> Result<Outcome<R::Record>, ContentError> {
        self.ensure_accepts(upload.as_ref())?;

        let current = self.get(id).await?;
        let staged = self
            .attachments
            .stage_update(current.attachment(), upload)
            .await?;
        let reference = staged.reference().map(str::to_owned);

        match self.records.update(current, input, reference).await {
            Ok(record) => {
                let cleanup = self.attachments.commit(staged).await;
                info!(
                    resource = self.resource(),
                    id,
                    reference = record.attachment(),
                    "updated record"
                );
                Ok(Outcome { record, cleanup })
            }
            Err(e) => {
                self.attachments.abandon(staged).await;
                Err(e)
            }
        }
    }

    /// Delete a record and then its blob.
    ///
    /// A blob that cannot be deleted is reported in the outcome; the record
    /// is gone regardless.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` or a repository error.
    pub async fn delete(&self, id: i32) -> Result<Outcome<R::Record>, ContentError> {
        let current = self.get(id).await?;

        if !self.records.delete(id).await? {
            return Err(ContentError::not_found(self.resource(), id));
        }

        let cleanup = match self
            .attachments
            .resolve_for_delete(current.attachment())
            .await
        {
            Ok(()) => None,
            Err(e) => {
                warn!(resource = self.resource(), id, error = %e, "record deleted but its file was not");
                Some(CleanupFailure::new(
                    current.attachment().unwrap_or_default(),
                    e.storage_error(),
                ))
            }
        };

        info!(resource = self.resource(), id, "deleted record");
        Ok(Outcome {
            record: current,
            cleanup,
        })
    }

    /// Public URL of a stored reference.
    #[must_use]
    pub fn public_url(&self, reference: Option<&str>) -> Option<String> {
        self.attachments.public_url(reference)
    }

    fn ensure_accepts(&self, upload: Option<&Upload>) -> Result<(), ContentError> {
        if upload.is_some() && !self.records.accepts_attachment() {
            return Err(ContentError::UnexpectedFile {
                resource: self.resource(),
            });
        }
        Ok(())
    }
}
