//! Record store capability.

use std::future::Future;

use sekolah_shared::types::{PageRequest, PageResponse};

use super::error::ContentError;

/// A row owning at most one stored file.
pub trait AttachableRecord {
    /// Primary key assigned by the record store.
    fn id(&self) -> i32;

    /// Storage reference of the owned file, if any.
    fn attachment(&self) -> Option<&str>;
}

/// Typed persistence for one kind of attachable record.
///
/// Implemented by the db crate; every mutation affects exactly one row.
pub trait RecordStore: Send + Sync {
    /// Stored row.
    type Record: AttachableRecord + Send + Sync;
    /// Validated input of a create.
    type Create: Send;
    /// Validated partial input of an update.
    type Update: Send;

    /// Resource name, also the storage key prefix.
    fn resource(&self) -> &'static str;

    /// Whether the record has a file column at all.
    fn accepts_attachment(&self) -> bool;

    /// One page of records, newest first.
    fn list(
        &self,
        page: PageRequest,
    ) -> impl Future<Output = Result<PageResponse<Self::Record>, ContentError>> + Send;

    /// Find a record by id.
    fn find_by_id(
        &self,
        id: i32,
    ) -> impl Future<Output = Result<Option<Self::Record>, ContentError>> + Send;

    /// Insert a record carrying `attachment`.
    fn create(
        &self,
        input: Self::Create,
        attachment: Option<String>,
    ) -> impl Future<Output = Result<Self::Record, ContentError>> + Send;

    /// Apply `input` to `current` and set its reference to `attachment`.
    fn update(
        &self,
        current: Self::Record,
        input: Self::Update,
        attachment: Option<String>,
    ) -> impl Future<Output = Result<Self::Record, ContentError>> + Send;

    /// Delete a record by id. Returns `false` if no row matched.
    fn delete(&self, id: i32) -> impl Future<Output = Result<bool, ContentError>> + Send;
}
