//! Generic upload-coupled CRUD over attachable records.
//!
//! [`ContentService`] ties a [`RecordStore`] to an
//! [`AttachmentManager`](crate::attachment::AttachmentManager) so that the
//! record's file reference changes in lockstep with the row.

mod error;
mod service;
mod store;

pub use error::ContentError;
pub use service::{ContentService, Outcome};
pub use store::{AttachableRecord, RecordStore};
