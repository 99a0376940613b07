//! Attachment lifecycle for records that own at most one stored file.
//!
//! The manager decides what happens to a record's file reference when the
//! record is created, updated or deleted:
//! - create stores the optional upload
//! - update stores the new upload first and only then drops the superseded blob
//! - delete removes the blob, treating "already gone" as success
//!
//! It never touches the record store itself.

mod error;
mod service;
mod types;

pub use error::AttachmentError;
pub use service::{AttachmentManager, generate_storage_key, sanitize_filename};
pub use types::{CleanupFailure, ResolvedAttachment, StagedAttachment, Upload};
