//! Repository implementations for data access.

mod admin;
mod content;

pub use admin::AdminRepository;
pub use content::{ContentResource, SeaRecordStore};
