//! Storage service for uploaded images and documents using Apache OpenDAL.
//!
//! One [`StorageService`] is built at startup from configuration and injected
//! wherever blobs are written or removed. Supported backends:
//! - S3-compatible: Supabase Storage, Cloudflare R2, AWS S3, MinIO
//! - Local filesystem, served back by the API under `/uploads`
//! - In-memory (tests, throwaway dev runs)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         BlobStore                                │
//! │            put / read / delete / public_url                      │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                      Apache OpenDAL                              │
//! │ op.write_with("key", data)  │ op.stat("key")                     │
//! │ op.read("key")              │ op.delete("key")                   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

mod backend;
mod config;
mod error;
mod service;

pub use backend::{BlobStore, Deletion};
pub use config::{StorageConfig, StorageProvider};
pub use error::StorageError;
pub use service::StorageService;
