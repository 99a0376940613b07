//! Core logic for the Sekolah CMS backend.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies.
//!
//! # Modules
//!
//! - `storage` - Blob storage capability and its OpenDAL implementation
//! - `attachment` - Lifecycle of the single optional file a record owns
//! - `content` - Generic upload-coupled CRUD over attachable records
//! - `school` - Validated inputs for every website resource
//! - `auth` - Admin password hashing

pub mod attachment;
pub mod auth;
pub mod content;
pub mod school;
pub mod storage;
