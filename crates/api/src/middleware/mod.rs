//! Request middleware.

pub mod auth;

pub use auth::{AuthAdmin, auth_middleware};
