//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes for every website resource
//! - Authentication middleware
//! - The multipart/JSON form extractor
//! - JSON error responses

pub mod error;
pub mod extractors;
pub mod middleware;
pub mod routes;

use axum::Router;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use sekolah_core::storage::StorageService;
use sekolah_shared::JwtService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
    /// JWT service for token operations.
    pub jwt_service: Arc<JwtService>,
    /// Storage service for uploaded files.
    pub storage: Arc<StorageService>,
}

/// Creates the main application router.
///
/// When files live on the local filesystem they are served from the
/// configured public path as well.
pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new().nest("/api/v1", routes::api_routes_with_state(state.clone()));

    if let Some((mount, root)) = state.storage.config().local_mount() {
        info!(mount = %mount, root = %root.display(), "Serving uploaded files");
        router = router.nest_service(&mount, ServeDir::new(root));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
