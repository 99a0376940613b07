//! Admin authentication routes.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::{get, post},
};
use tracing::{error, info};

use crate::{AppState, error::ApiError, middleware::AuthAdmin};
use sekolah_core::auth::verify_password;
use sekolah_db::AdminRepository;
use sekolah_shared::{
    AppError,
    auth::{AdminInfo, LoginRequest, LoginResponse},
};

/// Routes reachable without a token.
pub fn routes() -> Router<AppState> {
    Router::new().route("/auth/login", post(login))
}

/// Routes behind the auth middleware.
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/auth/me", get(me))
}

fn invalid_credentials() -> ApiError {
    ApiError::auth("invalid_credentials", "Invalid username or password")
}

/// POST /auth/login - Authenticate an admin and return an access token.
async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(payload) = payload.map_err(|e| ApiError::invalid_request(e.body_text()))?;
    let admin_repo = AdminRepository::new(Arc::clone(&state.db));

    let admin = admin_repo
        .find_by_username(&payload.username)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    let Some(admin) = admin.filter(|admin| admin.is_active) else {
        info!(username = %payload.username, "Login attempt for unknown or inactive admin");
        return Err(invalid_credentials());
    };

    match verify_password(&payload.password, &admin.password_hash) {
        Ok(true) => {}
        Ok(false) => {
            info!(admin_id = %admin.id, "Failed login attempt - invalid password");
            return Err(invalid_credentials());
        }
        Err(e) => {
            error!(error = %e, admin_id = %admin.id, "Password verification error");
            return Err(AppError::Internal(e.to_string()).into());
        }
    }

    let access_token = state
        .jwt_service
        .generate_access_token(admin.id, &admin.username)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    info!(admin_id = %admin.id, "Admin logged in");

    Ok(Json(LoginResponse {
        access_token,
        token_type: "Bearer",
        expires_in: state.jwt_service.access_token_expires_in(),
        admin: AdminInfo {
            id: admin.id,
            username: admin.username,
            full_name: admin.full_name,
        },
    }))
}

/// GET /auth/me - The admin behind the current token.
async fn me(State(state): State<AppState>, auth: AuthAdmin) -> Result<Json<AdminInfo>, ApiError> {
    let admin = AdminRepository::new(Arc::clone(&state.db))
        .find_by_id(auth.admin_id())
        .await
        .map_err(|e| AppError::Database(e.to_string()))?
        .filter(|admin| admin.is_active)
        .ok_or(ApiError::auth("invalid_token", "Admin account is no longer active"))?;

    Ok(Json(AdminInfo {
        id: admin.id,
        username: admin.username,
        full_name: admin.full_name,
    }))
}
