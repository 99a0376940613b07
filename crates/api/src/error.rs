//! JSON error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

use sekolah_core::content::ContentError;
use sekolah_shared::AppError;

/// Handler error rendered as `{ "error": code, "message": text }`.
#[derive(Debug)]
pub enum ApiError {
    /// Domain error with its own status and code.
    App(AppError),
    /// Authentication failure with an explicit code.
    Auth {
        /// Machine-readable code, e.g. `token_expired`.
        code: &'static str,
        /// Human-readable message.
        message: &'static str,
    },
}

impl ApiError {
    /// 401 with the given code.
    #[must_use]
    pub const fn auth(code: &'static str, message: &'static str) -> Self {
        Self::Auth { code, message }
    }

    /// 400 `invalid_request`.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::App(AppError::InvalidRequest(message.into()))
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self::App(err)
    }
}

impl From<ContentError> for ApiError {
    fn from(err: ContentError) -> Self {
        Self::App(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::App(err) => {
                let status = StatusCode::from_u16(err.status_code())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                if status.is_server_error() {
                    error!(error = %err, "request failed");
                }
                (
                    status,
                    Json(json!({
                        "error": err.error_code(),
                        "message": err.public_message(),
                    })),
                )
                    .into_response()
            }
            Self::Auth { code, message } => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": code, "message": message })),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_database_error_is_masked() {
        let response =
            ApiError::from(AppError::Database("relation \"news\" does not exist".into()))
                .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "internal_error");
        assert_eq!(body["message"], "An error occurred");
    }

    #[tokio::test]
    async fn test_not_found_keeps_message() {
        let response = ApiError::from(ContentError::not_found("news", 9)).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"], "not_found");
        assert_eq!(body["message"], "news 9 not found");
    }

    #[tokio::test]
    async fn test_auth_error_shape() {
        let response = ApiError::auth("token_expired", "Token has expired").into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["error"], "token_expired");
    }
}
