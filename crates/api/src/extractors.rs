//! Request extractors.

use axum::{
    Json,
    extract::{FromRequest, Multipart, Request, multipart::MultipartError},
    http::{StatusCode, header::CONTENT_TYPE},
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use validator::Validate;

use sekolah_core::attachment::Upload;
use sekolah_shared::AppError;

use crate::error::ApiError;

/// Validated create/update input plus the optional uploaded file.
///
/// Accepts `multipart/form-data` (text fields and at most one file part) or
/// `application/json` (never carries a file). Empty multipart text fields are
/// treated as absent, and a file part with neither name nor content means
/// "no file".
#[derive(Debug)]
pub struct ContentForm<T> {
    /// Parsed and validated fields.
    pub input: T,
    /// File part, if one was sent.
    pub upload: Option<Upload>,
}

impl<S, T> FromRequest<S> for ContentForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(is_form_data);

        let (input, upload) = if is_multipart {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| ApiError::invalid_request(e.body_text()))?;
            let (fields, upload) = read_multipart(multipart).await?;
            let input = serde_json::from_value(Value::Object(fields))
                .map_err(|e| body_error(e.to_string()))?;
            (input, upload)
        } else {
            let Json(input) = Json::<T>::from_request(req, state).await.map_err(|e| {
                if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    ApiError::from(AppError::PayloadTooLarge(e.body_text()))
                } else {
                    body_error(e.body_text())
                }
            })?;
            (input, None)
        };

        input
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        Ok(Self { input, upload })
    }
}

async fn read_multipart(
    mut multipart: Multipart,
) -> Result<(Map<String, Value>, Option<Upload>), ApiError> {
    let mut fields = Map::new();
    let mut upload = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if let Some(filename) = field.file_name().map(str::to_owned) {
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_owned();
            let bytes = field.bytes().await.map_err(multipart_error)?;

            // Browsers send an empty part for an untouched file input.
            if filename.is_empty() && bytes.is_empty() {
                continue;
            }
            if upload.is_some() {
                return Err(ApiError::invalid_request(
                    "at most one file may be uploaded per request",
                ));
            }
            upload = Some(Upload::new(filename, content_type, bytes));
        } else if let Some(name) = field.name().map(str::to_owned) {
            let text = field.text().await.map_err(multipart_error)?;
            if !text.is_empty() {
                fields.insert(name, Value::String(text));
            }
        }
    }

    Ok((fields, upload))
}

fn is_form_data(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case("multipart/form-data"))
}

/// A required field that was left out (or sent blank in a form) fails validation;
/// anything else is an unreadable body.
fn body_error(message: String) -> ApiError {
    if message.contains("missing field") {
        AppError::Validation(message).into()
    } else {
        ApiError::invalid_request(message)
    }
}

fn multipart_error(err: MultipartError) -> ApiError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text()).into()
    } else {
        ApiError::invalid_request(err.body_text())
    }
}
