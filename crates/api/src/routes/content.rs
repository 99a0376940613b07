//! Generic CRUD handlers shared by every content resource.
//!
//! Each handler is instantiated once per [`ContentResource`]; the resource
//! decides the path, the inputs and whether a file column exists.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    routing::{get, post},
};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use validator::Validate;

use crate::{AppState, error::ApiError, extractors::ContentForm};
use sekolah_core::attachment::CleanupFailure;
use sekolah_core::content::{AttachableRecord, ContentService};
use sekolah_core::storage::StorageService;
use sekolah_db::{ContentResource, SeaRecordStore};
use sekolah_shared::{AppError, types::PageRequest};

type Service<R> = ContentService<SeaRecordStore<R>, StorageService>;

fn service<R: ContentResource>(state: &AppState) -> Service<R> {
    ContentService::new(
        SeaRecordStore::new(Arc::clone(&state.db)),
        Arc::clone(&state.storage),
    )
}

fn collection_path<R: ContentResource>() -> String {
    format!("/{}", R::PATH)
}

fn item_path<R: ContentResource>() -> String {
    format!("/{}/{{id}}", R::PATH)
}

/// Parse a path id; only positive integers name a record.
fn parse_id(raw: &str) -> Result<i32, ApiError> {
    match raw.parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::InvalidId(format!("'{raw}' is not a valid id")).into()),
    }
}

/// Serialize a record and add `{column}_url` next to its file column.
fn render<R: ContentResource>(service: &Service<R>, record: &R::Model) -> Result<Value, ApiError> {
    let mut value =
        serde_json::to_value(record).map_err(|e| AppError::Internal(e.to_string()))?;

    if let (Some(column), Value::Object(fields)) = (R::ATTACHMENT_FIELD, &mut value) {
        let url = service.public_url(record.attachment());
        fields.insert(format!("{column}_url"), url.map_or(Value::Null, Value::String));
    }

    Ok(value)
}

fn with_warning(mut body: Value, cleanup: Option<CleanupFailure>) -> Value {
    if let Some(warning) = cleanup {
        body["warning"] = json!(warning);
    }
    body
}

/// GET /{path}
async fn list<R: ContentResource>(
    State(state): State<AppState>,
    query: Result<Query<PageRequest>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let Query(page) = query.map_err(|e| ApiError::invalid_request(e.body_text()))?;
    let service = service::<R>(&state);

    let page = service.list(page).await?;
    let data = page
        .data
        .iter()
        .map(|record| render::<R>(&service, record))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(json!({ "data": data, "meta": page.meta })))
}

/// GET /{path}/{id}
async fn show<R: ContentResource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&id)?;
    let service = service::<R>(&state);

    let record = service.get(id).await?;

    Ok(Json(json!({ "data": render::<R>(&service, &record)? })))
}

/// POST /{path}
async fn create<R>(
    State(state): State<AppState>,
    ContentForm { input, upload }: ContentForm<R::Create>,
) -> Result<(StatusCode, Json<Value>), ApiError>
where
    R: ContentResource,
    R::Create: DeserializeOwned + Validate,
{
    let service = service::<R>(&state);

    let outcome = service.create(input, upload).await?;
    let body = json!({ "data": render::<R>(&service, &outcome.record)? });

    Ok((StatusCode::CREATED, Json(with_warning(body, outcome.cleanup))))
}

/// PUT /{path}/{id}
async fn update<R>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ContentForm { input, upload }: ContentForm<R::Update>,
) -> Result<Json<Value>, ApiError>
where
    R: ContentResource,
    R::Update: DeserializeOwned + Validate,
{
    let id = parse_id(&id)?;
    let service = service::<R>(&state);

    let outcome = service.update(id, input, upload).await?;
    let body = json!({ "data": render::<R>(&service, &outcome.record)? });

    Ok(Json(with_warning(body, outcome.cleanup)))
}

/// DELETE /{path}/{id}
async fn destroy<R: ContentResource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&id)?;

    let outcome = service::<R>(&state).delete(id).await?;

    Ok(Json(with_warning(json!({ "deleted": true }), outcome.cleanup)))
}

/// List and show.
pub fn read_routes<R: ContentResource>() -> Router<AppState> {
    Router::new()
        .route(&collection_path::<R>(), get(list::<R>))
        .route(&item_path::<R>(), get(show::<R>))
}

/// Create only.
pub fn create_route<R>() -> Router<AppState>
where
    R: ContentResource,
    R::Create: DeserializeOwned + Validate,
{
    Router::new().route(&collection_path::<R>(), post(create::<R>))
}

/// Update and delete.
pub fn edit_routes<R>() -> Router<AppState>
where
    R: ContentResource,
    R::Update: DeserializeOwned + Validate,
{
    Router::new().route(
        &item_path::<R>(),
        axum::routing::put(update::<R>).delete(destroy::<R>),
    )
}

/// Create, update and delete.
pub fn write_routes<R>() -> Router<AppState>
where
    R: ContentResource,
    R::Create: DeserializeOwned + Validate,
    R::Update: DeserializeOwned + Validate,
{
    create_route::<R>().merge(edit_routes::<R>())
}
