//! Generic SeaORM record store for every content resource.

use std::marker::PhantomData;
use std::sync::Arc;

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, DeleteMany, EntityTrait,
    FromQueryResult, IntoActiveModel, ModelTrait, PaginatorTrait, Select,
};
use serde::Serialize;

use sekolah_core::content::{AttachableRecord, ContentError, RecordStore};
use sekolah_shared::types::{PageRequest, PageResponse};

/// Binds one content table to its inputs and queries.
///
/// Implemented by the unit structs in [`crate::resources`]; the API layer is
/// generic over this trait, so adding a resource means adding one impl.
pub trait ContentResource: Send + Sync + 'static {
    /// Table entity.
    type Entity: EntityTrait<Model = Self::Model> + Send + Sync;
    /// Row type.
    type Model: ModelTrait<Entity = Self::Entity>
        + FromQueryResult
        + IntoActiveModel<Self::ActiveModel>
        + AttachableRecord
        + Serialize
        + Clone
        + Send
        + Sync;
    /// Mutable row type.
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity> + ActiveModelBehavior + Send + Sync;
    /// Create input.
    type Create: Send;
    /// Partial update input.
    type Update: Send;

    /// URL path segment, also the storage key prefix.
    const PATH: &'static str;
    /// Column holding the storage reference, if the table has one.
    const ATTACHMENT_FIELD: Option<&'static str>;

    /// Select a single row by primary key.
    fn find_by_id(id: i32) -> Select<Self::Entity>;

    /// Select all rows, newest first.
    fn newest_first() -> Select<Self::Entity>;

    /// Delete a single row by primary key.
    fn delete_by_id(id: i32) -> DeleteMany<Self::Entity>;

    /// Build the row to insert.
    fn new_record(input: Self::Create, attachment: Option<String>) -> Self::ActiveModel;

    /// Apply a partial update. Must always refresh `updated_at`.
    fn apply_update(
        model: Self::Model,
        input: Self::Update,
        attachment: Option<String>,
    ) -> Self::ActiveModel;
}

/// [`RecordStore`] backed by the table of `R`.
pub struct SeaRecordStore<R> {
    db: Arc<DatabaseConnection>,
    resource: PhantomData<fn() -> R>,
}

impl<R> SeaRecordStore<R> {
    /// Create a new record store.
    #[must_use]
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            db,
            resource: PhantomData,
        }
    }
}

impl<R> Clone for SeaRecordStore<R> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.db))
    }
}

fn repository_error(err: sea_orm::DbErr) -> ContentError {
    tracing::warn!(error = %err, "database query failed");
    ContentError::repository(err.to_string())
}

impl<R: ContentResource> RecordStore for SeaRecordStore<R> {
    type Record = R::Model;
    type Create = R::Create;
    type Update = R::Update;

    fn resource(&self) -> &'static str {
        R::PATH
    }

    fn accepts_attachment(&self) -> bool {
        R::ATTACHMENT_FIELD.is_some()
    }

    async fn list(&self, page: PageRequest) -> Result<PageResponse<R::Model>, ContentError> {
        let paginator = R::newest_first().paginate(self.db.as_ref(), page.limit());

        let total = paginator.num_items().await.map_err(repository_error)?;
        let data = paginator
            .fetch_page(page.index())
            .await
            .map_err(repository_error)?;

        Ok(PageResponse::new(data, page, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<R::Model>, ContentError> {
        R::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(repository_error)
    }

    async fn create(
        &self,
        input: R::Create,
        attachment: Option<String>,
    ) -> Result<R::Model, ContentError> {
        R::new_record(input, attachment)
            .insert(self.db.as_ref())
            .await
            .map_err(repository_error)
    }

    async fn update(
        &self,
        current: R::Model,
        input: R::Update,
        attachment: Option<String>,
    ) -> Result<R::Model, ContentError> {
        R::apply_update(current, input, attachment)
            .update(self.db.as_ref())
            .await
            .map_err(repository_error)
    }

    async fn delete(&self, id: i32) -> Result<bool, ContentError> {
        let result = R::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(repository_error)?;

        tracing::debug!(
            resource = R::PATH,
            id,
            rows = result.rows_affected,
            "deleted content row"
        );
        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value};

    use super::*;
    use crate::entities::news;
    use crate::resources::News;
    use sekolah_core::school::CreateNewsInput;

    fn row(id: i32, image: Option<&str>) -> news::Model {
        let now = chrono::Utc::now().into();
        news::Model {
            id,
            title: format!("Berita {id}"),
            content: "Isi berita".to_string(),
            author: None,
            published_at: None,
            image: image.map(ToString::to_string),
            created_at: now,
            updated_at: now,
        }
    }

    fn store(db: MockDatabase) -> SeaRecordStore<News> {
        SeaRecordStore::new(Arc::new(db.into_connection()))
    }

    #[test]
    fn test_resource_metadata() {
        let store = store(MockDatabase::new(DatabaseBackend::Postgres));
        assert_eq!(store.resource(), "news");
        assert!(store.accepts_attachment());
    }

    #[tokio::test]
    async fn test_list_reports_total_and_page() {
        let count = BTreeMap::from([("num_items", Value::BigInt(Some(3)))]);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[count]])
            .append_query_results([vec![row(3, None), row(2, Some("news/b.png"))]]);

        let page = store(db)
            .list(PageRequest {
                page: 1,
                per_page: 2,
            })
            .await
            .unwrap();

        assert_eq!(page.data.len(), 2);
        assert_eq!(page.data[0].id, 3);
        assert_eq!(page.meta.total, 3);
        assert_eq!(page.meta.per_page, 2);
    }

    #[tokio::test]
    async fn test_find_by_id_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<news::Model>::new()]);

        assert!(store(db).find_by_id(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_stores_reference() {
        let inserted = row(1, Some("news/0190-photo.png"));
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![inserted.clone()]]);

        let input = CreateNewsInput {
            title: inserted.title.clone(),
            content: inserted.content.clone(),
            author: None,
            published_at: None,
        };
        let created = store(db)
            .create(input, Some("news/0190-photo.png".to_string()))
            .await
            .unwrap();

        assert_eq!(created.attachment(), Some("news/0190-photo.png"));
    }

    #[tokio::test]
    async fn test_delete_reports_missing_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ]);
        let store = store(db);

        assert!(store.delete(7).await.unwrap());
        assert!(!store.delete(7).await.unwrap());
    }

    #[tokio::test]
    async fn test_database_failure_maps_to_repository_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([sea_orm::DbErr::Custom("connection reset".to_string())]);

        let err = store(db).find_by_id(1).await.unwrap_err();
        assert!(matches!(err, ContentError::Repository(msg) if msg.contains("connection reset")));
    }
}
