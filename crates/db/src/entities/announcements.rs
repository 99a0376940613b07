//! `SeaORM` Entity for announcements table: announcements with an optional attached document.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use sekolah_core::content::AttachableRecord;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "announcements")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub published_at: Option<DateTimeWithTimeZone>,
    pub attachment: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl AttachableRecord for Model {
    fn id(&self) -> i32 {
        self.id
    }

    fn attachment(&self) -> Option<&str> {
        self.attachment.as_deref()
    }
}
