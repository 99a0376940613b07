//! `SeaORM` Entity for achievements table: student and school achievements.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use sekolah_core::content::AttachableRecord;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "achievements")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub level: Option<String>,
    pub year: Option<i32>,
    pub image: Option<String>,
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
        self.image.as_deref()
    }
}
