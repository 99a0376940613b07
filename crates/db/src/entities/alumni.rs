//! `SeaORM` Entity for alumni table: alumni testimonials.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use sekolah_core::content::AttachableRecord;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "alumni")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub graduation_year: i32,
    pub occupation: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub testimony: Option<String>,
    pub photo: Option<String>,
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
        self.photo.as_deref()
    }
}
