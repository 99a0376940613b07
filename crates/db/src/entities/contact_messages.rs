//! `SeaORM` Entity for contact_messages table: messages from the public contact form.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use sekolah_core::content::AttachableRecord;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contact_messages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub is_read: bool,
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
        None
    }
}
