//! One [`ContentResource`](crate::repositories::ContentResource) per content table.
//!
//! Each unit struct names its table, its URL path, its file column and how
//! validated inputs become rows.

use sea_orm::ActiveValue::{self, Set};
use sea_orm::prelude::DateTimeWithTimeZone;

/// Primary-key and ordering queries shared by every content table.
macro_rules! table_queries {
    ($table:ident) => {
        fn find_by_id(id: i32) -> sea_orm::Select<$table::Entity> {
            <$table::Entity as sea_orm::EntityTrait>::find_by_id(id)
        }

        fn newest_first() -> sea_orm::Select<$table::Entity> {
            use sea_orm::QueryOrder;
            <$table::Entity as sea_orm::EntityTrait>::find()
                .order_by_desc($table::Column::CreatedAt)
                .order_by_desc($table::Column::Id)
        }

        fn delete_by_id(id: i32) -> sea_orm::DeleteMany<$table::Entity> {
            <$table::Entity as sea_orm::EntityTrait>::delete_by_id(id)
        }
    };
}

pub(crate) use table_queries;

/// Current time as stored in `TIMESTAMPTZ` columns.
fn now() -> DateTimeWithTimeZone {
    chrono::Utc::now().into()
}

/// Overwrite a column only when the update supplies a value.
fn set_if<T>(column: &mut ActiveValue<T>, value: Option<T>)
where
    T: Into<sea_orm::Value>,
{
    if let Some(value) = value {
        *column = Set(value);
    }
}

/// Same as [`set_if`] for nullable columns.
fn set_some_if<T>(column: &mut ActiveValue<Option<T>>, value: Option<T>)
where
    Option<T>: Into<sea_orm::Value>,
{
    if let Some(value) = value {
        *column = Set(Some(value));
    }
}

mod contact;
mod media;
mod people;
mod profile;
mod publications;

pub use contact::ContactMessages;
pub use media::{Facilities, Galleries, HeroBanners, HistorySlides, OrganizationalStructures, Programs};
pub use people::{Alumni, HeadmasterMessages, Staff};
pub use profile::{SchoolProfiles, VisionMissions};
pub use publications::{AcademicCalendars, Achievements, Announcements, Extracurriculars, News};
