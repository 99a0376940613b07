//! `SeaORM` entities, one module per table.

pub mod prelude;

pub mod academic_calendars;
pub mod achievements;
pub mod admins;
pub mod alumni;
pub mod announcements;
pub mod contact_messages;
pub mod extracurriculars;
pub mod facilities;
pub mod galleries;
pub mod headmaster_messages;
pub mod hero_banners;
pub mod history_slides;
pub mod news;
pub mod organizational_structures;
pub mod programs;
pub mod school_profiles;
pub mod staff;
pub mod vision_missions;
