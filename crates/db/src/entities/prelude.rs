//! Entity type aliases.

pub use super::academic_calendars::Entity as AcademicCalendars;
pub use super::achievements::Entity as Achievements;
pub use super::admins::Entity as Admins;
pub use super::alumni::Entity as Alumni;
pub use super::announcements::Entity as Announcements;
pub use super::contact_messages::Entity as ContactMessages;
pub use super::extracurriculars::Entity as Extracurriculars;
pub use super::facilities::Entity as Facilities;
pub use super::galleries::Entity as Galleries;
pub use super::headmaster_messages::Entity as HeadmasterMessages;
pub use super::hero_banners::Entity as HeroBanners;
pub use super::history_slides::Entity as HistorySlides;
pub use super::news::Entity as News;
pub use super::organizational_structures::Entity as OrganizationalStructures;
pub use super::programs::Entity as Programs;
pub use super::school_profiles::Entity as SchoolProfiles;
pub use super::staff::Entity as Staff;
pub use super::vision_missions::Entity as VisionMissions;
