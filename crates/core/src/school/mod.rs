//! Typed, validated inputs for every school-website resource.
//!
//! Create inputs carry the required fields; update inputs are partial, with
//! every field optional. Numeric and boolean fields accept either JSON values
//! or their string form, since multipart forms only carry text.

mod contact;
mod media;
mod people;
mod profile;
mod publications;

pub use contact::{CreateContactMessageInput, UpdateContactMessageInput};
pub use media::{
    CreateFacilityInput, CreateGalleryInput, CreateHeroBannerInput, CreateHistorySlideInput,
    CreateOrganizationalStructureInput, CreateProgramInput, UpdateFacilityInput,
    UpdateGalleryInput, UpdateHeroBannerInput, UpdateHistorySlideInput,
    UpdateOrganizationalStructureInput, UpdateProgramInput,
};
pub use people::{
    CreateAlumnusInput, CreateHeadmasterMessageInput, CreateStaffInput, UpdateAlumnusInput,
    UpdateHeadmasterMessageInput, UpdateStaffInput,
};
pub use profile::{
    CreateSchoolProfileInput, CreateVisionMissionInput, UpdateSchoolProfileInput,
    UpdateVisionMissionInput,
};
pub use publications::{
    CreateAcademicCalendarInput, CreateAchievementInput, CreateAnnouncementInput,
    CreateExtracurricularInput, CreateNewsInput, UpdateAcademicCalendarInput,
    UpdateAchievementInput, UpdateAnnouncementInput, UpdateExtracurricularInput, UpdateNewsInput,
};
