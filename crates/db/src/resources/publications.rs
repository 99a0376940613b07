//! News, announcements, achievements, activities and calendars.

use sea_orm::ActiveValue::{NotSet, Set};

use sekolah_core::school::{
    CreateAcademicCalendarInput, CreateAchievementInput, CreateAnnouncementInput,
    CreateExtracurricularInput, CreateNewsInput, UpdateAcademicCalendarInput,
    UpdateAchievementInput, UpdateAnnouncementInput, UpdateExtracurricularInput, UpdateNewsInput,
};

use super::{now, set_if, set_some_if, table_queries};
use crate::entities::{academic_calendars, achievements, announcements, extracurriculars, news};
use crate::repositories::ContentResource;

/// `/news`
pub struct News;

impl ContentResource for News {
    type Entity = news::Entity;
    type Model = news::Model;
    type ActiveModel = news::ActiveModel;
    type Create = CreateNewsInput;
    type Update = UpdateNewsInput;

    const PATH: &'static str = "news";
    const ATTACHMENT_FIELD: Option<&'static str> = Some("image");

    table_queries!(news);

    fn new_record(input: CreateNewsInput, attachment: Option<String>) -> news::ActiveModel {
        let timestamp = now();
        news::ActiveModel {
            id: NotSet,
            title: Set(input.title),
            content: Set(input.content),
            author: Set(input.author),
            published_at: Set(input.published_at),
            image: Set(attachment),
            created_at: Set(timestamp),
            updated_at: Set(timestamp),
        }
    }

    fn apply_update(
        model: news::Model,
        input: UpdateNewsInput,
        attachment: Option<String>,
    ) -> news::ActiveModel {
        let mut active: news::ActiveModel = model.into();
        set_if(&mut active.title, input.title);
        set_if(&mut active.content, input.content);
        set_some_if(&mut active.author, input.author);
        set_some_if(&mut active.published_at, input.published_at);
        active.image = Set(attachment);
        active.updated_at = Set(now());
        active
    }
}

/// `/announcements`
pub struct Announcements;

impl ContentResource for Announcements {
    type Entity = announcements::Entity;
    type Model = announcements::Model;
    type ActiveModel = announcements::ActiveModel;
    type Create = CreateAnnouncementInput;
    type Update = UpdateAnnouncementInput;

    const PATH: &'static str = "announcements";
    const ATTACHMENT_FIELD: Option<&'static str> = Some("attachment");

    table_queries!(announcements);

    fn new_record(
        input: CreateAnnouncementInput,
        attachment: Option<String>,
    ) -> announcements::ActiveModel {
        let timestamp = now();
        announcements::ActiveModel {
            id: NotSet,
            title: Set(input.title),
            content: Set(input.content),
            published_at: Set(input.published_at),
            attachment: Set(attachment),
            created_at: Set(timestamp),
            updated_at: Set(timestamp),
        }
    }

    fn apply_update(
        model: announcements::Model,
        input: UpdateAnnouncementInput,
        attachment: Option<String>,
    ) -> announcements::ActiveModel {
        let mut active: announcements::ActiveModel = model.into();
        set_if(&mut active.title, input.title);
        set_if(&mut active.content, input.content);
        set_some_if(&mut active.published_at, input.published_at);
        active.attachment = Set(attachment);
        active.updated_at = Set(now());
        active
    }
}

/// `/achievements`
pub struct Achievements;

impl ContentResource for Achievements {
    type Entity = achievements::Entity;
    type Model = achievements::Model;
    type ActiveModel = achievements::ActiveModel;
    type Create = CreateAchievementInput;
    type Update = UpdateAchievementInput;

    const PATH: &'static str = "achievements";
    const ATTACHMENT_FIELD: Option<&'static str> = Some("image");

    table_queries!(achievements);

    fn new_record(
        input: CreateAchievementInput,
        attachment: Option<String>,
    ) -> achievements::ActiveModel {
        let timestamp = now();
        achievements::ActiveModel {
            id: NotSet,
            title: Set(input.title),
            description: Set(input.description),
            level: Set(input.level),
            year: Set(input.year),
            image: Set(attachment),
            created_at: Set(timestamp),
            updated_at: Set(timestamp),
        }
    }

    fn apply_update(
        model: achievements::Model,
        input: UpdateAchievementInput,
        attachment: Option<String>,
    ) -> achievements::ActiveModel {
        let mut active: achievements::ActiveModel = model.into();
        set_if(&mut active.title, input.title);
        set_some_if(&mut active.description, input.description);
        set_some_if(&mut active.level, input.level);
        set_some_if(&mut active.year, input.year);
        active.image = Set(attachment);
        active.updated_at = Set(now());
        active
    }
}

/// `/extracurriculars`
pub struct Extracurriculars;

impl ContentResource for Extracurriculars {
    type Entity = extracurriculars::Entity;
    type Model = extracurriculars::Model;
    type ActiveModel = extracurriculars::ActiveModel;
    type Create = CreateExtracurricularInput;
    type Update = UpdateExtracurricularInput;

    const PATH: &'static str = "extracurriculars";
    const ATTACHMENT_FIELD: Option<&'static str> = Some("image");

    table_queries!(extracurriculars);

    fn new_record(
        input: CreateExtracurricularInput,
        attachment: Option<String>,
    ) -> extracurriculars::ActiveModel {
        let timestamp = now();
        extracurriculars::ActiveModel {
            id: NotSet,
            name: Set(input.name),
            description: Set(input.description),
            coach: Set(input.coach),
            schedule: Set(input.schedule),
            image: Set(attachment),
            created_at: Set(timestamp),
            updated_at: Set(timestamp),
        }
    }

    fn apply_update(
        model: extracurriculars::Model,
        input: UpdateExtracurricularInput,
        attachment: Option<String>,
    ) -> extracurriculars::ActiveModel {
        let mut active: extracurriculars::ActiveModel = model.into();
        set_if(&mut active.name, input.name);
        set_some_if(&mut active.description, input.description);
        set_some_if(&mut active.coach, input.coach);
        set_some_if(&mut active.schedule, input.schedule);
        active.image = Set(attachment);
        active.updated_at = Set(now());
        active
    }
}

/// `/academic-calendars`
pub struct AcademicCalendars;

impl ContentResource for AcademicCalendars {
    type Entity = academic_calendars::Entity;
    type Model = academic_calendars::Model;
    type ActiveModel = academic_calendars::ActiveModel;
    type Create = CreateAcademicCalendarInput;
    type Update = UpdateAcademicCalendarInput;

    const PATH: &'static str = "academic-calendars";
    const ATTACHMENT_FIELD: Option<&'static str> = Some("document");

    table_queries!(academic_calendars);

    fn new_record(
        input: CreateAcademicCalendarInput,
        attachment: Option<String>,
    ) -> academic_calendars::ActiveModel {
        let timestamp = now();
        academic_calendars::ActiveModel {
            id: NotSet,
            title: Set(input.title),
            academic_year: Set(input.academic_year),
            description: Set(input.description),
            document: Set(attachment),
            created_at: Set(timestamp),
            updated_at: Set(timestamp),
        }
    }

    fn apply_update(
        model: academic_calendars::Model,
        input: UpdateAcademicCalendarInput,
        attachment: Option<String>,
    ) -> academic_calendars::ActiveModel {
        let mut active: academic_calendars::ActiveModel = model.into();
        set_if(&mut active.title, input.title);
        set_if(&mut active.academic_year, input.academic_year);
        set_some_if(&mut active.description, input.description);
        active.document = Set(attachment);
        active.updated_at = Set(now());
        active
    }
}
