//! Dated publications: news, announcements, achievements, calendars, activities.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use serde_with::{DisplayFromStr, PickFirst, serde_as};
use validator::Validate;

/// Input for creating a news article.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateNewsInput {
    /// Headline.
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    /// Article body.
    #[validate(length(min = 1, max = 20000))]
    pub content: String,
    /// Byline.
    #[validate(length(min = 1, max = 255))]
    pub author: Option<String>,
    /// Publication timestamp, RFC 3339.
    pub published_at: Option<DateTime<FixedOffset>>,
}

/// Input for updating a news article.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateNewsInput {
    /// Headline.
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    /// Article body.
    #[validate(length(min = 1, max = 20000))]
    pub content: Option<String>,
    /// Byline.
    #[validate(length(min = 1, max = 255))]
    pub author: Option<String>,
    /// Publication timestamp, RFC 3339.
    pub published_at: Option<DateTime<FixedOffset>>,
}

/// Input for creating an announcement.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAnnouncementInput {
    /// Headline.
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    /// Announcement text.
    #[validate(length(min = 1, max = 20000))]
    pub content: String,
    /// Publication timestamp, RFC 3339.
    pub published_at: Option<DateTime<FixedOffset>>,
}

/// Input for updating an announcement.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateAnnouncementInput {
    /// Headline.
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    /// Announcement text.
    #[validate(length(min = 1, max = 20000))]
    pub content: Option<String>,
    /// Publication timestamp, RFC 3339.
    pub published_at: Option<DateTime<FixedOffset>>,
}

/// Input for creating an achievement.
#[serde_as]
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAchievementInput {
    /// Competition or award.
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    /// Details.
    #[validate(length(min = 1, max = 20000))]
    pub description: Option<String>,
    /// Level reached, e.g. "provincial".
    #[validate(length(min = 1, max = 255))]
    pub level: Option<String>,
    /// Year awarded.
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[validate(range(min = 1900, max = 2100))]
    pub year: Option<i32>,
}

/// Input for updating an achievement.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateAchievementInput {
    /// Competition or award.
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    /// Details.
    #[validate(length(min = 1, max = 20000))]
    pub description: Option<String>,
    /// Level reached.
    #[validate(length(min = 1, max = 255))]
    pub level: Option<String>,
    /// Year awarded.
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[validate(range(min = 1900, max = 2100))]
    pub year: Option<i32>,
}

/// Input for creating an extracurricular activity.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateExtracurricularInput {
    /// Activity name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Details.
    #[validate(length(min = 1, max = 20000))]
    pub description: Option<String>,
    /// Supervising coach.
    #[validate(length(min = 1, max = 255))]
    pub coach: Option<String>,
    /// Free-form schedule, e.g. "Friday 15:00".
    #[validate(length(min = 1, max = 255))]
    pub schedule: Option<String>,
}

/// Input for updating an extracurricular activity.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateExtracurricularInput {
    /// Activity name.
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    /// Details.
    #[validate(length(min = 1, max = 20000))]
    pub description: Option<String>,
    /// Supervising coach.
    #[validate(length(min = 1, max = 255))]
    pub coach: Option<String>,
    /// Free-form schedule.
    #[validate(length(min = 1, max = 255))]
    pub schedule: Option<String>,
}

/// Input for creating an academic calendar document.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAcademicCalendarInput {
    /// Document title.
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    /// School year, e.g. "2025/2026".
    #[validate(length(min = 1, max = 255))]
    pub academic_year: String,
    /// Notes.
    #[validate(length(min = 1, max = 20000))]
    pub description: Option<String>,
}

/// Input for updating an academic calendar document.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateAcademicCalendarInput {
    /// Document title.
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    /// School year.
    #[validate(length(min = 1, max = 255))]
    pub academic_year: Option<String>,
    /// Notes.
    #[validate(length(min = 1, max = 20000))]
    pub description: Option<String>,
}
