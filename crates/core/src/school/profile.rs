//! School identity: profile and vision/mission.

use serde::Deserialize;
use validator::Validate;

/// Input for creating the school profile.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSchoolProfileInput {
    /// School name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// National school number.
    #[validate(length(min = 1, max = 255))]
    pub npsn: Option<String>,
    /// Street address.
    #[validate(length(min = 1, max = 255))]
    pub address: Option<String>,
    /// Phone number.
    #[validate(length(min = 1, max = 255))]
    pub phone: Option<String>,
    /// Contact address.
    #[validate(email)]
    pub email: Option<String>,
    /// Website URL.
    #[validate(length(min = 1, max = 255))]
    pub website: Option<String>,
    /// Accreditation grade.
    #[validate(length(min = 1, max = 255))]
    pub accreditation: Option<String>,
    /// About the school.
    #[validate(length(min = 1, max = 20000))]
    pub description: Option<String>,
}

/// Input for updating the school profile.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateSchoolProfileInput {
    /// School name.
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    /// National school number.
    #[validate(length(min = 1, max = 255))]
    pub npsn: Option<String>,
    /// Street address.
    #[validate(length(min = 1, max = 255))]
    pub address: Option<String>,
    /// Phone number.
    #[validate(length(min = 1, max = 255))]
    pub phone: Option<String>,
    /// Contact address.
    #[validate(email)]
    pub email: Option<String>,
    /// Website URL.
    #[validate(length(min = 1, max = 255))]
    pub website: Option<String>,
    /// Accreditation grade.
    #[validate(length(min = 1, max = 255))]
    pub accreditation: Option<String>,
    /// About the school.
    #[validate(length(min = 1, max = 20000))]
    pub description: Option<String>,
}

/// Input for creating the vision and mission statement.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateVisionMissionInput {
    /// Vision statement.
    #[validate(length(min = 1, max = 20000))]
    pub vision: String,
    /// Mission statement.
    #[validate(length(min = 1, max = 20000))]
    pub mission: String,
    /// Goals, one per line.
    #[validate(length(min = 1, max = 20000))]
    pub goals: Option<String>,
}

/// Input for updating the vision and mission statement.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateVisionMissionInput {
    /// Vision statement.
    #[validate(length(min = 1, max = 20000))]
    pub vision: Option<String>,
    /// Mission statement.
    #[validate(length(min = 1, max = 20000))]
    pub mission: Option<String>,
    /// Goals, one per line.
    #[validate(length(min = 1, max = 20000))]
    pub goals: Option<String>,
}
