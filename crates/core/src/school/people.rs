//! People: alumni, staff, the headmaster.

use serde::Deserialize;
use serde_with::{DisplayFromStr, PickFirst, serde_as};
use validator::Validate;

/// Input for creating an alumnus entry.
#[serde_as]
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAlumnusInput {
    /// Full name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Year of graduation.
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[validate(range(min = 1900, max = 2100))]
    pub graduation_year: i32,
    /// Current occupation.
    #[validate(length(min = 1, max = 255))]
    pub occupation: Option<String>,
    /// Quote shown on the alumni page.
    #[validate(length(min = 1, max = 20000))]
    pub testimony: Option<String>,
}

/// Input for updating an alumnus entry.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateAlumnusInput {
    /// Full name.
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    /// Year of graduation.
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[validate(range(min = 1900, max = 2100))]
    pub graduation_year: Option<i32>,
    /// Current occupation.
    #[validate(length(min = 1, max = 255))]
    pub occupation: Option<String>,
    /// Quote shown on the alumni page.
    #[validate(length(min = 1, max = 20000))]
    pub testimony: Option<String>,
}

/// Input for creating a staff or teacher entry.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStaffInput {
    /// Full name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Job title.
    #[validate(length(min = 1, max = 255))]
    pub position: String,
    /// Civil servant number.
    #[validate(length(min = 1, max = 255))]
    pub nip: Option<String>,
    /// Subject taught.
    #[validate(length(min = 1, max = 255))]
    pub subject: Option<String>,
    /// Contact address.
    #[validate(email)]
    pub email: Option<String>,
}

/// Input for updating a staff or teacher entry.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateStaffInput {
    /// Full name.
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    /// Job title.
    #[validate(length(min = 1, max = 255))]
    pub position: Option<String>,
    /// Civil servant number.
    #[validate(length(min = 1, max = 255))]
    pub nip: Option<String>,
    /// Subject taught.
    #[validate(length(min = 1, max = 255))]
    pub subject: Option<String>,
    /// Contact address.
    #[validate(email)]
    pub email: Option<String>,
}

/// Input for creating the headmaster's message.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateHeadmasterMessageInput {
    /// Headmaster's name.
    #[validate(length(min = 1, max = 255))]
    pub headmaster_name: String,
    /// Welcome message.
    #[validate(length(min = 1, max = 20000))]
    pub message: String,
}

/// Input for updating the headmaster's message.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateHeadmasterMessageInput {
    /// Headmaster's name.
    #[validate(length(min = 1, max = 255))]
    pub headmaster_name: Option<String>,
    /// Welcome message.
    #[validate(length(min = 1, max = 20000))]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(2010))]
    #[case(json!("2010"))]
    fn test_graduation_year_forms(#[case] year: serde_json::Value) {
        let input: CreateAlumnusInput =
            serde_json::from_value(json!({ "name": "Siti", "graduation_year": year })).unwrap();
        assert_eq!(input.graduation_year, 2010);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_graduation_year_required() {
        let result: Result<CreateAlumnusInput, _> =
            serde_json::from_value(json!({ "name": "Siti" }));
        assert!(result.is_err());
    }

    #[rstest]
    #[case("guru@sekolah.sch.id", true)]
    #[case("not-an-email", false)]
    fn test_staff_email(#[case] email: &str, #[case] valid: bool) {
        let input: CreateStaffInput = serde_json::from_value(json!({
            "name": "Budi",
            "position": "Teacher",
            "email": email
        }))
        .unwrap();
        assert_eq!(input.validate().is_ok(), valid);
    }
}
