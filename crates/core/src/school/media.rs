//! Image-centred resources: banners, galleries, slides, facilities.

use serde::Deserialize;
use serde_with::{DisplayFromStr, PickFirst, serde_as};
use validator::Validate;

/// Input for creating a hero banner.
#[serde_as]
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateHeroBannerInput {
    /// Headline.
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    /// Secondary line.
    #[validate(length(min = 1, max = 255))]
    pub subtitle: Option<String>,
    /// Call-to-action target.
    #[validate(length(min = 1, max = 255))]
    pub link_url: Option<String>,
    /// Display position, ascending.
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[validate(range(min = 0))]
    pub sort_order: Option<i32>,
}

/// Input for updating a hero banner.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateHeroBannerInput {
    /// Headline.
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    /// Secondary line.
    #[validate(length(min = 1, max = 255))]
    pub subtitle: Option<String>,
    /// Call-to-action target.
    #[validate(length(min = 1, max = 255))]
    pub link_url: Option<String>,
    /// Display position, ascending.
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[validate(range(min = 0))]
    pub sort_order: Option<i32>,
}

/// Input for creating a gallery item.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGalleryInput {
    /// Caption.
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    /// Longer description.
    #[validate(length(min = 1, max = 20000))]
    pub description: Option<String>,
    /// Free-form grouping, e.g. "sports".
    #[validate(length(min = 1, max = 255))]
    pub category: Option<String>,
}

/// Input for updating a gallery item.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateGalleryInput {
    /// Caption.
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    /// Longer description.
    #[validate(length(min = 1, max = 20000))]
    pub description: Option<String>,
    /// Free-form grouping.
    #[validate(length(min = 1, max = 255))]
    pub category: Option<String>,
}

/// Input for creating a history slide.
#[serde_as]
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateHistorySlideInput {
    /// Slide heading.
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    /// Slide text.
    #[validate(length(min = 1, max = 20000))]
    pub description: Option<String>,
    /// Year the event happened.
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[validate(range(min = 1900, max = 2100))]
    pub year: Option<i32>,
    /// Display position, ascending.
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[validate(range(min = 0))]
    pub sort_order: Option<i32>,
}

/// Input for updating a history slide.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateHistorySlideInput {
    /// Slide heading.
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    /// Slide text.
    #[validate(length(min = 1, max = 20000))]
    pub description: Option<String>,
    /// Year the event happened.
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[validate(range(min = 1900, max = 2100))]
    pub year: Option<i32>,
    /// Display position, ascending.
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[validate(range(min = 0))]
    pub sort_order: Option<i32>,
}

/// Input for creating a facility.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFacilityInput {
    /// Facility name, e.g. "Science lab".
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Details.
    #[validate(length(min = 1, max = 20000))]
    pub description: Option<String>,
}

/// Input for updating a facility.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateFacilityInput {
    /// Name.
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    /// Details.
    #[validate(length(min = 1, max = 20000))]
    pub description: Option<String>,
}

/// Input for creating an organizational structure chart.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateOrganizationalStructureInput {
    /// Title.
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    /// Details.
    #[validate(length(min = 1, max = 20000))]
    pub description: Option<String>,
}

/// Input for updating an organizational structure chart.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateOrganizationalStructureInput {
    /// Title.
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    /// Details.
    #[validate(length(min = 1, max = 20000))]
    pub description: Option<String>,
}

/// Input for creating a study program.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProgramInput {
    /// Name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Details.
    #[validate(length(min = 1, max = 20000))]
    pub description: Option<String>,
}

/// Input for updating a study program.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProgramInput {
    /// Name.
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    /// Details.
    #[validate(length(min = 1, max = 20000))]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sort_order_accepts_number_or_string() {
        let from_json: CreateHeroBannerInput =
            serde_json::from_value(json!({ "title": "PPDB", "sort_order": 2 })).unwrap();
        let from_form: CreateHeroBannerInput =
            serde_json::from_value(json!({ "title": "PPDB", "sort_order": "2" })).unwrap();

        assert_eq!(from_json.sort_order, Some(2));
        assert_eq!(from_form.sort_order, Some(2));
        assert!(from_form.subtitle.is_none());
    }

    #[test]
    fn test_negative_sort_order_rejected() {
        let input: CreateHeroBannerInput =
            serde_json::from_value(json!({ "title": "PPDB", "sort_order": -1 })).unwrap();
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_history_year_range() {
        let valid: CreateHistorySlideInput =
            serde_json::from_value(json!({ "title": "Founded", "year": "1965" })).unwrap();
        assert!(valid.validate().is_ok());

        let invalid: CreateHistorySlideInput =
            serde_json::from_value(json!({ "title": "Founded", "year": 1850 })).unwrap();
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_non_numeric_string_rejected() {
        let result: Result<UpdateHistorySlideInput, _> =
            serde_json::from_value(json!({ "year": "sixties" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_update_is_valid() {
        let input: UpdateGalleryInput = serde_json::from_value(json!({})).unwrap();
        assert!(input.validate().is_ok());
        assert!(input.title.is_none());
    }
}
