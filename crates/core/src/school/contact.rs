//! Messages sent through the public contact form.

use serde::Deserialize;
use serde_with::{DisplayFromStr, PickFirst, serde_as};
use validator::Validate;

/// A visitor's message.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateContactMessageInput {
    /// Sender name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Reply address.
    #[validate(email)]
    pub email: String,
    /// Subject line.
    #[validate(length(min = 1, max = 255))]
    pub subject: Option<String>,
    /// Message body.
    #[validate(length(min = 1, max = 20000))]
    pub message: String,
}

/// Admin triage of a message. Only the read flag can change.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateContactMessageInput {
    /// Whether an admin has read the message.
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub is_read: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_contact_message_validation() {
        let input: CreateContactMessageInput = serde_json::from_value(json!({
            "name": "Orang Tua",
            "email": "wali@example.com",
            "message": "Kapan pendaftaran dibuka?"
        }))
        .unwrap();
        assert!(input.validate().is_ok());

        let bad: CreateContactMessageInput = serde_json::from_value(json!({
            "name": "Orang Tua",
            "email": "wali",
            "message": "?"
        }))
        .unwrap();
        assert!(bad.validate().unwrap_err().field_errors().contains_key("email"));
    }

    #[test]
    fn test_is_read_from_form_text() {
        let input: UpdateContactMessageInput =
            serde_json::from_value(json!({ "is_read": "true" })).unwrap();
        assert_eq!(input.is_read, Some(true));

        let input: UpdateContactMessageInput =
            serde_json::from_value(json!({ "is_read": false })).unwrap();
        assert_eq!(input.is_read, Some(false));
    }
}
