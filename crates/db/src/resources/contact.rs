//! Contact form inbox.

use sea_orm::ActiveValue::{NotSet, Set};

use sekolah_core::school::{CreateContactMessageInput, UpdateContactMessageInput};

use super::{now, set_if, table_queries};
use crate::entities::contact_messages;
use crate::repositories::ContentResource;

/// `/contact-messages`: public create, admin read and triage.
pub struct ContactMessages;

impl ContentResource for ContactMessages {
    type Entity = contact_messages::Entity;
    type Model = contact_messages::Model;
    type ActiveModel = contact_messages::ActiveModel;
    type Create = CreateContactMessageInput;
    type Update = UpdateContactMessageInput;

    const PATH: &'static str = "contact-messages";
    const ATTACHMENT_FIELD: Option<&'static str> = None;

    table_queries!(contact_messages);

    fn new_record(
        input: CreateContactMessageInput,
        _attachment: Option<String>,
    ) -> contact_messages::ActiveModel {
        let timestamp = now();
        contact_messages::ActiveModel {
            id: NotSet,
            name: Set(input.name),
            email: Set(input.email),
            subject: Set(input.subject),
            message: Set(input.message),
            is_read: Set(false),
            created_at: Set(timestamp),
            updated_at: Set(timestamp),
        }
    }

    fn apply_update(
        model: contact_messages::Model,
        input: UpdateContactMessageInput,
        _attachment: Option<String>,
    ) -> contact_messages::ActiveModel {
        let mut active: contact_messages::ActiveModel = model.into();
        set_if(&mut active.is_read, input.is_read);
        active.updated_at = Set(now());
        active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_message_is_unread() {
        let input = CreateContactMessageInput {
            name: "Wali murid".to_string(),
            email: "wali@example.com".to_string(),
            subject: None,
            message: "Halo".to_string(),
        };
        let active = ContactMessages::new_record(input, None);
        assert_eq!(active.is_read, Set(false));
    }
}
