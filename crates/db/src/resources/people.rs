//! Alumni, staff and the headmaster's message.

use sea_orm::ActiveValue::{NotSet, Set};

use sekolah_core::school::{
    CreateAlumnusInput, CreateHeadmasterMessageInput, CreateStaffInput, UpdateAlumnusInput,
    UpdateHeadmasterMessageInput, UpdateStaffInput,
};

use super::{now, set_if, set_some_if, table_queries};
use crate::entities::{alumni, headmaster_messages, staff};
use crate::repositories::ContentResource;

/// `/alumni`
pub struct Alumni;

impl ContentResource for Alumni {
    type Entity = alumni::Entity;
    type Model = alumni::Model;
    type ActiveModel = alumni::ActiveModel;
    type Create = CreateAlumnusInput;
    type Update = UpdateAlumnusInput;

    const PATH: &'static str = "alumni";
    const ATTACHMENT_FIELD: Option<&'static str> = Some("photo");

    table_queries!(alumni);

    fn new_record(input: CreateAlumnusInput, attachment: Option<String>) -> alumni::ActiveModel {
        let timestamp = now();
        alumni::ActiveModel {
            id: NotSet,
            name: Set(input.name),
            graduation_year: Set(input.graduation_year),
            occupation: Set(input.occupation),
            testimony: Set(input.testimony),
            photo: Set(attachment),
            created_at: Set(timestamp),
            updated_at: Set(timestamp),
        }
    }

    fn apply_update(
        model: alumni::Model,
        input: UpdateAlumnusInput,
        attachment: Option<String>,
    ) -> alumni::ActiveModel {
        let mut active: alumni::ActiveModel = model.into();
        set_if(&mut active.name, input.name);
        set_if(&mut active.graduation_year, input.graduation_year);
        set_some_if(&mut active.occupation, input.occupation);
        set_some_if(&mut active.testimony, input.testimony);
        active.photo = Set(attachment);
        active.updated_at = Set(now());
        active
    }
}

/// `/staff`
pub struct Staff;

impl ContentResource for Staff {
    type Entity = staff::Entity;
    type Model = staff::Model;
    type ActiveModel = staff::ActiveModel;
    type Create = CreateStaffInput;
    type Update = UpdateStaffInput;

    const PATH: &'static str = "staff";
    const ATTACHMENT_FIELD: Option<&'static str> = Some("photo");

    table_queries!(staff);

    fn new_record(input: CreateStaffInput, attachment: Option<String>) -> staff::ActiveModel {
        let timestamp = now();
        staff::ActiveModel {
            id: NotSet,
            name: Set(input.name),
            position: Set(input.position),
            nip: Set(input.nip),
            subject: Set(input.subject),
            email: Set(input.email),
            photo: Set(attachment),
            created_at: Set(timestamp),
            updated_at: Set(timestamp),
        }
    }

    fn apply_update(
        model: staff::Model,
        input: UpdateStaffInput,
        attachment: Option<String>,
    ) -> staff::ActiveModel {
        let mut active: staff::ActiveModel = model.into();
        set_if(&mut active.name, input.name);
        set_if(&mut active.position, input.position);
        set_some_if(&mut active.nip, input.nip);
        set_some_if(&mut active.subject, input.subject);
        set_some_if(&mut active.email, input.email);
        active.photo = Set(attachment);
        active.updated_at = Set(now());
        active
    }
}

/// `/headmaster-messages`
pub struct HeadmasterMessages;

impl ContentResource for HeadmasterMessages {
    type Entity = headmaster_messages::Entity;
    type Model = headmaster_messages::Model;
    type ActiveModel = headmaster_messages::ActiveModel;
    type Create = CreateHeadmasterMessageInput;
    type Update = UpdateHeadmasterMessageInput;

    const PATH: &'static str = "headmaster-messages";
    const ATTACHMENT_FIELD: Option<&'static str> = Some("photo");

    table_queries!(headmaster_messages);

    fn new_record(
        input: CreateHeadmasterMessageInput,
        attachment: Option<String>,
    ) -> headmaster_messages::ActiveModel {
        let timestamp = now();
        headmaster_messages::ActiveModel {
            id: NotSet,
            headmaster_name: Set(input.headmaster_name),
            message: Set(input.message),
            photo: Set(attachment),
            created_at: Set(timestamp),
            updated_at: Set(timestamp),
        }
    }

    fn apply_update(
        model: headmaster_messages::Model,
        input: UpdateHeadmasterMessageInput,
        attachment: Option<String>,
    ) -> headmaster_messages::ActiveModel {
        let mut active: headmaster_messages::ActiveModel = model.into();
        set_if(&mut active.headmaster_name, input.headmaster_name);
        set_if(&mut active.message, input.message);
        active.photo = Set(attachment);
        active.updated_at = Set(now());
        active
    }
}
