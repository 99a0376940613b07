//! School profile and vision/mission.

use sea_orm::ActiveValue::{NotSet, Set};

use sekolah_core::school::{
    CreateSchoolProfileInput, CreateVisionMissionInput, UpdateSchoolProfileInput,
    UpdateVisionMissionInput,
};

use super::{now, set_if, set_some_if, table_queries};
use crate::entities::{school_profiles, vision_missions};
use crate::repositories::ContentResource;

/// `/school-profiles`
pub struct SchoolProfiles;

impl ContentResource for SchoolProfiles {
    type Entity = school_profiles::Entity;
    type Model = school_profiles::Model;
    type ActiveModel = school_profiles::ActiveModel;
    type Create = CreateSchoolProfileInput;
    type Update = UpdateSchoolProfileInput;

    const PATH: &'static str = "school-profiles";
    const ATTACHMENT_FIELD: Option<&'static str> = Some("logo");

    table_queries!(school_profiles);

    fn new_record(
        input: CreateSchoolProfileInput,
        attachment: Option<String>,
    ) -> school_profiles::ActiveModel {
        let timestamp = now();
        school_profiles::ActiveModel {
            id: NotSet,
            name: Set(input.name),
            npsn: Set(input.npsn),
            address: Set(input.address),
            phone: Set(input.phone),
            email: Set(input.email),
            website: Set(input.website),
            accreditation: Set(input.accreditation),
            description: Set(input.description),
            logo: Set(attachment),
            created_at: Set(timestamp),
            updated_at: Set(timestamp),
        }
    }

    fn apply_update(
        model: school_profiles::Model,
        input: UpdateSchoolProfileInput,
        attachment: Option<String>,
    ) -> school_profiles::ActiveModel {
        let mut active: school_profiles::ActiveModel = model.into();
        set_if(&mut active.name, input.name);
        set_some_if(&mut active.npsn, input.npsn);
        set_some_if(&mut active.address, input.address);
        set_some_if(&mut active.phone, input.phone);
        set_some_if(&mut active.email, input.email);
        set_some_if(&mut active.website, input.website);
        set_some_if(&mut active.accreditation, input.accreditation);
        set_some_if(&mut active.description, input.description);
        active.logo = Set(attachment);
        active.updated_at = Set(now());
        active
    }
}

/// `/vision-missions`, a text-only resource.
pub struct VisionMissions;

impl ContentResource for VisionMissions {
    type Entity = vision_missions::Entity;
    type Model = vision_missions::Model;
    type ActiveModel = vision_missions::ActiveModel;
    type Create = CreateVisionMissionInput;
    type Update = UpdateVisionMissionInput;

    const PATH: &'static str = "vision-missions";
    const ATTACHMENT_FIELD: Option<&'static str> = None;

    table_queries!(vision_missions);

    fn new_record(
        input: CreateVisionMissionInput,
        _attachment: Option<String>,
    ) -> vision_missions::ActiveModel {
        let timestamp = now();
        vision_missions::ActiveModel {
            id: NotSet,
            vision: Set(input.vision),
            mission: Set(input.mission),
            goals: Set(input.goals),
            created_at: Set(timestamp),
            updated_at: Set(timestamp),
        }
    }

    fn apply_update(
        model: vision_missions::Model,
        input: UpdateVisionMissionInput,
        _attachment: Option<String>,
    ) -> vision_missions::ActiveModel {
        let mut active: vision_missions::ActiveModel = model.into();
        set_if(&mut active.vision, input.vision);
        set_if(&mut active.mission, input.mission);
        set_some_if(&mut active.goals, input.goals);
        active.updated_at = Set(now());
        active
    }
}
