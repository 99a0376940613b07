//! Banners, galleries, history slides, facilities, org charts and programs.

use sea_orm::ActiveValue::{NotSet, Set};

use sekolah_core::school::{
    CreateFacilityInput, CreateGalleryInput, CreateHeroBannerInput, CreateHistorySlideInput,
    CreateOrganizationalStructureInput, CreateProgramInput, UpdateFacilityInput,
    UpdateGalleryInput, UpdateHeroBannerInput, UpdateHistorySlideInput,
    UpdateOrganizationalStructureInput, UpdateProgramInput,
};

use super::{now, set_if, set_some_if, table_queries};
use crate::entities::{
    facilities, galleries, hero_banners, history_slides, organizational_structures, programs,
};
use crate::repositories::ContentResource;

/// `/hero-banners`
pub struct HeroBanners;

impl ContentResource for HeroBanners {
    type Entity = hero_banners::Entity;
    type Model = hero_banners::Model;
    type ActiveModel = hero_banners::ActiveModel;
    type Create = CreateHeroBannerInput;
    type Update = UpdateHeroBannerInput;

    const PATH: &'static str = "hero-banners";
    const ATTACHMENT_FIELD: Option<&'static str> = Some("image");

    table_queries!(hero_banners);

    fn new_record(
        input: CreateHeroBannerInput,
        attachment: Option<String>,
    ) -> hero_banners::ActiveModel {
        let timestamp = now();
        hero_banners::ActiveModel {
            id: NotSet,
            title: Set(input.title),
            subtitle: Set(input.subtitle),
            link_url: Set(input.link_url),
            sort_order: Set(input.sort_order.unwrap_or_default()),
            image: Set(attachment),
            created_at: Set(timestamp),
            updated_at: Set(timestamp),
        }
    }

    fn apply_update(
        model: hero_banners::Model,
        input: UpdateHeroBannerInput,
        attachment: Option<String>,
    ) -> hero_banners::ActiveModel {
        let mut active: hero_banners::ActiveModel = model.into();
        set_if(&mut active.title, input.title);
        set_some_if(&mut active.subtitle, input.subtitle);
        set_some_if(&mut active.link_url, input.link_url);
        set_if(&mut active.sort_order, input.sort_order);
        active.image = Set(attachment);
        active.updated_at = Set(now());
        active
    }
}

/// `/galleries`
pub struct Galleries;

impl ContentResource for Galleries {
    type Entity = galleries::Entity;
    type Model = galleries::Model;
    type ActiveModel = galleries::ActiveModel;
    type Create = CreateGalleryInput;
    type Update = UpdateGalleryInput;

    const PATH: &'static str = "galleries";
    const ATTACHMENT_FIELD: Option<&'static str> = Some("image");

    table_queries!(galleries);

    fn new_record(input: CreateGalleryInput, attachment: Option<String>) -> galleries::ActiveModel {
        let timestamp = now();
        galleries::ActiveModel {
            id: NotSet,
            title: Set(input.title),
            description: Set(input.description),
            category: Set(input.category),
            image: Set(attachment),
            created_at: Set(timestamp),
            updated_at: Set(timestamp),
        }
    }

    fn apply_update(
        model: galleries::Model,
        input: UpdateGalleryInput,
        attachment: Option<String>,
    ) -> galleries::ActiveModel {
        let mut active: galleries::ActiveModel = model.into();
        set_if(&mut active.title, input.title);
        set_some_if(&mut active.description, input.description);
        set_some_if(&mut active.category, input.category);
        active.image = Set(attachment);
        active.updated_at = Set(now());
        active
    }
}

/// `/history-slides`
pub struct HistorySlides;

impl ContentResource for HistorySlides {
    type Entity = history_slides::Entity;
    type Model = history_slides::Model;
    type ActiveModel = history_slides::ActiveModel;
    type Create = CreateHistorySlideInput;
    type Update = UpdateHistorySlideInput;

    const PATH: &'static str = "history-slides";
    const ATTACHMENT_FIELD: Option<&'static str> = Some("image");

    table_queries!(history_slides);

    fn new_record(
        input: CreateHistorySlideInput,
        attachment: Option<String>,
    ) -> history_slides::ActiveModel {
        let timestamp = now();
        history_slides::ActiveModel {
            id: NotSet,
            title: Set(input.title),
            description: Set(input.description),
            year: Set(input.year),
            sort_order: Set(input.sort_order.unwrap_or_default()),
            image: Set(attachment),
            created_at: Set(timestamp),
            updated_at: Set(timestamp),
        }
    }

    fn apply_update(
        model: history_slides::Model,
        input: UpdateHistorySlideInput,
        attachment: Option<String>,
    ) -> history_slides::ActiveModel {
        let mut active: history_slides::ActiveModel = model.into();
        set_if(&mut active.title, input.title);
        set_some_if(&mut active.description, input.description);
        set_some_if(&mut active.year, input.year);
        set_if(&mut active.sort_order, input.sort_order);
        active.image = Set(attachment);
        active.updated_at = Set(now());
        active
    }
}

/// `/facilities`
pub struct Facilities;

impl ContentResource for Facilities {
    type Entity = facilities::Entity;
    type Model = facilities::Model;
    type ActiveModel = facilities::ActiveModel;
    type Create = CreateFacilityInput;
    type Update = UpdateFacilityInput;

    const PATH: &'static str = "facilities";
    const ATTACHMENT_FIELD: Option<&'static str> = Some("image");

    table_queries!(facilities);

    fn new_record(input: CreateFacilityInput, attachment: Option<String>) -> facilities::ActiveModel {
        let timestamp = now();
        facilities::ActiveModel {
            id: NotSet,
            name: Set(input.name),
            description: Set(input.description),
            image: Set(attachment),
            created_at: Set(timestamp),
            updated_at: Set(timestamp),
        }
    }

    fn apply_update(
        model: facilities::Model,
        input: UpdateFacilityInput,
        attachment: Option<String>,
    ) -> facilities::ActiveModel {
        let mut active: facilities::ActiveModel = model.into();
        set_if(&mut active.name, input.name);
        set_some_if(&mut active.description, input.description);
        active.image = Set(attachment);
        active.updated_at = Set(now());
        active
    }
}

/// `/organizational-structures`
pub struct OrganizationalStructures;

impl ContentResource for OrganizationalStructures {
    type Entity = organizational_structures::Entity;
    type Model = organizational_structures::Model;
    type ActiveModel = organizational_structures::ActiveModel;
    type Create = CreateOrganizationalStructureInput;
    type Update = UpdateOrganizationalStructureInput;

    const PATH: &'static str = "organizational-structures";
    const ATTACHMENT_FIELD: Option<&'static str> = Some("image");

    table_queries!(organizational_structures);

    fn new_record(
        input: CreateOrganizationalStructureInput,
        attachment: Option<String>,
    ) -> organizational_structures::ActiveModel {
        let timestamp = now();
        organizational_structures::ActiveModel {
            id: NotSet,
            title: Set(input.title),
            description: Set(input.description),
            image: Set(attachment),
            created_at: Set(timestamp),
            updated_at: Set(timestamp),
        }
    }

    fn apply_update(
        model: organizational_structures::Model,
        input: UpdateOrganizationalStructureInput,
        attachment: Option<String>,
    ) -> organizational_structures::ActiveModel {
        let mut active: organizational_structures::ActiveModel = model.into();
        set_if(&mut active.title, input.title);
        set_some_if(&mut active.description, input.description);
        active.image = Set(attachment);
        active.updated_at = Set(now());
        active
    }
}

/// `/programs`
pub struct Programs;

impl ContentResource for Programs {
    type Entity = programs::Entity;
    type Model = programs::Model;
    type ActiveModel = programs::ActiveModel;
    type Create = CreateProgramInput;
    type Update = UpdateProgramInput;

    const PATH: &'static str = "programs";
    const ATTACHMENT_FIELD: Option<&'static str> = Some("image");

    table_queries!(programs);

    fn new_record(input: CreateProgramInput, attachment: Option<String>) -> programs::ActiveModel {
        let timestamp = now();
        programs::ActiveModel {
            id: NotSet,
            name: Set(input.name),
            description: Set(input.description),
            image: Set(attachment),
            created_at: Set(timestamp),
            updated_at: Set(timestamp),
        }
    }

    fn apply_update(
        model: programs::Model,
        input: UpdateProgramInput,
        attachment: Option<String>,
    ) -> programs::ActiveModel {
        let mut active: programs::ActiveModel = model.into();
        set_if(&mut active.name, input.name);
        set_some_if(&mut active.description, input.description);
        active.image = Set(attachment);
        active.updated_at = Set(now());
        active
    }
}
