//! API route definitions.

use axum::{Router, extract::DefaultBodyLimit, middleware};

use crate::{AppState, middleware::auth::auth_middleware};
use sekolah_db::resources::{
    AcademicCalendars, Achievements, Alumni, Announcements, ContactMessages, Extracurriculars,
    Facilities, Galleries, HeadmasterMessages, HeroBanners, HistorySlides, News,
    OrganizationalStructures, Programs, SchoolProfiles, Staff, VisionMissions,
};

pub mod auth;
pub mod content;
pub mod health;

/// Merge the same route family for every publicly readable resource.
macro_rules! website_resources {
    ($router:expr, $routes:ident) => {
        $router
            .merge(content::$routes::<HeroBanners>())
            .merge(content::$routes::<News>())
            .merge(content::$routes::<Announcements>())
            .merge(content::$routes::<Achievements>())
            .merge(content::$routes::<Extracurriculars>())
            .merge(content::$routes::<AcademicCalendars>())
            .merge(content::$routes::<Alumni>())
            .merge(content::$routes::<Galleries>())
            .merge(content::$routes::<Facilities>())
            .merge(content::$routes::<HeadmasterMessages>())
            .merge(content::$routes::<HistorySlides>())
            .merge(content::$routes::<VisionMissions>())
            .merge(content::$routes::<SchoolProfiles>())
            .merge(content::$routes::<OrganizationalStructures>())
            .merge(content::$routes::<Programs>())
            .merge(content::$routes::<Staff>())
    };
}

/// Text fields of a multipart form on top of the largest accepted file.
const FORM_FIELDS_ALLOWANCE: usize = 1024 * 1024;

fn request_body_limit(state: &AppState) -> usize {
    usize::try_from(state.storage.config().max_file_size)
        .unwrap_or(usize::MAX)
        .saturating_add(FORM_FIELDS_ALLOWANCE)
}

/// Creates the API router; writes and the contact inbox require a token.
#[allow(clippy::needless_pass_by_value)]
pub fn api_routes_with_state(state: AppState) -> Router<AppState> {
    let public_routes = website_resources!(
        Router::new().merge(health::routes()).merge(auth::routes()),
        read_routes
    )
    .merge(content::create_route::<ContactMessages>());

    let protected_routes = website_resources!(
        Router::new().merge(auth::protected_routes()),
        write_routes
    )
    .merge(content::read_routes::<ContactMessages>())
    .merge(content::edit_routes::<ContactMessages>())
    .route_layer(middleware::from_fn_with_state(
        state.clone(),
        auth_middleware,
    ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(DefaultBodyLimit::max(request_body_limit(&state)))
}
