use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        announcement::{self, ANNOUNCEMENT_TAG},
        event::{self, EVENT_TAG},
        user::{self, USER_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "UniVerse API", description = "University community platform backend"),
    modifiers(&SecurityAddon),
    tags(
        (name = USER_TAG, description = "Registration, login and profiles"),
        (name = ANNOUNCEMENT_TAG, description = "Campus announcements"),
        (name = EVENT_TAG, description = "Events and RSVP"),
    )
)]
struct ApiDoc;

/// Registers the bearer token scheme referenced by protected endpoints.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds the application router with every API route, the Swagger UI at `/api/docs`,
/// request tracing and permissive CORS.
pub fn router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(user::register))
        .routes(routes!(user::login))
        .routes(routes!(user::get_profile, user::update_profile))
        .routes(routes!(user::get_registered_events))
        .routes(routes!(
            announcement::get_announcements,
            announcement::create_announcement
        ))
        .routes(routes!(announcement::get_announcements_by_priority))
        .routes(routes!(
            announcement::get_announcement,
            announcement::update_announcement,
            announcement::delete_announcement
        ))
        .routes(routes!(event::get_events, event::create_event))
        .routes(routes!(
            event::get_event,
            event::update_event,
            event::delete_event
        ))
        .routes(routes!(event::rsvp, event::cancel_rsvp))
        .with_state(state)
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
