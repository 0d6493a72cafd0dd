use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        event::{CreateEventDto, EventDto, UpdateEventDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthUser,
        model::event::EventParams,
        service::event::EventService,
        state::AppState,
        util::{json::AppJson, path::AppPath},
    },
};

/// Tag for grouping event endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "event";

/// List all events by date ascending.
#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    responses(
        (status = 200, description = "All events", body = Vec<EventDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_events(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = EventService::new(&state.db);

    let events = service.list().await?;

    Ok(Json(
        events
            .into_iter()
            .map(|e| e.into_dto())
            .collect::<Vec<EventDto>>(),
    ))
}

/// Get a single event with organizer and attendees.
#[utoipa::path(
    get,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "The event", body = EventDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = EventService::new(&state.db);

    let event = service.get(id).await?;

    Ok(Json(event.into_dto()))
}

/// Create an event organized by the authenticated user.
///
/// # Returns
/// - `201 Created` - The created event
/// - `400 Bad Request` - Missing field, unknown category, or capacity below one
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    post,
    path = "/api/events",
    tag = EVENT_TAG,
    security(("bearer_auth" = [])),
    request_body = CreateEventDto,
    responses(
        (status = 201, description = "Event created", body = EventDto),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    AppJson(payload): AppJson<CreateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = EventParams::from_dto(payload)?;

    let service = EventService::new(&state.db);
    let event = service.create(&user, params).await?;

    Ok((StatusCode::CREATED, Json(event.into_dto())))
}

/// Replace an event.
///
/// # Access Control
/// - Organizer of the event only; admins get no override
///
/// # Returns
/// - `200 OK` - The updated event
/// - `400 Bad Request` - Invalid body, or capacity below the current attendee count
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Not the organizer
/// - `404 Not Found` - No event with that id
#[utoipa::path(
    put,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    request_body = CreateEventDto,
    responses(
        (status = 200, description = "Event updated", body = EventDto),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not authorized to modify this event", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_event(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = EventParams::from_dto(payload)?;

    let service = EventService::new(&state.db);
    let event = service.update(&user, id, params).await?;

    Ok(Json(event.into_dto()))
}

/// Delete an event and its registrations.
///
/// # Access Control
/// - Organizer of the event only
#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event deleted", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not authorized to modify this event", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = EventService::new(&state.db);
    service.delete(&user, id).await?;

    Ok(Json(MessageDto {
        message: "Event deleted".to_string(),
    }))
}

/// RSVP to an event as the authenticated user.
///
/// # Returns
/// - `200 OK` - The event with the user among its attendees
/// - `400 Bad Request` - "Already registered for this event" or "Event is full"
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - No event with that id
#[utoipa::path(
    post,
    path = "/api/events/{id}/rsvp",
    tag = EVENT_TAG,
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Registered for the event", body = EventDto),
        (status = 400, description = "Already registered or event full", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn rsvp(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = EventService::new(&state.db);
    let event = service.rsvp(&user, id).await?;

    Ok(Json(event.into_dto()))
}

/// Cancel the authenticated user's RSVP. Succeeds even without a registration.
#[utoipa::path(
    delete,
    path = "/api/events/{id}/rsvp",
    tag = EVENT_TAG,
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Registration cancelled", body = EventDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_rsvp(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = EventService::new(&state.db);
    let event = service.cancel_rsvp(&user, id).await?;

    Ok(Json(event.into_dto()))
}
