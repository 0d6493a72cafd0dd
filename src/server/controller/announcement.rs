use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        announcement::{
            AnnouncementDto, CreateAnnouncementDto, Priority, UpdateAnnouncementDto,
        },
        api::{ErrorDto, MessageDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthUser,
        model::announcement::AnnouncementParams,
        service::announcement::AnnouncementService,
        state::AppState,
        util::{json::AppJson, path::AppPath},
    },
};

/// Tag for grouping announcement endpoints in OpenAPI documentation
pub static ANNOUNCEMENT_TAG: &str = "announcement";

/// List all announcements, newest first.
#[utoipa::path(
    get,
    path = "/api/announcements",
    tag = ANNOUNCEMENT_TAG,
    responses(
        (status = 200, description = "All announcements", body = Vec<AnnouncementDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_announcements(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = AnnouncementService::new(&state.db);

    let announcements = service.list(None).await?;

    Ok(Json(
        announcements
            .into_iter()
            .map(|a| a.into_dto())
            .collect::<Vec<AnnouncementDto>>(),
    ))
}

/// List announcements with one priority, newest first.
///
/// # Returns
/// - `200 OK` - Matching announcements
/// - `400 Bad Request` - `level` is not Low, Medium or High
#[utoipa::path(
    get,
    path = "/api/announcements/priority/{level}",
    tag = ANNOUNCEMENT_TAG,
    params(
        ("level" = Priority, Path, description = "Priority level")
    ),
    responses(
        (status = 200, description = "Announcements with the given priority", body = Vec<AnnouncementDto>),
        (status = 400, description = "Unknown priority level", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_announcements_by_priority(
    State(state): State<AppState>,
    AppPath(level): AppPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let priority = level.parse::<Priority>().map_err(AppError::BadRequest)?;

    let service = AnnouncementService::new(&state.db);
    let announcements = service.list(Some(priority)).await?;

    Ok(Json(
        announcements
            .into_iter()
            .map(|a| a.into_dto())
            .collect::<Vec<AnnouncementDto>>(),
    ))
}

/// Get a single announcement.
#[utoipa::path(
    get,
    path = "/api/announcements/{id}",
    tag = ANNOUNCEMENT_TAG,
    params(
        ("id" = i32, Path, description = "Announcement ID")
    ),
    responses(
        (status = 200, description = "The announcement", body = AnnouncementDto),
        (status = 404, description = "Announcement not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_announcement(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = AnnouncementService::new(&state.db);

    let announcement = service.get(id).await?;

    Ok(Json(announcement.into_dto()))
}

/// Create an announcement.
///
/// The authenticated user becomes the author.
///
/// # Returns
/// - `201 Created` - The created announcement
/// - `400 Bad Request` - Invalid body
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    post,
    path = "/api/announcements",
    tag = ANNOUNCEMENT_TAG,
    security(("bearer_auth" = [])),
    request_body = CreateAnnouncementDto,
    responses(
        (status = 201, description = "Announcement created", body = AnnouncementDto),
        (status = 400, description = "Invalid announcement data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_announcement(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    AppJson(payload): AppJson<CreateAnnouncementDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = AnnouncementParams::from_dto(payload)?;

    let service = AnnouncementService::new(&state.db);
    let announcement = service.create(&user, params).await?;

    Ok((StatusCode::CREATED, Json(announcement.into_dto())))
}

/// Replace an announcement.
///
/// # Access Control
/// - Author of the announcement, or any admin
///
/// # Returns
/// - `200 OK` - The updated announcement
/// - `400 Bad Request` - Invalid body
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Not the author and not an admin
/// - `404 Not Found` - No announcement with that id
#[utoipa::path(
    put,
    path = "/api/announcements/{id}",
    tag = ANNOUNCEMENT_TAG,
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Announcement ID")
    ),
    request_body = CreateAnnouncementDto,
    responses(
        (status = 200, description = "Announcement updated", body = AnnouncementDto),
        (status = 400, description = "Invalid announcement data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not authorized to modify this announcement", body = ErrorDto),
        (status = 404, description = "Announcement not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_announcement(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateAnnouncementDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = AnnouncementParams::from_dto(payload)?;

    let service = AnnouncementService::new(&state.db);
    let announcement = service.update(&user, id, params).await?;

    Ok(Json(announcement.into_dto()))
}

/// Delete an announcement.
///
/// # Access Control
/// - Author of the announcement, or any admin
#[utoipa::path(
    delete,
    path = "/api/announcements/{id}",
    tag = ANNOUNCEMENT_TAG,
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Announcement ID")
    ),
    responses(
        (status = 200, description = "Announcement deleted", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not authorized to modify this announcement", body = ErrorDto),
        (status = 404, description = "Announcement not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_announcement(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = AnnouncementService::new(&state.db);
    service.delete(&user, id).await?;

    Ok(Json(MessageDto {
        message: "Announcement deleted".to_string(),
    }))
}
