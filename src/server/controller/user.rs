use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        event::EventDto,
        user::{AuthResponseDto, LoginDto, RegisterUserDto, UpdateProfileDto, UserProfileDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthUser,
        model::user::{RegisterUserParams, UpdateProfileParams},
        service::{auth::AuthService, user::UserService},
        state::AppState,
        util::json::AppJson,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Register a new user account.
///
/// Creates the account and returns a token, so the new user is signed in right away.
/// The email is stored lower-cased and must not already be registered.
///
/// # Returns
/// - `201 Created` - Account created, token and user summary returned
/// - `400 Bad Request` - Invalid body or "User already exists"
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/users/register",
    tag = USER_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "Account created", body = AuthResponseDto),
        (status = 400, description = "Invalid registration data or user already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = RegisterUserParams::from_dto(payload)?;

    let service = AuthService::new(&state.db, &state.tokens);
    let authenticated = service.register(params).await?;

    Ok((StatusCode::CREATED, Json(authenticated.into_dto())))
}

/// Log in with email and password.
///
/// # Returns
/// - `200 OK` - Token and user summary
/// - `400 Bad Request` - "Invalid credentials" or an invalid body
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/users/login",
    tag = USER_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = AuthResponseDto),
        (status = 400, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens);
    let authenticated = service.login(&payload.email, &payload.password).await?;

    Ok(Json(authenticated.into_dto()))
}

/// Get the authenticated user's profile.
///
/// # Returns
/// - `200 OK` - Profile including registered event ids
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/api/users/profile",
    tag = USER_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile of the authenticated user", body = UserProfileDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);
    let profile = service.get_profile(user).await?;

    Ok(Json(profile.into_dto()))
}

/// Update the authenticated user's profile.
///
/// Only name, department, year and notification preferences can be changed; any other
/// field in the body is ignored.
///
/// # Returns
/// - `200 OK` - Updated profile
/// - `400 Bad Request` - Invalid body
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    put,
    path = "/api/users/profile",
    tag = USER_TAG,
    security(("bearer_auth" = [])),
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Updated profile", body = UserProfileDto),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    AppJson(payload): AppJson<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateProfileParams::from_dto(payload)?;

    let service = UserService::new(&state.db);
    let profile = service.update_profile(user.id, params).await?;

    Ok(Json(profile.into_dto()))
}

/// Get the events the authenticated user registered for.
#[utoipa::path(
    get,
    path = "/api/users/events",
    tag = USER_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Registered events ordered by date", body = Vec<EventDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_registered_events(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);
    let events = service.get_registered_events(user.id).await?;

    Ok(Json(
        events
            .into_iter()
            .map(|e| e.into_dto())
            .collect::<Vec<EventDto>>(),
    ))
}
