use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No bearer token was supplied on a protected route.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No authentication token provided")]
    MissingToken,

    /// The bearer token is malformed, expired, or has an invalid signature.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid authentication token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    /// The token is valid but the user it names no longer exists.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User {0} from token not found in database")]
    UserNotFound(i32),

    /// The authenticated user does not own the resource they tried to change.
    ///
    /// Carries the acting user's id and the message returned to the client.
    /// Results in a 403 Forbidden response.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level. Token failures share one client-facing message
/// so callers cannot tell an expired token from a forged one.
///
/// # Returns
/// - 401 Unauthorized - For `MissingToken`, `InvalidToken` and `UserNotFound`
/// - 403 Forbidden - For `AccessDenied`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingToken => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "No token, authorization denied".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidToken(_) | Self::UserNotFound(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Token is not valid".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, message) => {
                (StatusCode::FORBIDDEN, Json(ErrorDto { error: message })).into_response()
            }
        }
    }
}
