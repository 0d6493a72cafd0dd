use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::token::TokenService,
    state::AppState,
};

/// Ownership rule a user must satisfy to modify a resource.
///
/// Each variant carries the id of the resource's owner.
pub enum Permission {
    /// Author of an announcement. Admins pass as well.
    AnnouncementAuthor(i32),
    /// Organizer of an event. There is no admin override.
    EventOrganizer(i32),
}

impl Permission {
    /// Checks the rule against an authenticated user.
    ///
    /// # Returns
    /// - `Ok(())` - Access granted
    /// - `Err(AuthError::AccessDenied)` - The user is neither owner nor, where allowed, admin
    pub fn check(&self, user: &User) -> Result<(), AuthError> {
        match self {
            Self::AnnouncementAuthor(author_id) => {
                if user.id != *author_id && !user.is_admin() {
                    return Err(AuthError::AccessDenied(
                        user.id,
                        "Not authorized to modify this announcement".to_string(),
                    ));
                }
            }
            Self::EventOrganizer(organizer_id) => {
                if user.id != *organizer_id {
                    return Err(AuthError::AccessDenied(
                        user.id,
                        "Not authorized to modify this event".to_string(),
                    ));
                }
            }
        }

        Ok(())
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        tokens: &'a TokenService,
        headers: &'a HeaderMap,
    ) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    /// Authenticates the request and checks each permission against the user.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user, loaded fresh from the database
    /// - `Err(AuthError::MissingToken)` - No `Authorization: Bearer` header
    /// - `Err(AuthError::InvalidToken)` - Token malformed, expired, or badly signed
    /// - `Err(AuthError::UserNotFound)` - Token names a user that no longer exists
    /// - `Err(AuthError::AccessDenied)` - A permission check failed
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(token) = bearer_token(self.headers) else {
            return Err(AuthError::MissingToken.into());
        };

        let user_id = self.tokens.verify(token)?;

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotFound(user_id).into());
        };

        for permission in permissions {
            permission.check(&user)?;
        }

        Ok(user)
    }
}

/// The authenticated user of a request.
///
/// Extracted from the headers alone, so a handler that lists it before its body extractor
/// rejects unauthenticated requests before the body is read. Ownership checks stay with
/// the services, which know the resource being modified.
pub struct AuthUser(pub User);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthGuard::new(&state.db, &state.tokens, &parts.headers)
            .require(&[])
            .await?;

        Ok(AuthUser(user))
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();

    (!token.is_empty()).then_some(token)
}
