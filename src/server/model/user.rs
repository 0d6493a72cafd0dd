//! User domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::user::{
        AuthResponseDto, AuthUserDto, RegisterUserDto, Role, UpdateProfileDto, UserProfileDto,
        UserSummaryDto,
    },
    server::error::AppError,
};

/// Platform user with credentials, role and profile data.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    /// Unique, lower-cased email address.
    pub email: String,
    /// Argon2 PHC string. Never leaves the server.
    pub password_hash: String,
    pub role: Role,
    pub department: Option<String>,
    pub year: Option<i32>,
    /// Free-form JSON object of notification settings.
    pub notification_preferences: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(DbErr::Custom)` - The stored role is not a known role
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, DbErr> {
        let role = entity
            .role
            .parse::<Role>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse role of user {}: {}", entity.id, e)))?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            password_hash: entity.password_hash,
            role,
            department: entity.department,
            year: entity.year,
            notification_preferences: entity.notification_preferences,
            created_at: entity.created_at,
        })
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn into_auth_dto(self) -> AuthUserDto {
        AuthUserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role,
            department: self.department,
            year: self.year,
        }
    }
}

/// Public identity of a user (id, name, email) embedded in announcements and events.
#[derive(Debug, Clone, PartialEq)]
pub struct UserSummary {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl UserSummary {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
        }
    }

    pub fn into_dto(self) -> UserSummaryDto {
        UserSummaryDto {
            id: self.id,
            name: self.name,
            email: self.email,
        }
    }
}

/// A user's own profile together with the ids of the events they are registered for.
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub user: User,
    pub registered_events: Vec<i32>,
}

impl UserProfile {
    pub fn into_dto(self) -> UserProfileDto {
        UserProfileDto {
            id: self.user.id,
            name: self.user.name,
            email: self.user.email,
            role: self.user.role,
            department: self.user.department,
            year: self.user.year,
            notification_preferences: self.user.notification_preferences,
            registered_events: self.registered_events,
            created_at: self.user.created_at,
        }
    }
}

/// A user together with a freshly issued identity token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub token: String,
    pub user: User,
}

impl AuthenticatedUser {
    pub fn into_dto(self) -> AuthResponseDto {
        AuthResponseDto {
            token: self.token,
            user: self.user.into_auth_dto(),
        }
    }
}

/// Lower-cases and trims an email address; the stored form is always normalized.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Validated registration input. The password is still in plain text here and is
/// hashed by the service before it reaches the repository.
#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub department: Option<String>,
    pub year: Option<i32>,
}

impl RegisterUserParams {
    /// Validates and normalizes a registration request.
    ///
    /// # Returns
    /// - `Ok(RegisterUserParams)` - Trimmed name, normalized email
    /// - `Err(AppError::BadRequest)` - Empty name or password, or an implausible email
    pub fn from_dto(dto: RegisterUserDto) -> Result<Self, AppError> {
        let name = dto.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest("Name is required".to_string()));
        }

        let email = normalize_email(&dto.email);
        if !is_plausible_email(&email) {
            return Err(AppError::BadRequest("A valid email is required".to_string()));
        }

        if dto.password.is_empty() {
            return Err(AppError::BadRequest("Password is required".to_string()));
        }

        Ok(Self {
            name,
            email,
            password: dto.password,
            role: dto.role,
            department: dto.department,
            year: dto.year,
        })
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !email.contains(' '),
        None => false,
    }
}

/// Insert parameters for a new user row.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub department: Option<String>,
    pub year: Option<i32>,
}

/// Profile changes restricted to the fields a user may edit about themselves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateProfileParams {
    pub name: Option<String>,
    pub department: Option<String>,
    pub year: Option<i32>,
    pub notification_preferences: Option<serde_json::Value>,
}

impl UpdateProfileParams {
    /// Validates a profile update.
    ///
    /// # Returns
    /// - `Ok(UpdateProfileParams)` - Only the allowed fields, name trimmed
    /// - `Err(AppError::BadRequest)` - Empty name or non-object notification preferences
    pub fn from_dto(dto: UpdateProfileDto) -> Result<Self, AppError> {
        let name = match dto.name {
            Some(name) => {
                let name = name.trim().to_string();
                if name.is_empty() {
                    return Err(AppError::BadRequest("Name cannot be empty".to_string()));
                }
                Some(name)
            }
            None => None,
        };

        if let Some(preferences) = &dto.notification_preferences {
            if !preferences.is_object() {
                return Err(AppError::BadRequest(
                    "notificationPreferences must be an object".to_string(),
                ));
            }
        }

        Ok(Self {
            name,
            department: dto.department,
            year: dto.year,
            notification_preferences: dto.notification_preferences,
        })
    }
}
