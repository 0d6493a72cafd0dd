use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

/// Role of a platform user.
///
/// `Admin` may edit or delete any announcement. No role bypasses event ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum Role {
    #[default]
    Student,
    Faculty,
    Staff,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Faculty => "Faculty",
            Self::Staff => "Staff",
            Self::Admin => "Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Student" => Ok(Self::Student),
            "Faculty" => Ok(Self::Faculty),
            "Staff" => Ok(Self::Staff),
            "Admin" => Ok(Self::Admin),
            other => Err(format!("Invalid role '{}'", other)),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct RegisterUserDto {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub role: Role,
    pub department: Option<String>,
    pub year: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Profile fields a user may change about themselves. Absent fields are left untouched.
#[derive(Serialize, Deserialize, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileDto {
    pub name: Option<String>,
    pub department: Option<String>,
    pub year: Option<i32>,
    #[schema(value_type = Option<Object>)]
    pub notification_preferences: Option<serde_json::Value>,
}

/// Public identity of a user as embedded in announcements and events.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct UserSummaryDto {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// User summary returned alongside a freshly issued token.
#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct AuthUserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub department: Option<String>,
    pub year: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AuthResponseDto {
    pub token: String,
    pub user: AuthUserDto,
}

/// The authenticated user's own profile. Never includes the password hash.
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub department: Option<String>,
    pub year: Option<i32>,
    #[schema(value_type = Object)]
    pub notification_preferences: serde_json::Value,
    pub registered_events: Vec<i32>,
    pub created_at: DateTime<Utc>,
}
