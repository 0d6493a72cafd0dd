use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

use crate::model::user::UserSummaryDto;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Self::Low),
            "Medium" => Ok(Self::Medium),
            "High" => Ok(Self::High),
            other => Err(format!("Invalid priority '{}'", other)),
        }
    }
}

/// Audience an announcement is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Audience {
    All,
    Students,
    Faculty,
    Staff,
}

#[derive(Serialize, Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementDto {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub author: UserSummaryDto,
    pub priority: Priority,
    pub target_audience: Vec<Audience>,
    pub attachments: Vec<String>,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Submitted announcement record, used for both creation and full replacement.
///
/// The author is always the authenticated user and cannot be supplied here.
#[derive(Serialize, Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnnouncementDto {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub target_audience: Vec<Audience>,
    #[serde(default)]
    pub attachments: Vec<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

pub type UpdateAnnouncementDto = CreateAnnouncementDto;
