use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

use crate::model::user::UserSummaryDto;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum EventCategory {
    Workshop,
    Lecture,
    Social,
    Sports,
    Other,
}

impl EventCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Workshop => "Workshop",
            Self::Lecture => "Lecture",
            Self::Social => "Social",
            Self::Sports => "Sports",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Workshop" => Ok(Self::Workshop),
            "Lecture" => Ok(Self::Lecture),
            "Social" => Ok(Self::Social),
            "Sports" => Ok(Self::Sports),
            "Other" => Ok(Self::Other),
            other => Err(format!("Invalid event category '{}'", other)),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub category: EventCategory,
    pub organizer: UserSummaryDto,
    pub attendees: Vec<UserSummaryDto>,
    pub attendee_count: usize,
    pub max_attendees: Option<i32>,
    pub image: Option<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Submitted event record, used for both creation and full replacement.
///
/// The organizer is always the authenticated user and attendees are only changed
/// through RSVP, so neither can be supplied here.
#[derive(Serialize, Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventDto {
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub category: EventCategory,
    pub max_attendees: Option<i32>,
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

pub type UpdateEventDto = CreateEventDto;
