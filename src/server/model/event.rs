//! Event domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::event::{CreateEventDto, EventCategory, EventDto},
    server::{error::AppError, model::user::UserSummary},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub category: EventCategory,
    /// Owner of the event; only they may change it.
    pub organizer_id: i32,
    /// Upper bound on attendees, unbounded when `None`.
    pub max_attendees: Option<i32>,
    pub image: Option<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Converts an entity model to an event domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Event)` - The converted domain model
    /// - `Err(DbErr::Custom)` - Stored category or tags could not be decoded
    pub fn from_entity(entity: entity::event::Model) -> Result<Self, DbErr> {
        let category = entity.category.parse::<EventCategory>().map_err(|e| {
            DbErr::Custom(format!("Failed to parse category of event {}: {}", entity.id, e))
        })?;
        let tags: Vec<String> = serde_json::from_value(entity.tags).map_err(|e| {
            DbErr::Custom(format!("Failed to decode tags of event {}: {}", entity.id, e))
        })?;

        Ok(Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            date: entity.date,
            location: entity.location,
            category,
            organizer_id: entity.organizer_id,
            max_attendees: entity.max_attendees,
            image: entity.image,
            tags,
            created_at: entity.created_at,
        })
    }
}

/// Event with organizer and attendees populated, attendees in registration order.
#[derive(Debug, Clone)]
pub struct EventWithRelations {
    pub event: Event,
    pub organizer: UserSummary,
    pub attendees: Vec<UserSummary>,
}

impl EventWithRelations {
    pub fn is_attendee(&self, user_id: i32) -> bool {
        self.attendees.iter().any(|a| a.id == user_id)
    }

    pub fn into_dto(self) -> EventDto {
        let attendee_count = self.attendees.len();

        EventDto {
            id: self.event.id,
            title: self.event.title,
            description: self.event.description,
            date: self.event.date,
            location: self.event.location,
            category: self.event.category,
            organizer: self.organizer.into_dto(),
            attendees: self.attendees.into_iter().map(UserSummary::into_dto).collect(),
            attendee_count,
            max_attendees: self.event.max_attendees,
            image: self.event.image,
            tags: self.event.tags,
            created_at: self.event.created_at,
        }
    }
}

/// Validated event record used for both create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct EventParams {
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub category: EventCategory,
    pub max_attendees: Option<i32>,
    pub image: Option<String>,
    pub tags: Vec<String>,
}

impl EventParams {
    /// Validates a submitted event.
    ///
    /// # Returns
    /// - `Ok(EventParams)` - Validated record with trimmed title and location
    /// - `Err(AppError::BadRequest)` - Empty title, description or location, or a
    ///   capacity below one
    pub fn from_dto(dto: CreateEventDto) -> Result<Self, AppError> {
        let title = dto.title.trim().to_string();
        if title.is_empty() {
            return Err(AppError::BadRequest("Title is required".to_string()));
        }
        if dto.description.trim().is_empty() {
            return Err(AppError::BadRequest("Description is required".to_string()));
        }
        let location = dto.location.trim().to_string();
        if location.is_empty() {
            return Err(AppError::BadRequest("Location is required".to_string()));
        }
        if let Some(max) = dto.max_attendees {
            if max < 1 {
                return Err(AppError::BadRequest(
                    "maxAttendees must be at least 1".to_string(),
                ));
            }
        }

        Ok(Self {
            title,
            description: dto.description,
            date: dto.date,
            location,
            category: dto.category,
            max_attendees: dto.max_attendees,
            image: dto.image,
            tags: dto.tags,
        })
    }
}
