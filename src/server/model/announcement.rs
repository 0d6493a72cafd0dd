//! Announcement domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::announcement::{AnnouncementDto, Audience, CreateAnnouncementDto, Priority},
    server::{error::AppError, model::user::UserSummary},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Announcement {
    pub id: i32,
    pub title: String,
    pub content: String,
    /// Owner of the announcement; only they or an admin may change it.
    pub author_id: i32,
    pub priority: Priority,
    pub target_audience: Vec<Audience>,
    pub attachments: Vec<String>,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Announcement {
    /// Converts an entity model to an announcement domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Announcement)` - The converted domain model
    /// - `Err(DbErr::Custom)` - Stored priority or JSON list columns could not be decoded
    pub fn from_entity(entity: entity::announcement::Model) -> Result<Self, DbErr> {
        let priority = entity.priority.parse::<Priority>().map_err(|e| {
            DbErr::Custom(format!(
                "Failed to parse priority of announcement {}: {}",
                entity.id, e
            ))
        })?;
        let target_audience: Vec<Audience> = serde_json::from_value(entity.target_audience)
            .map_err(|e| {
                DbErr::Custom(format!(
                    "Failed to decode target audience of announcement {}: {}",
                    entity.id, e
                ))
            })?;
        let attachments: Vec<String> = serde_json::from_value(entity.attachments).map_err(|e| {
            DbErr::Custom(format!(
                "Failed to decode attachments of announcement {}: {}",
                entity.id, e
            ))
        })?;

        Ok(Self {
            id: entity.id,
            title: entity.title,
            content: entity.content,
            author_id: entity.author_id,
            priority,
            target_audience,
            attachments,
            expires_at: entity.expires_at,
            created_at: entity.created_at,
        })
    }
}

/// Announcement with its author's public identity populated.
#[derive(Debug, Clone)]
pub struct AnnouncementWithAuthor {
    pub announcement: Announcement,
    pub author: UserSummary,
}

impl AnnouncementWithAuthor {
    pub fn into_dto(self) -> AnnouncementDto {
        AnnouncementDto {
            id: self.announcement.id,
            title: self.announcement.title,
            content: self.announcement.content,
            author: self.author.into_dto(),
            priority: self.announcement.priority,
            target_audience: self.announcement.target_audience,
            attachments: self.announcement.attachments,
            expires_at: self.announcement.expires_at,
            created_at: self.announcement.created_at,
        }
    }
}

/// Validated announcement record used for both create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnouncementParams {
    pub title: String,
    pub content: String,
    pub priority: Priority,
    pub target_audience: Vec<Audience>,
    pub attachments: Vec<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl AnnouncementParams {
    /// Validates a submitted announcement.
    ///
    /// Trims the title and collapses duplicate audience entries, keeping first occurrence
    /// order.
    ///
    /// # Returns
    /// - `Ok(AnnouncementParams)` - Validated record
    /// - `Err(AppError::BadRequest)` - Empty title or content
    pub fn from_dto(dto: CreateAnnouncementDto) -> Result<Self, AppError> {
        let title = dto.title.trim().to_string();
        if title.is_empty() {
            return Err(AppError::BadRequest("Title is required".to_string()));
        }
        if dto.content.trim().is_empty() {
            return Err(AppError::BadRequest("Content is required".to_string()));
        }

        let mut target_audience = Vec::with_capacity(dto.target_audience.len());
        for audience in dto.target_audience {
            if !target_audience.contains(&audience) {
                target_audience.push(audience);
            }
        }

        Ok(Self {
            title,
            content: dto.content,
            priority: dto.priority,
            target_audience,
            attachments: dto.attachments,
            expires_at: dto.expires_at,
        })
    }
}
