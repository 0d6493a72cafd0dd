//! Announcement factory for creating test announcement entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test announcements with customizable fields.
pub struct AnnouncementFactory<'a> {
    db: &'a DatabaseConnection,
    author_id: i32,
    title: String,
    content: String,
    priority: String,
    created_at: DateTime<Utc>,
}

impl<'a> AnnouncementFactory<'a> {
    /// Creates a new AnnouncementFactory for the given author.
    ///
    /// Defaults: title `"Announcement {id}"`, priority `"Medium"`, created now, no
    /// audience, attachments or expiry.
    pub fn new(db: &'a DatabaseConnection, author_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            author_id,
            title: format!("Announcement {}", id),
            content: format!("Content of announcement {}", id),
            priority: "Medium".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the stored priority name (`Low`, `Medium` or `High`).
    pub fn priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = priority.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the announcement entity into the database.
    pub async fn build(self) -> Result<entity::announcement::Model, DbErr> {
        entity::announcement::ActiveModel {
            title: ActiveValue::Set(self.title),
            content: ActiveValue::Set(self.content),
            author_id: ActiveValue::Set(self.author_id),
            priority: ActiveValue::Set(self.priority),
            target_audience: ActiveValue::Set(serde_json::json!([])),
            attachments: ActiveValue::Set(serde_json::json!([])),
            expires_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an announcement with default values for the given author.
pub async fn create_announcement(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<entity::announcement::Model, DbErr> {
    AnnouncementFactory::new(db, author_id).build().await
}
