//! Event factory for creating test event entities and attendee rows.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test events with customizable fields.
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    organizer_id: i32,
    title: String,
    date: DateTime<Utc>,
    category: String,
    max_attendees: Option<i32>,
}

impl<'a> EventFactory<'a> {
    /// Creates a new EventFactory for the given organizer.
    ///
    /// Defaults: title `"Event {id}"`, one week from now, category `"Workshop"`, no
    /// capacity limit.
    pub fn new(db: &'a DatabaseConnection, organizer_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            organizer_id,
            title: format!("Event {}", id),
            date: Utc::now() + Duration::days(7),
            category: "Workshop".to_string(),
            max_attendees: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// Sets the stored category name.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn max_attendees(mut self, max_attendees: Option<i32>) -> Self {
        self.max_attendees = max_attendees;
        self
    }

    /// Builds and inserts the event entity into the database.
    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        entity::event::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set("An event for testing".to_string()),
            date: ActiveValue::Set(self.date),
            location: ActiveValue::Set("Main Hall".to_string()),
            category: ActiveValue::Set(self.category),
            organizer_id: ActiveValue::Set(self.organizer_id),
            max_attendees: ActiveValue::Set(self.max_attendees),
            image: ActiveValue::Set(None),
            tags: ActiveValue::Set(serde_json::json!([])),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an event with default values for the given organizer.
pub async fn create_event(
    db: &DatabaseConnection,
    organizer_id: i32,
) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db, organizer_id).build().await
}

/// Registers a user as an attendee of an event directly, bypassing capacity checks.
pub async fn add_attendee(
    db: &DatabaseConnection,
    event_id: i32,
    user_id: i32,
) -> Result<entity::event_attendee::Model, DbErr> {
    entity::event_attendee::ActiveModel {
        event_id: ActiveValue::Set(event_id),
        user_id: ActiveValue::Set(user_id),
        registered_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
