//! Announcement data repository.
//!
//! Announcements are always returned with their author's summary populated. Lists are
//! ordered newest first.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::{
    model::announcement::Priority,
    server::model::{
        announcement::{Announcement, AnnouncementParams, AnnouncementWithAuthor},
        user::UserSummary,
    },
};

pub struct AnnouncementRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnnouncementRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new announcement owned by `author_id`.
    ///
    /// # Returns
    /// - `Ok(Announcement)` - The created announcement
    /// - `Err(DbErr)` - Database error, including a foreign key violation for an unknown author
    pub async fn create(
        &self,
        author_id: i32,
        params: AnnouncementParams,
    ) -> Result<Announcement, DbErr> {
        let entity = entity::announcement::ActiveModel {
            title: ActiveValue::Set(params.title),
            content: ActiveValue::Set(params.content),
            author_id: ActiveValue::Set(author_id),
            priority: ActiveValue::Set(params.priority.as_str().to_string()),
            target_audience: ActiveValue::Set(serde_json::json!(params.target_audience)),
            attachments: ActiveValue::Set(serde_json::json!(params.attachments)),
            expires_at: ActiveValue::Set(params.expires_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Announcement::from_entity(entity)
    }

    /// Gets an announcement by id with its author.
    ///
    /// # Returns
    /// - `Ok(Some(AnnouncementWithAuthor))` - Announcement found
    /// - `Ok(None)` - No announcement with that id
    /// - `Err(DbErr)` - Database error or dangling author reference
    pub async fn get_by_id(&self, id: i32) -> Result<Option<AnnouncementWithAuthor>, DbErr> {
        let result = entity::prelude::Announcement::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        result.map(with_author).transpose()
    }

    /// Gets all announcements, newest first, optionally restricted to one priority.
    pub async fn get_all(
        &self,
        priority: Option<Priority>,
    ) -> Result<Vec<AnnouncementWithAuthor>, DbErr> {
        let mut query = entity::prelude::Announcement::find();
        if let Some(priority) = priority {
            query = query.filter(entity::announcement::Column::Priority.eq(priority.as_str()));
        }

        let results = query
            .order_by_desc(entity::announcement::Column::CreatedAt)
            .order_by_desc(entity::announcement::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        results.into_iter().map(with_author).collect()
    }

    /// Replaces an announcement's content fields. Author and creation time are kept.
    ///
    /// # Returns
    /// - `Ok(Some(Announcement))` - The updated announcement
    /// - `Ok(None)` - No announcement with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        params: AnnouncementParams,
    ) -> Result<Option<Announcement>, DbErr> {
        let result = entity::announcement::ActiveModel {
            id: ActiveValue::Unchanged(id),
            title: ActiveValue::Set(params.title),
            content: ActiveValue::Set(params.content),
            priority: ActiveValue::Set(params.priority.as_str().to_string()),
            target_audience: ActiveValue::Set(serde_json::json!(params.target_audience)),
            attachments: ActiveValue::Set(serde_json::json!(params.attachments)),
            expires_at: ActiveValue::Set(params.expires_at),
            ..Default::default()
        }
        .update(self.db)
        .await;

        match result {
            Ok(entity) => Announcement::from_entity(entity).map(Some),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Deletes an announcement.
    ///
    /// # Returns
    /// - `Ok(true)` - Announcement deleted
    /// - `Ok(false)` - No announcement with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Announcement::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

fn with_author(
    (announcement, author): (entity::announcement::Model, Option<entity::user::Model>),
) -> Result<AnnouncementWithAuthor, DbErr> {
    let author = author.ok_or_else(|| {
        DbErr::RecordNotFound(format!(
            "Author {} of announcement {} not found",
            announcement.author_id, announcement.id
        ))
    })?;

    Ok(AnnouncementWithAuthor {
        announcement: Announcement::from_entity(announcement)?,
        author: UserSummary::from_entity(author),
    })
}
