//! Announcement service.
//!
//! Reads are public. Writes take the acting user, who becomes the author on create and
//! must be the author or an admin on update and delete.

use sea_orm::DatabaseConnection;

use crate::{
    model::announcement::Priority,
    server::{
        data::announcement::AnnouncementRepository,
        error::AppError,
        middleware::auth::Permission,
        model::{
            announcement::{AnnouncementParams, AnnouncementWithAuthor},
            user::User,
        },
    },
};

pub struct AnnouncementService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnnouncementService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists announcements newest first, optionally only those with `priority`.
    pub async fn list(
        &self,
        priority: Option<Priority>,
    ) -> Result<Vec<AnnouncementWithAuthor>, AppError> {
        let repo = AnnouncementRepository::new(self.db);

        Ok(repo.get_all(priority).await?)
    }

    /// Gets a single announcement.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No announcement with that id
    pub async fn get(&self, id: i32) -> Result<AnnouncementWithAuthor, AppError> {
        let repo = AnnouncementRepository::new(self.db);

        repo.get_by_id(id).await?.ok_or_else(not_found)
    }

    /// Creates an announcement authored by `author`.
    pub async fn create(
        &self,
        author: &User,
        params: AnnouncementParams,
    ) -> Result<AnnouncementWithAuthor, AppError> {
        let repo = AnnouncementRepository::new(self.db);

        let announcement = repo.create(author.id, params).await?;

        // Fetch with author populated
        self.get(announcement.id).await
    }

    /// Replaces an announcement's content on behalf of `actor`.
    ///
    /// Existence is checked before ownership, so a missing announcement is a 404 for
    /// everyone.
    ///
    /// # Returns
    /// - `Ok(AnnouncementWithAuthor)` - Updated announcement
    /// - `Err(AppError::NotFound)` - No announcement with that id
    /// - `Err(AppError::AuthErr(AccessDenied))` - Actor is neither author nor admin
    pub async fn update(
        &self,
        actor: &User,
        id: i32,
        params: AnnouncementParams,
    ) -> Result<AnnouncementWithAuthor, AppError> {
        let repo = AnnouncementRepository::new(self.db);

        let existing = repo.get_by_id(id).await?.ok_or_else(not_found)?;
        Permission::AnnouncementAuthor(existing.announcement.author_id).check(actor)?;

        repo.update(id, params).await?.ok_or_else(not_found)?;

        self.get(id).await
    }

    /// Deletes an announcement on behalf of `actor`.
    ///
    /// # Returns
    /// - `Ok(())` - Announcement deleted
    /// - `Err(AppError::NotFound)` - No announcement with that id
    /// - `Err(AppError::AuthErr(AccessDenied))` - Actor is neither author nor admin
    pub async fn delete(&self, actor: &User, id: i32) -> Result<(), AppError> {
        let repo = AnnouncementRepository::new(self.db);

        let existing = repo.get_by_id(id).await?.ok_or_else(not_found)?;
        Permission::AnnouncementAuthor(existing.announcement.author_id).check(actor)?;

        if !repo.delete(id).await? {
            return Err(not_found());
        }

        tracing::info!("User {} deleted announcement {}", actor.id, id);

        Ok(())
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Announcement not found".to_string())
}
