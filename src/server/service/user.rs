//! User profile service.
//!
//! Profiles are read and written only for the authenticated user themselves; the
//! controller resolves that user through the auth guard before calling in here.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{event::EventRepository, user::UserRepository},
    error::AppError,
    model::{
        event::EventWithRelations,
        user::{UpdateProfileParams, User, UserProfile},
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the profile of `user`, including the ids of events they registered for.
    pub async fn get_profile(&self, user: User) -> Result<UserProfile, AppError> {
        let event_repo = EventRepository::new(self.db);

        let registered_events = event_repo.get_event_ids_by_attendee(user.id).await?;

        Ok(UserProfile {
            user,
            registered_events,
        })
    }

    /// Applies a profile update to `user_id` and returns the updated profile.
    ///
    /// # Returns
    /// - `Ok(UserProfile)` - Profile after the update
    /// - `Err(AppError::NotFound)` - The user disappeared between authentication and update
    pub async fn update_profile(
        &self,
        user_id: i32,
        params: UpdateProfileParams,
    ) -> Result<UserProfile, AppError> {
        let user_repo = UserRepository::new(self.db);

        let user = user_repo
            .update_profile(user_id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        self.get_profile(user).await
    }

    /// Gets the events `user_id` is registered for, ordered by date.
    pub async fn get_registered_events(
        &self,
        user_id: i32,
    ) -> Result<Vec<EventWithRelations>, AppError> {
        let event_repo = EventRepository::new(self.db);

        Ok(event_repo.get_by_attendee(user_id).await?)
    }
}
