//! Event service, including RSVP registration.
//!
//! Only the organizer may change or delete an event. Any authenticated user may RSVP,
//! bounded by the event's capacity; the capacity check itself runs inside the data layer's
//! conditional insert so concurrent RSVPs cannot overfill an event.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::event::EventRepository,
    error::{rsvp::RsvpError, AppError},
    middleware::auth::Permission,
    model::{
        event::{EventParams, EventWithRelations},
        user::User,
    },
};

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all events by date ascending.
    pub async fn list(&self) -> Result<Vec<EventWithRelations>, AppError> {
        let repo = EventRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a single event with organizer and attendees.
    pub async fn get(&self, id: i32) -> Result<EventWithRelations, AppError> {
        let repo = EventRepository::new(self.db);

        repo.get_by_id(id).await?.ok_or_else(not_found)
    }

    /// Creates an event organized by `organizer`.
    pub async fn create(
        &self,
        organizer: &User,
        params: EventParams,
    ) -> Result<EventWithRelations, AppError> {
        let repo = EventRepository::new(self.db);

        let event = repo.create(organizer.id, params).await?;

        self.get(event.id).await
    }

    /// Replaces an event's content on behalf of `actor`.
    ///
    /// # Returns
    /// - `Ok(EventWithRelations)` - Updated event
    /// - `Err(AppError::NotFound)` - No event with that id
    /// - `Err(AppError::AuthErr(AccessDenied))` - Actor is not the organizer
    /// - `Err(AppError::BadRequest)` - New capacity is below the current attendee count
    pub async fn update(
        &self,
        actor: &User,
        id: i32,
        params: EventParams,
    ) -> Result<EventWithRelations, AppError> {
        let repo = EventRepository::new(self.db);

        let existing = repo.get_by_id(id).await?.ok_or_else(not_found)?;
        Permission::EventOrganizer(existing.event.organizer_id).check(actor)?;

        let max_attendees = params.max_attendees;
        if !repo.update(id, params).await? {
            // Either the event vanished or the capacity guard refused the write.
            if !repo.exists(id).await? {
                return Err(not_found());
            }
            let attendees = repo.count_attendees(id).await?;
            return Err(AppError::BadRequest(format!(
                "maxAttendees ({}) cannot be lower than the current number of attendees ({})",
                max_attendees.unwrap_or_default(),
                attendees
            )));
        }

        self.get(id).await
    }

    /// Deletes an event and its attendee rows on behalf of `actor`.
    ///
    /// # Returns
    /// - `Ok(())` - Event deleted
    /// - `Err(AppError::NotFound)` - No event with that id
    /// - `Err(AppError::AuthErr(AccessDenied))` - Actor is not the organizer
    pub async fn delete(&self, actor: &User, id: i32) -> Result<(), AppError> {
        let repo = EventRepository::new(self.db);

        let existing = repo.get_by_id(id).await?.ok_or_else(not_found)?;
        Permission::EventOrganizer(existing.event.organizer_id).check(actor)?;

        if !repo.delete(id).await? {
            return Err(not_found());
        }

        tracing::info!(
            "User {} deleted event {} with {} attendees",
            actor.id,
            id,
            existing.attendees.len()
        );

        Ok(())
    }

    /// Registers `user` for event `id`.
    ///
    /// # Returns
    /// - `Ok(EventWithRelations)` - Event with the user among its attendees
    /// - `Err(AppError::NotFound)` - No event with that id
    /// - `Err(RsvpError::AlreadyRegistered)` - User was already registered
    /// - `Err(RsvpError::EventFull)` - Capacity reached
    pub async fn rsvp(&self, user: &User, id: i32) -> Result<EventWithRelations, AppError> {
        let repo = EventRepository::new(self.db);

        if !repo.exists(id).await? {
            return Err(not_found());
        }

        if !repo.add_attendee_if_available(id, user.id).await? {
            // Nothing inserted; find out which condition refused it.
            let current = self.get(id).await?;
            if current.is_attendee(user.id) {
                return Err(RsvpError::AlreadyRegistered {
                    event_id: id,
                    user_id: user.id,
                }
                .into());
            }
            tracing::debug!("User {} could not RSVP to full event {}", user.id, id);
            return Err(RsvpError::EventFull { event_id: id }.into());
        }

        tracing::debug!("User {} registered for event {}", user.id, id);

        self.get(id).await
    }

    /// Cancels `user`'s registration for event `id`. Cancelling without a registration
    /// succeeds and changes nothing.
    ///
    /// # Returns
    /// - `Ok(EventWithRelations)` - Event without the user among its attendees
    /// - `Err(AppError::NotFound)` - No event with that id
    pub async fn cancel_rsvp(&self, user: &User, id: i32) -> Result<EventWithRelations, AppError> {
        let repo = EventRepository::new(self.db);

        if !repo.exists(id).await? {
            return Err(not_found());
        }

        let removed = repo.remove_attendee(id, user.id).await?;
        if removed > 0 {
            tracing::debug!("User {} cancelled RSVP for event {}", user.id, id);
        }

        self.get(id).await
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Event not found".to_string())
}
