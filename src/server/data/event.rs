//! Event data repository, including the attendee relation used for RSVP.
//!
//! Events are returned with organizer and attendee summaries populated. Attendee rows are
//! loaded in one batched query per call rather than per event.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, Query},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use std::collections::HashMap;

use crate::server::model::{
    event::{Event, EventParams, EventWithRelations},
    user::UserSummary,
};

pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new event organized by `organizer_id` with no attendees.
    ///
    /// # Returns
    /// - `Ok(Event)` - The created event
    /// - `Err(DbErr)` - Database error, including a foreign key violation for an unknown organizer
    pub async fn create(&self, organizer_id: i32, params: EventParams) -> Result<Event, DbErr> {
        let entity = entity::event::ActiveModel {
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            date: ActiveValue::Set(params.date),
            location: ActiveValue::Set(params.location),
            category: ActiveValue::Set(params.category.as_str().to_string()),
            organizer_id: ActiveValue::Set(organizer_id),
            max_attendees: ActiveValue::Set(params.max_attendees),
            image: ActiveValue::Set(params.image),
            tags: ActiveValue::Set(serde_json::json!(params.tags)),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Event::from_entity(entity)
    }

    /// Checks whether an event with `id` exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Event::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }

    /// Gets an event by id with organizer and attendees.
    ///
    /// # Returns
    /// - `Ok(Some(EventWithRelations))` - Event found
    /// - `Ok(None)` - No event with that id
    /// - `Err(DbErr)` - Database error or dangling organizer reference
    pub async fn get_by_id(&self, id: i32) -> Result<Option<EventWithRelations>, DbErr> {
        let result = entity::prelude::Event::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        let Some(row) = result else {
            return Ok(None);
        };

        let mut events = self.with_relations(vec![row]).await?;

        Ok(events.pop())
    }

    /// Gets all events ordered by date ascending.
    pub async fn get_all(&self) -> Result<Vec<EventWithRelations>, DbErr> {
        let rows = entity::prelude::Event::find()
            .order_by_asc(entity::event::Column::Date)
            .order_by_asc(entity::event::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        self.with_relations(rows).await
    }

    /// Gets the events `user_id` is registered for, ordered by date ascending.
    pub async fn get_by_attendee(&self, user_id: i32) -> Result<Vec<EventWithRelations>, DbErr> {
        let event_ids = self.get_event_ids_by_attendee(user_id).await?;
        if event_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = entity::prelude::Event::find()
            .filter(entity::event::Column::Id.is_in(event_ids))
            .order_by_asc(entity::event::Column::Date)
            .order_by_asc(entity::event::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        self.with_relations(rows).await
    }

    /// Gets the ids of the events `user_id` is registered for, in registration order.
    pub async fn get_event_ids_by_attendee(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::EventAttendee::find()
            .select_only()
            .column(entity::event_attendee::Column::EventId)
            .filter(entity::event_attendee::Column::UserId.eq(user_id))
            .order_by_asc(entity::event_attendee::Column::RegisteredAt)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Replaces an event's content fields. Organizer, attendees and creation time are kept.
    ///
    /// When `params.max_attendees` is set, the update only applies if the current attendee
    /// count does not exceed it; the guard is evaluated in the same statement as the write.
    ///
    /// # Returns
    /// - `Ok(true)` - Event updated
    /// - `Ok(false)` - No event with that id, or the new capacity is below the attendee count
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, params: EventParams) -> Result<bool, DbErr> {
        let capacity_guard = match params.max_attendees {
            Some(max) => Condition::all().add(Expr::cust_with_values(
                "(SELECT COUNT(*) FROM event_attendee WHERE event_id = ?) <= ?",
                [id, max],
            )),
            None => Condition::all(),
        };

        let result = entity::prelude::Event::update_many()
            .set(entity::event::ActiveModel {
                title: ActiveValue::Set(params.title),
                description: ActiveValue::Set(params.description),
                date: ActiveValue::Set(params.date),
                location: ActiveValue::Set(params.location),
                category: ActiveValue::Set(params.category.as_str().to_string()),
                max_attendees: ActiveValue::Set(params.max_attendees),
                image: ActiveValue::Set(params.image),
                tags: ActiveValue::Set(serde_json::json!(params.tags)),
                ..Default::default()
            })
            .filter(entity::event::Column::Id.eq(id))
            .filter(capacity_guard)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes an event together with its attendee rows in one transaction.
    ///
    /// # Returns
    /// - `Ok(true)` - Event deleted
    /// - `Ok(false)` - No event with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::EventAttendee::delete_many()
            .filter(entity::event_attendee::Column::EventId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Event::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// Registers `user_id` for `event_id` if they are not registered and a slot is free.
    ///
    /// # Returns
    /// - `Ok(true)` - Attendee row inserted
    /// - `Ok(false)` - Nothing inserted: event missing, already registered, or full
    /// - `Err(DbErr)` - Database error during insert
    pub async fn add_attendee_if_available(
        &self,
        event_id: i32,
        user_id: i32,
    ) -> Result<bool, DbErr> {
        // Capacity check and insert run as one statement so two concurrent RSVPs for the
        // last open slot cannot both succeed.
        let candidate = Query::select()
            .expr(Expr::col((entity::event::Entity, entity::event::Column::Id)))
            .expr(Expr::val(user_id))
            .expr(Expr::val(Utc::now()))
            .from(entity::event::Entity)
            .and_where(entity::event::Column::Id.eq(event_id))
            .and_where(Expr::cust_with_values(
                "NOT EXISTS (SELECT 1 FROM event_attendee a WHERE a.event_id = event.id AND a.user_id = ?)",
                [user_id],
            ))
            .and_where(Expr::cust(
                "(event.max_attendees IS NULL OR \
                 (SELECT COUNT(*) FROM event_attendee a WHERE a.event_id = event.id) < event.max_attendees)",
            ))
            .to_owned();

        let insert = Query::insert()
            .into_table(entity::event_attendee::Entity)
            .columns([
                entity::event_attendee::Column::EventId,
                entity::event_attendee::Column::UserId,
                entity::event_attendee::Column::RegisteredAt,
            ])
            .select_from(candidate)
            .map_err(|e| DbErr::Custom(format!("Failed to build attendee insert: {}", e)))?
            .to_owned();

        let result = self.db.execute(&insert).await?;

        Ok(result.rows_affected() > 0)
    }

    /// Removes `user_id` from the attendees of `event_id`. Removing a non-member is a no-op.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of attendee rows removed (0 or 1)
    pub async fn remove_attendee(&self, event_id: i32, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::EventAttendee::delete_many()
            .filter(entity::event_attendee::Column::EventId.eq(event_id))
            .filter(entity::event_attendee::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Counts the attendees registered for `event_id`.
    pub async fn count_attendees(&self, event_id: i32) -> Result<u64, DbErr> {
        entity::prelude::EventAttendee::find()
            .filter(entity::event_attendee::Column::EventId.eq(event_id))
            .count(self.db)
            .await
    }

    /// Attaches organizer and attendee summaries to event rows, preserving row order.
    async fn with_relations(
        &self,
        rows: Vec<(entity::event::Model, Option<entity::user::Model>)>,
    ) -> Result<Vec<EventWithRelations>, DbErr> {
        let event_ids: Vec<i32> = rows.iter().map(|(event, _)| event.id).collect();

        let mut attendees_by_event: HashMap<i32, Vec<UserSummary>> = HashMap::new();
        if !event_ids.is_empty() {
            let attendee_rows = entity::prelude::EventAttendee::find()
                .filter(entity::event_attendee::Column::EventId.is_in(event_ids))
                .order_by_asc(entity::event_attendee::Column::RegisteredAt)
                .order_by_asc(entity::event_attendee::Column::UserId)
                .find_also_related(entity::prelude::User)
                .all(self.db)
                .await?;

            for (attendee, user) in attendee_rows {
                let user = user.ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Attendee {} of event {} not found",
                        attendee.user_id, attendee.event_id
                    ))
                })?;
                attendees_by_event
                    .entry(attendee.event_id)
                    .or_default()
                    .push(UserSummary::from_entity(user));
            }
        }

        rows.into_iter()
            .map(|(event, organizer)| {
                let organizer = organizer.ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Organizer {} of event {} not found",
                        event.organizer_id, event.id
                    ))
                })?;
                let attendees = attendees_by_event.remove(&event.id).unwrap_or_default();

                Ok(EventWithRelations {
                    event: Event::from_entity(event)?,
                    organizer: UserSummary::from_entity(organizer),
                    attendees,
                })
            })
            .collect()
    }
}
