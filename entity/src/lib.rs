//! SeaORM entities for the UniVerse store.

pub mod prelude;

pub mod announcement;
pub mod event;
pub mod event_attendee;
pub mod user;
