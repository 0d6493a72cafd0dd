pub use super::announcement::Entity as Announcement;
pub use super::event::Entity as Event;
pub use super::event_attendee::Entity as EventAttendee;
pub use super::user::Entity as User;
