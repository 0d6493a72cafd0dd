//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` struct for customization and a `create_*` convenience
//! function for quick default creation. Factories fill every required column so tests
//! only spell out the values they care about.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let admin = factory::user::UserFactory::new(&db).role("Admin").build().await?;
//!
//! let event = factory::event::EventFactory::new(&db, user.id)
//!     .max_attendees(Some(1))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `announcement` - Create announcement entities
//! - `event` - Create event entities and attendee rows
//! - `helpers` - Id counter and entities created together with their dependencies

pub mod announcement;
pub mod event;
pub mod helpers;
pub mod user;

pub use announcement::create_announcement;
pub use event::{add_attendee, create_event};
pub use user::create_user;
