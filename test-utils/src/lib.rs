//! UniVerse Test Utils
//!
//! Shared testing utilities for the UniVerse backend. Provides a builder for test contexts
//! backed by in-memory SQLite databases whose schemas are generated from the SeaORM entities,
//! plus factories that insert rows with sensible defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn registers_attendee() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_event_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (organizer, event) = factory::helpers::create_event_with_organizer(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
