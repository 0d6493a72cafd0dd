//! Wire-level DTOs exchanged with API clients.
//!
//! Field names follow the camelCase convention the web client expects. Domain models in
//! `server::model` convert to and from these types at the controller boundary.

pub mod announcement;
pub mod api;
pub mod event;
pub mod user;
