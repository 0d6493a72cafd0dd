//! Domain models and operation-specific parameter types.
//!
//! Repositories convert entity rows into these models at the data-layer boundary;
//! controllers convert them to DTOs. Parameter types are built from request DTOs and
//! carry input that has already been validated and normalized.

pub mod announcement;
pub mod event;
pub mod user;
