//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to keep the data layer separate from business logic. All database queries,
//! inserts, updates, and deletes are performed through these repositories.

pub mod announcement;
pub mod event;
pub mod user;
