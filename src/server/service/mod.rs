//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Authorization**: Checking resource ownership once the resource is known to exist
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Token Handling**: Issuing and verifying identity tokens

pub mod announcement;
pub mod auth;
pub mod event;
pub mod token;
pub mod user;

#[cfg(test)]
mod test;
