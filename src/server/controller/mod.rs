//! HTTP handlers.
//!
//! Protected handlers take an `AuthUser` ahead of any body extractor. Each handler converts
//! DTOs into validated params, calls the matching service and converts the domain result
//! back into a DTO.

pub mod announcement;
pub mod event;
pub mod user;

#[cfg(test)]
mod test;
