//! Request guards.
//!
//! `auth` authenticates a request from its bearer token and decides whether the acting
//! user may modify a given resource.

pub mod auth;

#[cfg(test)]
mod test;
