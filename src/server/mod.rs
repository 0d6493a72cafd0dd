//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation: API endpoints, business
//! logic, data access and infrastructure. The backend uses Axum as the web framework and
//! SeaORM over SQLite for persistence. Authentication is stateless with bearer tokens.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business rules, ownership checks, RSVP outcomes
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and validated parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Authentication guard and ownership permissions
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool, token service)
//! - **Startup** (`startup`) - Database connection, migrations, logging, shutdown signal
//! - **Router** (`router`) - Route table, OpenAPI document and HTTP layers
//! - **Utilities** (`util`) - Password hashing and the JSON body extractor
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** authenticates through `AuthGuard` when the route is protected and
//!    converts the DTO into validated params
//! 3. **Service** loads the resource, checks ownership, applies business rules
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO and returns the response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
