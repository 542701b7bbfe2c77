//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM over SQLite for the record store.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, bearer-token checks and DTO conversion
//! - **Service Layer** (`service/`) - Validation, partial-update merges, aggregation and the
//!   request lifecycle
//! - **Data Layer** (`data/`) - Repositories and the request filter builder
//! - **Model Layer** (`model/`) - Domain models, status vocabularies and parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - The identity gate
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based configuration
//! - **State** (`state`) - Shared application state (database pool and identity gate)
//! - **Startup** (`startup`) - Tracing, database connection and migrations
//! - **Router** (`router`) - Route table and OpenAPI document
//!
//! # Request Flow
//!
//! 1. **Router** routes the HTTP request to a controller
//! 2. **Controller** checks the bearer token on protected routes and calls a service
//! 3. **Service** validates the payload, then loads, merges and stores or aggregates records
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
