//! Application state shared across all request handlers.
//!
//! `AppState` is initialized once during startup and cloned for each request handler through
//! Axum's state extraction. It holds the database connection pool backing the record store
//! and the identity gate that verifies bearer tokens.

use sea_orm::DatabaseConnection;

use crate::server::middleware::auth::IdentityGate;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a pool handle and `IdentityGate`
/// only holds the decoding key and validation settings.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing the record store.
    pub db: DatabaseConnection,

    /// Bearer token verifier used by `AuthGuard` on protected routes.
    pub identity_gate: IdentityGate,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `identity_gate` - Bearer token verifier
    pub fn new(db: DatabaseConnection, identity_gate: IdentityGate) -> Self {
        Self { db, identity_gate }
    }
}
