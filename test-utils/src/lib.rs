//! Back-office Test Utils
//!
//! Shared testing utilities for the back-office backend. This crate offers a builder for
//! creating test contexts backed by in-memory SQLite databases, plus factories that insert
//! records with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring the tables a test needs
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Errors that can occur during test setup
//! - **factory**: Record factories for every collection
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//! use entity::prelude::Client;
//!
//! #[tokio::test]
//! async fn lists_clients() -> Result<(), DbErr> {
//!     let test = TestBuilder::new().with_table(Client).build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     factory::create_client(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
