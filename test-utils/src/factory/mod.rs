//! Factory methods for creating test records.
//!
//! Each collection has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation. Factories insert directly through
//! SeaORM active models, bypassing the application's validation layer.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let client = factory::create_client(&db).await?;
//!
//! let invoice = factory::invoice::InvoiceFactory::new(&db)
//!     .amount(1000.0)
//!     .status("Paid")
//!     .service("Consulting")
//!     .build()
//!     .await?;
//! ```

pub mod client;
pub mod department;
pub mod employee;
pub mod helpers;
pub mod invoice;
pub mod request;

pub use client::create_client;
pub use department::create_department;
pub use employee::create_employee;
pub use invoice::create_invoice;
pub use request::create_request;
