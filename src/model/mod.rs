//! API data transfer objects.
//!
//! Request and response bodies exchanged with HTTP callers. Field names are camelCase on the
//! wire. Server-side domain models convert into these at the controller boundary.

pub mod api;
pub mod client;
pub mod department;
pub mod employee;
pub mod invoice;
pub mod request;
