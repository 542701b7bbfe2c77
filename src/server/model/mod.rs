//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and into DTOs
//! at the controller boundary. Each record type also carries its partial-update patch and the
//! merge function applying it, so the load → merge → store sequence stays explicit in the
//! service layer.

pub mod client;
pub mod department;
pub mod employee;
pub mod invoice;
pub mod request;
pub mod stats;
