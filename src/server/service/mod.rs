//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They validate incoming
//! payloads, run the explicit load, merge and store sequence for partial updates, and feed
//! fresh reads into the aggregation engine. Pure logic lives in its own modules:
//!
//! - [`aggregate`]: statistics computed from record slices
//! - [`lifecycle`]: request status vocabulary rules
//! - [`validation`]: declarative field rules

pub mod aggregate;
pub mod client;
pub mod department;
pub mod employee;
pub mod finance;
pub mod lifecycle;
pub mod request;
pub mod validation;

#[cfg(test)]
mod test;
