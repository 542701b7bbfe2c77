//! HTTP handlers.
//!
//! Handlers are thin: they check the bearer token where the route requires one, hand the
//! payload to a service and map the result to a DTO. Every handler carries a
//! `#[utoipa::path]` annotation collected by the OpenAPI document in `router`.

pub mod client;
pub mod department;
pub mod employee;
pub mod finance;
pub mod health;
pub mod request;
