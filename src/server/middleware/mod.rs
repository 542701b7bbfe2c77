//! Request guards applied by controllers before any service call.

pub mod auth;
