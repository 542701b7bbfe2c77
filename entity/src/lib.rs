//! SeaORM entity models for the back-office record store.

pub mod prelude;

pub mod client;
pub mod department;
pub mod employee;
pub mod invoice;
pub mod request;
