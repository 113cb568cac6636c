//! Domain layer for the rental registry
//!
//! Vehicles, customers and rental records, the append-only rental history,
//! and the [`RentalSystem`](service::RentalSystem) that ties them together.

pub mod model;
pub mod repository;
pub mod service;

pub use model::{Customer, RentalHistory, RentalRecord, Vehicle};
pub use repository::Repositories;
pub use service::RentalSystem;
