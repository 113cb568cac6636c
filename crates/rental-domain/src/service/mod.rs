//! Domain services

pub mod rental_system;

pub use rental_system::RentalSystem;
