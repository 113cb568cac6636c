//! Domain model types

pub mod customer;
pub mod rental_record;
pub mod vehicle;

pub use customer::Customer;
pub use rental_record::{RentalHistory, RentalRecord};
pub use vehicle::Vehicle;
