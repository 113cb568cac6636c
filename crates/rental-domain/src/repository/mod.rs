//! Repository trait definitions for data persistence
//!
//! Every repository is append-only: the registry writes one entry per
//! successful mutation and never reads entries back.

use rental_types::Error;

use crate::model::{Customer, RentalRecord, Vehicle};

/// Append-only sink for vehicles
pub trait VehicleRepository {
    /// Append a vehicle snapshot
    fn append(&self, vehicle: &Vehicle) -> Result<(), Error>;
}

/// Append-only sink for customers
pub trait CustomerRepository {
    /// Append a customer
    fn append(&self, customer: &Customer) -> Result<(), Error>;
}

/// Append-only sink for rental records
pub trait RentalRecordRepository {
    /// Append a rent or return record
    fn append(&self, record: &RentalRecord) -> Result<(), Error>;
}

/// The three repositories a [`RentalSystem`](crate::RentalSystem) writes to
pub struct Repositories {
    pub vehicles: Box<dyn VehicleRepository>,
    pub customers: Box<dyn CustomerRepository>,
    pub records: Box<dyn RentalRecordRepository>,
}
