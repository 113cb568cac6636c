//! Persistence implementations
//!
//! This module provides append-only text file implementations of the
//! repository traits. Each file holds one rendered entity per line.

mod append_log;
mod file_customer_repo;
mod file_rental_record_repo;
mod file_vehicle_repo;

pub use append_log::AppendLog;
pub use file_customer_repo::{FileCustomerRepository, CUSTOMERS_FILE};
pub use file_rental_record_repo::{FileRentalRecordRepository, RENTAL_RECORDS_FILE};
pub use file_vehicle_repo::{FileVehicleRepository, VEHICLES_FILE};
