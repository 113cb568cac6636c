//! Error types for the rental registry

use std::path::PathBuf;

use thiserror::Error;

use crate::VehicleStatus;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Vehicle with plate {0} already exists")]
    DuplicatePlate(String),

    #[error("Customer with ID {0} already exists")]
    DuplicateCustomer(u32),

    #[error("Vehicle has no license plate")]
    MissingPlate,

    #[error("No vehicle with plate {0}")]
    VehicleNotFound(String),

    #[error("No customer with ID {0}")]
    CustomerNotFound(u32),

    #[error("Vehicle {plate} is not available for renting (status: {status})")]
    NotAvailable { plate: String, status: VehicleStatus },

    #[error("Vehicle {plate} is not rented (status: {status})")]
    NotRented { plate: String, status: VehicleStatus },

    #[error("Cannot change vehicle {plate} from {from} to {to}; use rent/return")]
    InvalidStatusChange {
        plate: String,
        from: VehicleStatus,
        to: VehicleStatus,
    },

    #[error("Invalid customer ID: {0:?}")]
    InvalidCustomerId(String),

    #[error("Invalid date {0:?} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),

    #[error("Failed to write {}: {source}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Session(String),
}

pub type Result<T> = std::result::Result<T, Error>;
