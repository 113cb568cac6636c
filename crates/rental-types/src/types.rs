//! Shared vocabulary types for vehicles, rentals and persistence

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Vehicle variant. Only the label differs between kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
pub enum VehicleKind {
    Car,
    Motorcycle,
    Truck,
}

impl VehicleKind {
    /// Display label used in vehicle tables
    pub fn label(&self) -> &'static str {
        match self {
            VehicleKind::Car => "Car",
            VehicleKind::Motorcycle => "Motorcycle",
            VehicleKind::Truck => "Truck",
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lifecycle status of a tracked vehicle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VehicleStatus {
    #[default]
    Available,
    Reserved,
    Rented,
    Maintenance,
    #[value(alias = "outofservice")]
    OutOfService,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "AVAILABLE",
            VehicleStatus::Reserved => "RESERVED",
            VehicleStatus::Rented => "RENTED",
            VehicleStatus::Maintenance => "MAINTENANCE",
            VehicleStatus::OutOfService => "OUTOFSERVICE",
        }
    }
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of rental transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordKind {
    Rent,
    Return,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Rent => f.write_str("RENT"),
            RecordKind::Return => f.write_str("RETURN"),
        }
    }
}

/// What to do with an in-memory change when its file append fails
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersistPolicy {
    /// Keep the change in memory and report the error
    #[default]
    Keep,
    /// Undo the change in memory, then report the error
    Rollback,
}

impl fmt::Display for PersistPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistPolicy::Keep => write!(f, "keep"),
            PersistPolicy::Rollback => write!(f, "rollback"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_renders_upper_case() {
        assert_eq!(VehicleStatus::OutOfService.to_string(), "OUTOFSERVICE");
        assert_eq!(
            serde_json::to_string(&VehicleStatus::Rented).unwrap(),
            "\"RENTED\""
        );
    }

    #[test]
    fn test_status_accepts_cli_names() {
        let status = VehicleStatus::from_str("outofservice", true).unwrap();
        assert_eq!(status, VehicleStatus::OutOfService);
        let status = VehicleStatus::from_str("Maintenance", true).unwrap();
        assert_eq!(status, VehicleStatus::Maintenance);
    }

    #[test]
    fn test_default_status_is_available() {
        assert_eq!(VehicleStatus::default(), VehicleStatus::Available);
    }
}
