//! File-based vehicle repository implementation

use std::fs;
use std::path::PathBuf;

use rental_domain::model::Vehicle;
use rental_domain::repository::VehicleRepository;
use rental_types::{Error, Result};

use super::AppendLog;

/// File name of the vehicle log inside the data directory
pub const VEHICLES_FILE: &str = "vehicles.txt";

/// File-based implementation of VehicleRepository
///
/// Appends the rendered vehicle to `vehicles.txt`, one line per call.
pub struct FileVehicleRepository {
    log: AppendLog,
}

impl FileVehicleRepository {
    /// Open the vehicle log in a data directory, creating the directory
    pub fn open(data_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&data_dir)?;
        Ok(Self {
            log: AppendLog::new(data_dir.join(VEHICLES_FILE)),
        })
    }

    pub fn log(&self) -> &AppendLog {
        &self.log
    }
}

impl VehicleRepository for FileVehicleRepository {
    fn append(&self, vehicle: &Vehicle) -> std::result::Result<(), Error> {
        self.log.append_line(&vehicle.to_string())
    }
}
