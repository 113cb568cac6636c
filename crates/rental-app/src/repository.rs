//! Repository adapters for persistence layer

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use tracing::debug;

use rental_domain::{Repositories, RentalSystem};
use rental_infra::persistence::{
    AppendLog, FileCustomerRepository, FileRentalRecordRepository, FileVehicleRepository,
    CUSTOMERS_FILE, RENTAL_RECORDS_FILE, VEHICLES_FILE,
};
use rental_types::{PersistPolicy, Result};

use crate::config::Config;

/// One of the three append-only files
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Journal {
    Vehicles,
    Customers,
    Records,
}

impl Journal {
    pub fn file_name(&self) -> &'static str {
        match self {
            Journal::Vehicles => VEHICLES_FILE,
            Journal::Customers => CUSTOMERS_FILE,
            Journal::Records => RENTAL_RECORDS_FILE,
        }
    }
}

/// Open the file-based repositories in a data directory
pub fn open_repositories(data_dir: PathBuf) -> Result<Repositories> {
    Ok(Repositories {
        vehicles: Box::new(FileVehicleRepository::open(data_dir.clone())?),
        customers: Box::new(FileCustomerRepository::open(data_dir.clone())?),
        records: Box::new(FileRentalRecordRepository::open(data_dir)?),
    })
}

/// Open an empty rental system writing to the configured data directory.
///
/// Nothing is read back from existing files.
pub fn open_rental_system(config: &Config) -> Result<RentalSystem> {
    open_rental_system_at(config.data_dir()?, config.persist_policy)
}

/// Open an empty rental system writing to a custom directory
pub fn open_rental_system_at(data_dir: PathBuf, policy: PersistPolicy) -> Result<RentalSystem> {
    debug!(data_dir = %data_dir.display(), "Opening repositories");
    let repositories = open_repositories(data_dir)?;
    Ok(RentalSystem::new(repositories, policy))
}

/// Raw view of one journal file
pub fn open_journal(data_dir: &Path, journal: Journal) -> AppendLog {
    AppendLog::new(data_dir.join(journal.file_name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rental_domain::{Customer, Vehicle};
    use rust_decimal::Decimal;
    use tempfile::tempdir;

    #[test]
    fn test_system_writes_each_journal() {
        let dir = tempdir().unwrap();
        let config = Config {
            data_dir: Some(dir.path().to_path_buf()),
            ..Config::default()
        };
        let mut system = open_rental_system(&config).unwrap();

        system
            .add_vehicle(Vehicle::car("toyota", "corolla", 2020).with_license_plate("XYZ789"))
            .unwrap();
        system.add_customer(Customer::new(1, "Alice")).unwrap();
        system
            .rent_vehicle(
                "XYZ789",
                1,
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                Decimal::new(4999, 2),
            )
            .unwrap();

        let read = |journal| open_journal(dir.path(), journal).read_lines().unwrap();
        assert_eq!(read(Journal::Vehicles), vec!["| XYZ789 | Toyota | Corolla | 2020 | AVAILABLE |"]);
        assert_eq!(read(Journal::Customers), vec!["| 1 | Alice |"]);
        assert_eq!(
            read(Journal::Records),
            vec!["| RENT | 2024-01-01 | XYZ789 | 1 | Alice | 49.99 |"]
        );
    }

    #[test]
    fn test_reopening_does_not_rehydrate() {
        let dir = tempdir().unwrap();
        let mut first = open_rental_system_at(dir.path().to_path_buf(), PersistPolicy::Keep).unwrap();
        first
            .add_vehicle(Vehicle::truck("volvo", "fh16", 2021).with_license_plate("TRK1"))
            .unwrap();

        let second = open_rental_system_at(dir.path().to_path_buf(), PersistPolicy::Keep).unwrap();
        assert_eq!(second.vehicle_count(), 0);
        assert_eq!(open_journal(dir.path(), Journal::Vehicles).read_lines().unwrap().len(), 1);
    }
}
