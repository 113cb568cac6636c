//! File-based rental record repository implementation

use std::fs;
use std::path::PathBuf;

use rental_domain::model::RentalRecord;
use rental_domain::repository::RentalRecordRepository;
use rental_types::{Error, Result};

use super::AppendLog;

pub const RENTAL_RECORDS_FILE: &str = "rental_records.txt";

/// Appends rendered rent/return records to `rental_records.txt`
pub struct FileRentalRecordRepository {
    log: AppendLog,
}

impl FileRentalRecordRepository {
    pub fn open(data_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&data_dir)?;
        Ok(Self {
            log: AppendLog::new(data_dir.join(RENTAL_RECORDS_FILE)),
        })
    }

    pub fn log(&self) -> &AppendLog {
        &self.log
    }
}

impl RentalRecordRepository for FileRentalRecordRepository {
    fn append(&self, record: &RentalRecord) -> std::result::Result<(), Error> {
        self.log.append_line(&record.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rental_domain::model::Customer;
    use rental_types::RecordKind;
    use rust_decimal::Decimal;
    use tempfile::tempdir;

    #[test]
    fn test_records_are_appended_in_order() {
        let dir = tempdir().unwrap();
        let repo = FileRentalRecordRepository::open(dir.path().to_path_buf()).unwrap();
        let customer = Customer::new(7, "Grace");
        let day = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();

        repo.append(&RentalRecord::new(
            RecordKind::Rent,
            "ABC123",
            customer.clone(),
            day,
            Decimal::new(3000, 2),
        ))
        .unwrap();
        repo.append(&RentalRecord::new(
            RecordKind::Return,
            "ABC123",
            customer,
            day.succ_opt().unwrap(),
            Decimal::ZERO,
        ))
        .unwrap();

        let lines = repo.log().read_lines().unwrap();
        assert_eq!(
            lines,
            vec![
                "| RENT | 2024-03-09 | ABC123 | 7 | Grace | 30.00 |",
                "| RETURN | 2024-03-10 | ABC123 | 7 | Grace | 0 |",
            ]
        );
    }
}
