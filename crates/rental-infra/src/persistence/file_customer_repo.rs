//! File-based customer repository implementation

use std::fs;
use std::path::PathBuf;

use rental_domain::model::Customer;
use rental_domain::repository::CustomerRepository;
use rental_types::{Error, Result};

use super::AppendLog;

pub const CUSTOMERS_FILE: &str = "customers.txt";

/// Appends rendered customers to `customers.txt`
pub struct FileCustomerRepository {
    log: AppendLog,
}

impl FileCustomerRepository {
    pub fn open(data_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&data_dir)?;
        Ok(Self {
            log: AppendLog::new(data_dir.join(CUSTOMERS_FILE)),
        })
    }

    pub fn log(&self) -> &AppendLog {
        &self.log
    }
}

impl CustomerRepository for FileCustomerRepository {
    fn append(&self, customer: &Customer) -> std::result::Result<(), Error> {
        self.log.append_line(&customer.to_string())
    }
}
