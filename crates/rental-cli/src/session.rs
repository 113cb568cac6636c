//! Interactive and scripted command sessions
//!
//! Each input line is split with shell quoting rules and parsed as one
//! [`SessionCommand`]. Command failures are reported on the session output
//! and the session continues; only failures to write that output abort it.

use std::io::{BufRead, Write};

use chrono::NaiveDate;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::debug;

use rental_domain::{Customer, RentalRecord, RentalSystem, Vehicle};
use rental_types::{Error, OutputFormat, Result, VehicleKind, VehicleStatus};

use crate::output::{output_customers, output_history, output_vehicles};
use crate::parse::{parse_amount, parse_customer_id, parse_date};

#[derive(Parser)]
#[command(name = "command", no_binary_name = true)]
struct SessionLine {
    #[command(subcommand)]
    command: SessionCommand,
}

#[derive(Subcommand)]
enum SessionCommand {
    /// Register a vehicle
    AddVehicle {
        /// car, motorcycle or truck
        #[arg(value_enum, ignore_case = true)]
        kind: VehicleKind,
        plate: String,
        make: String,
        model: String,
        year: u16,
    },

    /// Register a customer
    AddCustomer {
        #[arg(value_parser = parse_customer_id)]
        id: u32,
        name: String,
    },

    /// Rent an available vehicle
    Rent {
        plate: String,
        #[arg(value_parser = parse_customer_id)]
        customer: u32,
        /// YYYY-MM-DD
        #[arg(value_parser = parse_date)]
        date: NaiveDate,
        #[arg(value_parser = parse_amount)]
        amount: Decimal,
    },

    /// Return a rented vehicle
    Return {
        plate: String,
        #[arg(value_parser = parse_customer_id)]
        customer: u32,
        /// YYYY-MM-DD
        #[arg(value_parser = parse_date)]
        date: NaiveDate,
        #[arg(value_parser = parse_amount, default_value = "0")]
        extra_fees: Decimal,
    },

    /// Set a status outside the rent/return cycle
    SetStatus {
        plate: String,
        #[arg(value_enum, ignore_case = true)]
        status: VehicleStatus,
    },

    /// List vehicles
    Vehicles {
        /// Only vehicles that can be rented now
        #[arg(long)]
        available: bool,
    },

    /// List customers
    Customers,

    /// Show rental history
    History {
        #[arg(long)]
        plate: Option<String>,
        #[arg(long, value_parser = parse_customer_id)]
        customer: Option<u32>,
    },

    /// Look up a vehicle by plate
    FindVehicle { plate: String },

    /// Look up a customer by ID
    FindCustomer {
        #[arg(value_parser = parse_customer_id)]
        id: u32,
    },

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

/// Result of a single session line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    Done,
    Failed,
    Quit,
}

/// Counts for a finished session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionReport {
    pub executed: usize,
    pub failed: usize,
}

pub struct Session<W: Write> {
    system: RentalSystem,
    format: OutputFormat,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(system: RentalSystem, format: OutputFormat, out: W) -> Self {
        Self {
            system,
            format,
            out,
        }
    }

    pub fn system(&self) -> &RentalSystem {
        &self.system
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn into_parts(self) -> (RentalSystem, W) {
        (self.system, self.out)
    }

    /// Execute lines until input ends or `quit` is read.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    pub fn run<R: BufRead>(&mut self, input: R, prompt: bool) -> Result<SessionReport> {
        let mut report = SessionReport::default();
        let mut lines = input.lines();

        loop {
            if prompt {
                write!(self.out, "> ")?;
                self.out.flush()?;
            }
            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            report.executed += 1;
            match self.execute_line(trimmed)? {
                LineOutcome::Done => {}
                LineOutcome::Failed => report.failed += 1,
                LineOutcome::Quit => break,
            }
        }

        self.out.flush()?;
        Ok(report)
    }

    /// Parse and execute one line, reporting command errors on the output
    pub fn execute_line(&mut self, line: &str) -> Result<LineOutcome> {
        debug!(line, "Executing session line");
        let words = match shell_words::split(line) {
            Ok(words) => words,
            Err(e) => {
                writeln!(self.out, "Error: cannot split line: {}", e)?;
                return Ok(LineOutcome::Failed);
            }
        };

        let parsed = match SessionLine::try_parse_from(words) {
            Ok(parsed) => parsed,
            Err(e) => {
                return match e.kind() {
                    ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                        write!(self.out, "{}", e)?;
                        Ok(LineOutcome::Done)
                    }
                    _ => {
                        write!(self.out, "{}", e)?;
                        Ok(LineOutcome::Failed)
                    }
                };
            }
        };

        match self.dispatch(parsed.command) {
            Ok(outcome) => Ok(outcome),
            Err(Error::Io(e)) => Err(Error::Io(e)),
            Err(e) => {
                writeln!(self.out, "Error: {}", e)?;
                Ok(LineOutcome::Failed)
            }
        }
    }

    fn dispatch(&mut self, command: SessionCommand) -> Result<LineOutcome> {
        match command {
            SessionCommand::AddVehicle {
                kind,
                plate,
                make,
                model,
                year,
            } => {
                let vehicle = Vehicle::new(kind, &make, &model, year).with_license_plate(&plate);
                self.system.add_vehicle(vehicle)?;
                writeln!(self.out, "{} {} added", kind, plate.to_uppercase())?;
            }

            SessionCommand::AddCustomer { id, name } => {
                self.system.add_customer(Customer::new(id, name))?;
                writeln!(self.out, "Customer {} added", id)?;
            }

            SessionCommand::Rent {
                plate,
                customer,
                date,
                amount,
            } => {
                let record = self.system.rent_vehicle(&plate, customer, date, amount)?;
                writeln!(
                    self.out,
                    "Vehicle {} rented to {}",
                    record.license_plate(),
                    record.customer().customer_name()
                )?;
            }

            SessionCommand::Return {
                plate,
                customer,
                date,
                extra_fees,
            } => {
                let record = self.system.return_vehicle(&plate, customer, date, extra_fees)?;
                writeln!(
                    self.out,
                    "Vehicle {} returned by {}",
                    record.license_plate(),
                    record.customer().customer_name()
                )?;
            }

            SessionCommand::SetStatus { plate, status } => {
                self.system.set_vehicle_status(&plate, status)?;
                writeln!(self.out, "Vehicle {} is now {}", plate.to_uppercase(), status)?;
            }

            SessionCommand::Vehicles { available } => {
                let vehicles: Vec<&Vehicle> = if available {
                    self.system.available_vehicles().collect()
                } else {
                    self.system.vehicles().collect()
                };
                output_vehicles(&mut self.out, self.format, &vehicles)?;
            }

            SessionCommand::Customers => {
                let customers: Vec<&Customer> = self.system.customers().collect();
                output_customers(&mut self.out, self.format, &customers)?;
            }

            SessionCommand::History { plate, customer } => {
                let records: Vec<&RentalRecord> = match (&plate, customer) {
                    (Some(plate), _) => self
                        .system
                        .history_for_vehicle(plate)
                        .filter(|r| customer.map_or(true, |id| r.customer().customer_id() == id))
                        .collect(),
                    (None, Some(id)) => self.system.history_for_customer(id).collect(),
                    (None, None) => self.system.history().iter().collect(),
                };
                output_history(&mut self.out, self.format, &records)?;
            }

            SessionCommand::FindVehicle { plate } => {
                let vehicle = self
                    .system
                    .find_vehicle_by_plate(&plate)
                    .ok_or_else(|| Error::VehicleNotFound(plate.to_uppercase()))?;
                output_vehicles(&mut self.out, self.format, &[vehicle])?;
            }

            SessionCommand::FindCustomer { id } => {
                let customer = self
                    .system
                    .find_customer_by_id(id)
                    .ok_or(Error::CustomerNotFound(id))?;
                output_customers(&mut self.out, self.format, &[customer])?;
            }

            SessionCommand::Quit => return Ok(LineOutcome::Quit),
        }

        Ok(LineOutcome::Done)
    }
}
