//! Rental registry service
//!
//! Owns the in-memory vehicle, customer and history tables, enforces the
//! AVAILABLE/RENTED cycle, and appends one repository entry per successful
//! mutation. When an append fails the [`PersistPolicy`] decides whether the
//! in-memory change survives; the error is returned either way.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, error, info, warn};

use rental_types::{Error, PersistPolicy, RecordKind, Result, VehicleStatus};

use crate::model::{Customer, RentalHistory, RentalRecord, Vehicle};
use crate::repository::Repositories;

pub struct RentalSystem {
    vehicles: Vec<Vehicle>,
    customers: Vec<Customer>,
    history: RentalHistory,
    repositories: Repositories,
    policy: PersistPolicy,
}

impl RentalSystem {
    /// Create an empty registry writing to the given repositories
    pub fn new(repositories: Repositories, policy: PersistPolicy) -> Self {
        debug!(%policy, "Rental system created");
        Self {
            vehicles: Vec::new(),
            customers: Vec::new(),
            history: RentalHistory::new(),
            repositories,
            policy,
        }
    }

    pub fn policy(&self) -> PersistPolicy {
        self.policy
    }

    /// Register a vehicle. The plate must be set and not already tracked.
    pub fn add_vehicle(&mut self, vehicle: Vehicle) -> Result<()> {
        let plate = vehicle
            .license_plate()
            .ok_or(Error::MissingPlate)?
            .to_string();
        if self.find_vehicle_by_plate(&plate).is_some() {
            warn!(%plate, "Vehicle already exists");
            return Err(Error::DuplicatePlate(plate));
        }

        let persisted = self.repositories.vehicles.append(&vehicle);
        self.commit(persisted, move |system| system.vehicles.push(vehicle))?;
        info!(%plate, "Vehicle added");
        Ok(())
    }

    /// Register a customer with an unused ID
    pub fn add_customer(&mut self, customer: Customer) -> Result<()> {
        let id = customer.customer_id();
        if self.find_customer_by_id(id).is_some() {
            warn!(customer_id = id, "Customer already exists");
            return Err(Error::DuplicateCustomer(id));
        }

        let persisted = self.repositories.customers.append(&customer);
        self.commit(persisted, move |system| system.customers.push(customer))?;
        info!(customer_id = id, "Customer added");
        Ok(())
    }

    /// Rent an AVAILABLE vehicle, moving it to RENTED
    pub fn rent_vehicle(
        &mut self,
        plate: &str,
        customer_id: u32,
        date: NaiveDate,
        amount: Decimal,
    ) -> Result<RentalRecord> {
        self.transition(RecordKind::Rent, plate, customer_id, date, amount)
    }

    /// Return a RENTED vehicle, moving it back to AVAILABLE
    pub fn return_vehicle(
        &mut self,
        plate: &str,
        customer_id: u32,
        date: NaiveDate,
        extra_fees: Decimal,
    ) -> Result<RentalRecord> {
        self.transition(RecordKind::Return, plate, customer_id, date, extra_fees)
    }

    /// Put a vehicle into a state outside the rent/return cycle.
    ///
    /// RENTED can neither be set nor left this way.
    pub fn set_vehicle_status(&mut self, plate: &str, status: VehicleStatus) -> Result<()> {
        let index = self.vehicle_index(plate)?;
        let current = self.vehicles[index].status();
        if current == VehicleStatus::Rented || status == VehicleStatus::Rented {
            warn!(plate = %plate.to_uppercase(), from = %current, to = %status, "Status change refused");
            return Err(Error::InvalidStatusChange {
                plate: plate.to_uppercase(),
                from: current,
                to: status,
            });
        }

        let mut updated = self.vehicles[index].clone();
        updated.set_status(status);
        let persisted = self.repositories.vehicles.append(&updated);
        self.commit(persisted, move |system| system.vehicles[index] = updated)?;
        info!(plate = %plate.to_uppercase(), from = %current, to = %status, "Vehicle status changed");
        Ok(())
    }

    pub fn find_vehicle_by_plate(&self, plate: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.has_plate(plate))
    }

    pub fn find_customer_by_id(&self, customer_id: u32) -> Option<&Customer> {
        self.customers
            .iter()
            .find(|c| c.customer_id() == customer_id)
    }

    /// All vehicles in registration order
    pub fn vehicles(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.iter()
    }

    pub fn available_vehicles(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles
            .iter()
            .filter(|v| v.status() == VehicleStatus::Available)
    }

    /// All customers in registration order
    pub fn customers(&self) -> impl Iterator<Item = &Customer> {
        self.customers.iter()
    }

    pub fn history(&self) -> &RentalHistory {
        &self.history
    }

    pub fn history_for_vehicle<'a>(
        &'a self,
        plate: &str,
    ) -> impl Iterator<Item = &'a RentalRecord> {
        self.history.for_vehicle(plate)
    }

    pub fn history_for_customer(&self, customer_id: u32) -> impl Iterator<Item = &RentalRecord> {
        self.history.for_customer(customer_id)
    }

    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }

    pub fn customer_count(&self) -> usize {
        self.customers.len()
    }

    fn vehicle_index(&self, plate: &str) -> Result<usize> {
        self.vehicles
            .iter()
            .position(|v| v.has_plate(plate))
            .ok_or_else(|| Error::VehicleNotFound(plate.to_uppercase()))
    }

    fn transition(
        &mut self,
        kind: RecordKind,
        plate: &str,
        customer_id: u32,
        date: NaiveDate,
        amount: Decimal,
    ) -> Result<RentalRecord> {
        let index = self.vehicle_index(plate)?;
        let customer = self
            .find_customer_by_id(customer_id)
            .cloned()
            .ok_or(Error::CustomerNotFound(customer_id))?;

        let vehicle = &self.vehicles[index];
        let plate = vehicle.license_plate().unwrap_or_default().to_string();
        let status = vehicle.status();
        let next = match (kind, status) {
            (RecordKind::Rent, VehicleStatus::Available) => VehicleStatus::Rented,
            (RecordKind::Return, VehicleStatus::Rented) => VehicleStatus::Available,
            (RecordKind::Rent, _) => {
                warn!(%plate, %status, "Vehicle is not available for renting");
                return Err(Error::NotAvailable { plate, status });
            }
            (RecordKind::Return, _) => {
                warn!(%plate, %status, "Vehicle is not rented");
                return Err(Error::NotRented { plate, status });
            }
        };

        let record = RentalRecord::new(kind, plate.as_str(), customer, date, amount);
        let persisted = self.repositories.records.append(&record);
        let entry = record.clone();
        self.commit(persisted, move |system| {
            system.vehicles[index].set_status(next);
            system.history.add_record(entry);
        })?;

        match kind {
            RecordKind::Rent => info!(%plate, customer = record.customer().customer_name(), "Vehicle rented"),
            RecordKind::Return => info!(%plate, customer = record.customer().customer_name(), "Vehicle returned"),
        }
        Ok(record)
    }

    /// Apply an in-memory change according to the outcome of its append
    fn commit(&mut self, persisted: Result<()>, apply: impl FnOnce(&mut Self)) -> Result<()> {
        match persisted {
            Ok(()) => {
                apply(self);
                Ok(())
            }
            Err(err) => {
                match self.policy {
                    PersistPolicy::Keep => {
                        apply(self);
                        error!(error = %err, "Persisting failed, change kept in memory");
                    }
                    PersistPolicy::Rollback => {
                        error!(error = %err, "Persisting failed, change discarded");
                    }
                }
                Err(err)
            }
        }
    }
}
