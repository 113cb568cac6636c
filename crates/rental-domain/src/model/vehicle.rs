//! Vehicle entity

use std::fmt;

use rental_types::{VehicleKind, VehicleStatus};
use serde::Serialize;

/// A rentable vehicle.
///
/// Make and model are stored capitalized and the license plate upper case.
/// Empty input for any of them is stored as absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vehicle {
    kind: VehicleKind,
    license_plate: Option<String>,
    make: Option<String>,
    model: Option<String>,
    year: u16,
    status: VehicleStatus,
}

impl Vehicle {
    pub fn new(kind: VehicleKind, make: &str, model: &str, year: u16) -> Self {
        Self {
            kind,
            license_plate: None,
            make: capitalize(make),
            model: capitalize(model),
            year,
            status: VehicleStatus::Available,
        }
    }

    pub fn car(make: &str, model: &str, year: u16) -> Self {
        Self::new(VehicleKind::Car, make, model, year)
    }

    pub fn motorcycle(make: &str, model: &str, year: u16) -> Self {
        Self::new(VehicleKind::Motorcycle, make, model, year)
    }

    pub fn truck(make: &str, model: &str, year: u16) -> Self {
        Self::new(VehicleKind::Truck, make, model, year)
    }

    pub fn with_license_plate(mut self, plate: &str) -> Self {
        self.set_license_plate(plate);
        self
    }

    /// Set the plate, normalized to upper case. A blank plate clears it.
    pub fn set_license_plate(&mut self, plate: &str) {
        self.license_plate = if plate.is_empty() {
            None
        } else {
            Some(plate.to_uppercase())
        };
    }

    pub fn kind(&self) -> VehicleKind {
        self.kind
    }

    pub fn license_plate(&self) -> Option<&str> {
        self.license_plate.as_deref()
    }

    pub fn make(&self) -> Option<&str> {
        self.make.as_deref()
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn status(&self) -> VehicleStatus {
        self.status
    }

    /// Case-insensitive plate comparison
    pub fn has_plate(&self, plate: &str) -> bool {
        self.license_plate
            .as_deref()
            .map(|p| p == plate.to_uppercase())
            .unwrap_or(false)
    }

    pub(crate) fn set_status(&mut self, status: VehicleStatus) {
        self.status = status;
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "| {} | {} | {} | {} | {} |",
            self.license_plate.as_deref().unwrap_or("-"),
            self.make.as_deref().unwrap_or("-"),
            self.model.as_deref().unwrap_or("-"),
            self.year,
            self.status
        )
    }
}

/// First character upper case, the rest lower case
fn capitalize(input: &str) -> Option<String> {
    let mut chars = input.chars();
    let first = chars.next()?;
    Some(
        first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_and_model_are_capitalized() {
        let car = Vehicle::car("toyota", "COROLLA", 2020);
        assert_eq!(car.make(), Some("Toyota"));
        assert_eq!(car.model(), Some("Corolla"));
        assert_eq!(car.year(), 2020);
        assert_eq!(car.kind(), VehicleKind::Car);
    }

    #[test]
    fn test_empty_make_is_absent() {
        let truck = Vehicle::truck("", "f-150", 2018);
        assert_eq!(truck.make(), None);
        assert_eq!(truck.model(), Some("F-150"));
    }

    #[test]
    fn test_plate_is_absent_until_set_then_upper_case() {
        let mut bike = Vehicle::motorcycle("yamaha", "mt-07", 2021);
        assert_eq!(bike.license_plate(), None);
        assert_eq!(bike.status(), VehicleStatus::Available);

        bike.set_license_plate("moto42");
        assert_eq!(bike.license_plate(), Some("MOTO42"));
        assert!(bike.has_plate("Moto42"));
        assert!(!bike.has_plate("MOTO43"));

        bike.set_license_plate("");
        assert_eq!(bike.license_plate(), None);
        assert!(!bike.has_plate(""));
    }

    #[test]
    fn test_display_is_pipe_delimited() {
        let car = Vehicle::car("honda", "civic", 2019).with_license_plate("abc123");
        assert_eq!(car.to_string(), "| ABC123 | Honda | Civic | 2019 | AVAILABLE |");

        let bare = Vehicle::car("", "", 0);
        assert_eq!(bare.to_string(), "| - | - | - | 0 | AVAILABLE |");
    }
}
