//! Rental transaction records and the append-only rental history

use std::fmt;

use chrono::NaiveDate;
use rental_types::RecordKind;
use rust_decimal::Decimal;
use serde::Serialize;

use super::Customer;

/// One rent or return event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RentalRecord {
    kind: RecordKind,
    license_plate: String,
    customer: Customer,
    date: NaiveDate,
    amount: Decimal,
}

impl RentalRecord {
    pub fn new(
        kind: RecordKind,
        license_plate: impl Into<String>,
        customer: Customer,
        date: NaiveDate,
        amount: Decimal,
    ) -> Self {
        Self {
            kind,
            license_plate: license_plate.into(),
            customer,
            date,
            amount,
        }
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    pub fn license_plate(&self) -> &str {
        &self.license_plate
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Rental fee for RENT records, extra fees for RETURN records
    pub fn amount(&self) -> Decimal {
        self.amount
    }
}

impl fmt::Display for RentalRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "| {} | {} | {} | {} | {} | {} |",
            self.kind,
            self.date.format("%Y-%m-%d"),
            self.license_plate,
            self.customer.customer_id(),
            self.customer.customer_name(),
            self.amount
        )
    }
}

/// Append-only log of rental records in insertion order
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct RentalHistory {
    records: Vec<RentalRecord>,
}

impl RentalHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_record(&mut self, record: RentalRecord) {
        self.records.push(record);
    }

    pub fn iter(&self) -> impl Iterator<Item = &RentalRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&RentalRecord> {
        self.records.last()
    }

    /// Records for one vehicle, plate compared case-insensitively
    pub fn for_vehicle<'a>(&'a self, plate: &str) -> impl Iterator<Item = &'a RentalRecord> {
        let plate = plate.to_uppercase();
        self.records
            .iter()
            .filter(move |r| r.license_plate == plate)
    }

    pub fn for_customer(&self, customer_id: u32) -> impl Iterator<Item = &RentalRecord> {
        self.records
            .iter()
            .filter(move |r| r.customer.customer_id() == customer_id)
    }
}

impl<'a> IntoIterator for &'a RentalHistory {
    type Item = &'a RentalRecord;
    type IntoIter = std::slice::Iter<'a, RentalRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(kind: RecordKind, plate: &str, customer_id: u32, day: u32) -> RentalRecord {
        RentalRecord::new(
            kind,
            plate,
            Customer::new(customer_id, "Ada"),
            NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            Decimal::new(4999, 2),
        )
    }

    #[test]
    fn test_history_keeps_insertion_order() {
        let mut history = RentalHistory::new();
        assert!(history.is_empty());

        history.add_record(record(RecordKind::Rent, "AAA111", 1, 1));
        history.add_record(record(RecordKind::Return, "AAA111", 1, 3));
        history.add_record(record(RecordKind::Rent, "BBB222", 2, 4));

        let kinds: Vec<_> = history.iter().map(|r| r.kind()).collect();
        assert_eq!(kinds, vec![RecordKind::Rent, RecordKind::Return, RecordKind::Rent]);
        assert_eq!(history.len(), 3);
        assert_eq!(history.last().map(|r| r.license_plate()), Some("BBB222"));
    }

    #[test]
    fn test_history_filters() {
        let mut history = RentalHistory::new();
        history.add_record(record(RecordKind::Rent, "AAA111", 1, 1));
        history.add_record(record(RecordKind::Rent, "BBB222", 2, 2));
        history.add_record(record(RecordKind::Return, "AAA111", 1, 5));

        assert_eq!(history.for_vehicle("aaa111").count(), 2);
        assert_eq!(history.for_customer(2).count(), 1);
        assert_eq!(history.for_customer(9).count(), 0);
    }

    #[test]
    fn test_record_display() {
        let rec = record(RecordKind::Rent, "XYZ789", 1, 1);
        assert_eq!(rec.to_string(), "| RENT | 2024-01-01 | XYZ789 | 1 | Ada | 49.99 |");
    }
}
