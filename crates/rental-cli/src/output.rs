//! Output formatting module

use std::io::Write;

use rental_domain::{Customer, RentalRecord, Vehicle};
use rental_types::{OutputFormat, Result};
use serde::Serialize;

pub fn output_vehicles<W: Write>(
    out: &mut W,
    output_format: OutputFormat,
    vehicles: &[&Vehicle],
) -> Result<()> {
    if output_format == OutputFormat::Json {
        return output_json(out, vehicles);
    }

    if vehicles.is_empty() {
        writeln!(out, "No vehicles")?;
        return Ok(());
    }

    writeln!(
        out,
        "| {:<10} | {:<10} | {:<12} | {:<12} | {:>4} | {:<12} |",
        "Type", "Plate", "Make", "Model", "Year", "Status"
    )?;
    writeln!(out, "{}", "-".repeat(79))?;
    for v in vehicles {
        writeln!(
            out,
            "| {:<10} | {:<10} | {:<12} | {:<12} | {:>4} | {:<12} |",
            v.kind().label(),
            v.license_plate().unwrap_or("-"),
            v.make().unwrap_or("-"),
            v.model().unwrap_or("-"),
            v.year(),
            v.status().as_str()
        )?;
    }
    Ok(())
}

pub fn output_customers<W: Write>(
    out: &mut W,
    output_format: OutputFormat,
    customers: &[&Customer],
) -> Result<()> {
    if output_format == OutputFormat::Json {
        return output_json(out, customers);
    }

    if customers.is_empty() {
        writeln!(out, "No customers")?;
        return Ok(());
    }

    for c in customers {
        writeln!(out, "  {}", c)?;
    }
    Ok(())
}

pub fn output_history<W: Write>(
    out: &mut W,
    output_format: OutputFormat,
    records: &[&RentalRecord],
) -> Result<()> {
    if output_format == OutputFormat::Json {
        return output_json(out, records);
    }

    if records.is_empty() {
        writeln!(out, "No rental records")?;
        return Ok(());
    }

    for record in records {
        writeln!(out, "{}", record)?;
    }
    Ok(())
}

fn output_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    writeln!(out, "{}", content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_vehicle_table() {
        let car = Vehicle::car("toyota", "corolla", 2020).with_license_plate("xyz789");
        let text = render(|out| output_vehicles(out, OutputFormat::Table, &[&car]));
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("| Type"));
        assert!(lines[2].contains("Car"));
        assert!(lines[2].contains("XYZ789"));
        assert!(lines[2].contains("AVAILABLE"));
    }

    #[test]
    fn test_empty_tables() {
        assert_eq!(
            render(|out| output_vehicles(out, OutputFormat::Table, &[])),
            "No vehicles\n"
        );
        assert_eq!(
            render(|out| output_customers(out, OutputFormat::Table, &[])),
            "No customers\n"
        );
        assert_eq!(
            render(|out| output_history(out, OutputFormat::Table, &[])),
            "No rental records\n"
        );
    }

    #[test]
    fn test_customers_json() {
        let alice = Customer::new(1, "Alice");
        let text = render(|out| output_customers(out, OutputFormat::Json, &[&alice]));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["customer_id"], 1);
        assert_eq!(value[0]["customer_name"], "Alice");
    }
}
