//! Parsers for values typed at the command line

use std::str::FromStr;

use chrono::NaiveDate;
use rental_types::{Error, Result};
use rust_decimal::Decimal;

/// Customer IDs are typed as text; lookups take the numeric ID
pub fn parse_customer_id(input: &str) -> Result<u32> {
    input
        .trim()
        .parse()
        .map_err(|_| Error::InvalidCustomerId(input.to_string()))
}

/// Dates are `YYYY-MM-DD`
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| Error::InvalidDate(input.to_string()))
}

/// Non-negative decimal amount
pub fn parse_amount(input: &str) -> Result<Decimal> {
    match Decimal::from_str(input.trim()) {
        Ok(amount) if !amount.is_sign_negative() => Ok(amount),
        _ => Err(Error::InvalidAmount(input.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_customer_id() {
        assert_eq!(parse_customer_id("42").unwrap(), 42);
        assert_eq!(parse_customer_id(" 7 ").unwrap(), 7);
        assert!(matches!(
            parse_customer_id("abc"),
            Err(Error::InvalidCustomerId(ref s)) if s == "abc"
        ));
        assert!(parse_customer_id("-1").is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-01-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
        assert!(matches!(parse_date("01/01/2024"), Err(Error::InvalidDate(_))));
        assert!(parse_date("2024-02-30").is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("49.99").unwrap(), Decimal::new(4999, 2));
        assert_eq!(parse_amount("0").unwrap(), Decimal::ZERO);
        assert!(matches!(parse_amount("-5"), Err(Error::InvalidAmount(_))));
        assert!(parse_amount("ten").is_err());
    }
}
