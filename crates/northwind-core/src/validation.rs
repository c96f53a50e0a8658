//! # Input Parsing
//!
//! Turns raw console lines into typed product fields.
//!
//! ## Scope
//! Only type parsing happens here. A category id of `-3` or a price of
//! `0.00` is accepted; the database is the only judge of whether a row is
//! acceptable.
//!
//! ## Usage
//! ```rust
//! use northwind_core::validation::{parse_product_id, parse_unit_price};
//!
//! assert_eq!(parse_product_id("77").unwrap(), 77);
//! assert_eq!(parse_unit_price("18.00").unwrap().cents(), 1800);
//! assert!(parse_product_id("seventy").is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for parse operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Parses a product id.
pub fn parse_product_id(input: &str) -> ValidationResult<i64> {
    parse_integer("product id", input)
}

/// Parses a category id.
pub fn parse_category_id(input: &str) -> ValidationResult<i64> {
    parse_integer("category id", input)
}

/// Parses a unit price such as `18`, `18.00` or `9.65`.
///
/// Anything Rust's float parser accepts is accepted, except values with no
/// exact cent amount: NaN, the infinities, and magnitudes beyond
/// [`MAX_EXACT_CENTS`](crate::money::MAX_EXACT_CENTS) cents (`1e20`).
pub fn parse_unit_price(input: &str) -> ValidationResult<Money> {
    let trimmed = input.trim();

    trimmed
        .parse::<f64>()
        .ok()
        .and_then(Money::try_from_decimal)
        .ok_or_else(|| ValidationError::not_a_number("unit price", trimmed))
}

fn parse_integer(field: &str, input: &str) -> ValidationResult<i64> {
    let trimmed = input.trim();
    trimmed
        .parse()
        .map_err(|_| ValidationError::not_an_integer(field, trimmed))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_product_id() {
        assert_eq!(parse_product_id("1").unwrap(), 1);
        assert_eq!(parse_product_id(" 42 \n").unwrap(), 42);

        assert!(parse_product_id("").is_err());
        assert!(parse_product_id("4.2").is_err());
        assert!(parse_product_id("abc").is_err());
    }

    #[test]
    fn test_parse_category_id_reports_field() {
        let err = parse_category_id("beverages").unwrap_err();
        assert_eq!(
            err,
            ValidationError::not_an_integer("category id", "beverages")
        );
        assert_eq!(
            err.to_string(),
            "Invalid category id: 'beverages' is not a whole number"
        );
    }

    #[test]
    fn test_parse_unit_price() {
        assert_eq!(parse_unit_price("18.00").unwrap().cents(), 1800);
        assert_eq!(parse_unit_price("19").unwrap().cents(), 1900);
        assert_eq!(parse_unit_price("  9.65").unwrap().cents(), 965);
        assert_eq!(parse_unit_price("0").unwrap().cents(), 0);

        assert!(parse_unit_price("").is_err());
        assert!(parse_unit_price("$18").is_err());
        assert!(parse_unit_price("NaN").is_err());
        assert!(parse_unit_price("inf").is_err());
    }

    #[test]
    fn test_parse_unit_price_rejects_out_of_range() {
        assert_eq!(
            parse_unit_price("1e20").unwrap_err(),
            ValidationError::not_a_number("unit price", "1e20")
        );
        assert!(parse_unit_price("-1e20").is_err());

        let large = parse_unit_price("10000000000000").unwrap();
        assert_eq!(large.to_decimal(), 1e13);
    }
}
