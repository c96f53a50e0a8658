//! # Money Module
//!
//! Provides the `Money` type for unit prices.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │    0.1 + 0.2 = 0.30000000000000004                                      │
//! │                                                                         │
//! │  The Products table stores UnitPrice as a decimal column, and SQLite   │
//! │  hands it back as a double. We convert once at the storage boundary    │
//! │  and keep whole cents everywhere else:                                  │
//! │                                                                         │
//! │    console "18.00" ──► 1800 cents ──► UnitPrice 18.0 ──► 1800 cents     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use northwind_core::money::Money;
//!
//! let price = Money::from_cents(1850);
//! assert_eq!(price.to_decimal(), 18.5);
//! assert_eq!(Money::from_decimal(18.5), price);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::validation::parse_unit_price;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
///
/// Serialized as a decimal number (`18.5`), the way seed catalogs and the
/// database carry prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Money(i64);

/// Largest cent count a `f64` holds exactly (2^53).
pub const MAX_EXACT_CENTS: i64 = 1 << 53;

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use northwind_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from a decimal amount, rounded to the nearest cent.
    ///
    /// This is the only place a float becomes money. It is used when reading
    /// `UnitPrice` back from storage and when parsing console input.
    ///
    /// ## Example
    /// ```rust
    /// use northwind_core::money::Money;
    ///
    /// assert_eq!(Money::from_decimal(18.0).cents(), 1800);
    /// assert_eq!(Money::from_decimal(9.65).cents(), 965);
    /// assert_eq!(Money::from_decimal(0.125).cents(), 13);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        Money((amount * 100.0).round() as i64)
    }

    /// Like [`Money::from_decimal`], but `None` when the amount has no exact
    /// cent value: NaN, the infinities, or more than [`MAX_EXACT_CENTS`] cents
    /// either side of zero.
    ///
    /// ## Example
    /// ```rust
    /// use northwind_core::money::Money;
    ///
    /// assert_eq!(Money::try_from_decimal(18.0), Some(Money::from_cents(1800)));
    /// assert_eq!(Money::try_from_decimal(1e20), None);
    /// ```
    pub fn try_from_decimal(amount: f64) -> Option<Self> {
        let cents = (amount * 100.0).round();

        if !cents.is_finite() || cents.abs() > MAX_EXACT_CENTS as f64 {
            return None;
        }
        Some(Money(cents as i64))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the value as a decimal amount for binding to `UnitPrice`.
    #[inline]
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `$18.00` (`-$5.50` for negatives).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl From<f64> for Money {
    fn from(amount: f64) -> Self {
        Money::from_decimal(amount)
    }
}

impl From<Money> for f64 {
    fn from(money: Money) -> Self {
        money.to_decimal()
    }
}

/// Parses a console-entered price such as `18`, `18.00` or `9.65`.
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_unit_price(s)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1800)), "$18.00");
        assert_eq!(format!("{}", Money::from_cents(965)), "$9.65");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_decimal_boundary() {
        // Prices that are not exact in binary still land on the right cent
        for cents in [1, 10, 965, 1800, 2125, 26350, 999_999] {
            let money = Money::from_cents(cents);
            assert_eq!(Money::from_decimal(money.to_decimal()), money);
        }
    }

    #[test]
    fn test_try_from_decimal_range() {
        assert_eq!(Money::try_from_decimal(0.0), Some(Money::zero()));
        assert_eq!(Money::try_from_decimal(-5.5), Some(Money::from_cents(-550)));
        assert_eq!(
            Money::try_from_decimal(1e13),
            Some(Money::from_cents(1_000_000_000_000_000))
        );

        assert_eq!(Money::try_from_decimal(1e20), None);
        assert_eq!(Money::try_from_decimal(-1e20), None);
        assert_eq!(Money::try_from_decimal(f64::NAN), None);
        assert_eq!(Money::try_from_decimal(f64::INFINITY), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("18.00".parse::<Money>().unwrap(), Money::from_cents(1800));
        assert_eq!("19".parse::<Money>().unwrap(), Money::from_cents(1900));
        assert!("eighteen".parse::<Money>().is_err());
    }

    #[test]
    fn test_serde_as_decimal() {
        let json = serde_json::to_string(&Money::from_cents(1850)).unwrap();
        assert_eq!(json, "18.5");

        let back: Money = serde_json::from_str("21.35").unwrap();
        assert_eq!(back.cents(), 2135);
    }
}
