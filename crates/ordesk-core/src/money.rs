//! # Money Module
//!
//! Provides the `Money` type for handling order amounts safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    The operator types "29.90", we store 2990 cents (i64).              │
//! │    The database column is an INTEGER; only display code renders        │
//! │    a decimal string again.                                              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use ordesk_core::money::Money;
//!
//! // Create from cents (preferred)
//! let amount = Money::from_cents(2990); // 29.90
//!
//! // Parse operator input
//! let typed: Money = "29.90".parse().unwrap();
//! assert_eq!(typed, amount);
//!
//! // Display for listings
//! assert_eq!(amount.to_string(), "29.90");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Room for corrections and future credit notes
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for serialization
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use ordesk_core::money::Money;
    ///
    /// let amount = Money::from_cents(2990); // Represents 29.90
    /// assert_eq!(amount.cents(), 2990);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion (29 for 29.90).
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion, always 0-99 (90 for 29.90).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero amount.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }
}

// =============================================================================
// Display & Parsing
// =============================================================================

impl fmt::Display for Money {
    /// Renders the amount as a plain decimal string: `2990` → `"29.90"`.
    ///
    /// No currency symbol here; listings decide how to prefix.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            write!(f, "-{}.{:02}", self.major().abs(), self.minor())
        } else {
            write!(f, "{}.{:02}", self.major(), self.minor())
        }
    }
}

/// Error returned when an amount string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a valid amount: '{input}'")]
pub struct ParseMoneyError {
    /// The rejected input, echoed back for the operator.
    pub input: String,
}

impl FromStr for Money {
    type Err = ParseMoneyError;

    /// Parses operator input like `"29.90"`, `"29,90"`, `"29.9"` or `"29"`.
    ///
    /// ## Rules
    /// - Comma is accepted as decimal separator (the original operators
    ///   use it interchangeably with the dot)
    /// - At most two fraction digits; `"29.9"` means 29.90, not 29.09
    /// - No grouping separators, no currency symbols
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let err = || ParseMoneyError {
            input: raw.to_string(),
        };

        let (negative, body) = match raw.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, raw),
        };

        let normalized = body.replace(',', ".");
        let mut parts = normalized.splitn(2, '.');

        let major_str = parts.next().ok_or_else(err)?;
        if major_str.is_empty() || !major_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(err());
        }
        let major: i64 = major_str.parse().map_err(|_| err())?;

        let minor: i64 = match parts.next() {
            None | Some("") => 0,
            Some(frac) => {
                if frac.len() > 2 || !frac.chars().all(|c| c.is_ascii_digit()) {
                    return Err(err());
                }
                let parsed: i64 = frac.parse().map_err(|_| err())?;
                // "9" is nine tenths, not nine cents
                if frac.len() == 1 {
                    parsed * 10
                } else {
                    parsed
                }
            }
        };

        let cents = major
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .ok_or_else(err)?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

// =============================================================================
// Arithmetic
// =============================================================================
// Only what listings need: summing order amounts into a grand total.

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(2990).to_string(), "29.90");
        assert_eq!(Money::from_cents(100).to_string(), "1.00");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_cents(0).to_string(), "0.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
    }

    #[test]
    fn test_parse_decimal_forms() {
        assert_eq!("29.90".parse::<Money>().unwrap(), Money::from_cents(2990));
        assert_eq!("29,90".parse::<Money>().unwrap(), Money::from_cents(2990));
        assert_eq!("29.9".parse::<Money>().unwrap(), Money::from_cents(2990));
        assert_eq!("29".parse::<Money>().unwrap(), Money::from_cents(2900));
        assert_eq!("0.05".parse::<Money>().unwrap(), Money::from_cents(5));
        assert_eq!(" 49.90 ".parse::<Money>().unwrap(), Money::from_cents(4990));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<Money>().is_err());
        assert!("abc".parse::<Money>().is_err());
        assert!("29.999".parse::<Money>().is_err());
        assert!("29.9.0".parse::<Money>().is_err());
        assert!("1_000".parse::<Money>().is_err());
        assert!("$10".parse::<Money>().is_err());
    }

    #[test]
    fn test_round_trip() {
        let amount: Money = "29.90".parse().unwrap();
        assert_eq!(amount.to_string().parse::<Money>().unwrap(), amount);
    }

    #[test]
    fn test_sum() {
        let total: Money = [Money::from_cents(2990), Money::from_cents(1010)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_cents(4000));
        assert_eq!(total.to_string(), "40.00");
    }
}
