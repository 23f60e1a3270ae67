//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With floating point balances:                                          │
//! │    deposit 0.10 three times = 0.30000000000000004  ❌ WRONG!            │
//! │    balance >= 0.30 ? → false, the vend is refused                       │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    10 + 10 + 10 = 30 cents, and 30 >= 30 is exactly true               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use vending_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(150); // $1.50
//!
//! // Balances grow with checked addition
//! let balance = Money::from_cents(500).checked_add(price).unwrap();
//! assert_eq!(balance.cents(), 650);
//!
//! // Catalog prices arrive as decimal text and are parsed exactly
//! assert_eq!(Money::parse_decimal("1.5").unwrap().cents(), 150);
//! ```

use serde::Serialize;
use std::fmt;
use std::ops::SubAssign;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::validation::ValidationResult;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: a deposit request can carry a negative amount, and
///   we want to be able to represent it long enough to reject it
/// - **Single field tuple struct**: Zero-cost abstraction over i64
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Item.price ──► price × quantity ──► compared with amount_deposited    │
/// │                                                                         │
/// │  deposit(amount) ──► amount_deposited += amount                        │
/// │                                                                         │
/// │  vend() ──► amount_deposited -= price × quantity                       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use vending_core::money::Money;
    ///
    /// let price = Money::from_cents(150); // Represents $1.50
    /// assert_eq!(price.cents(), 150);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Parses a plain decimal string (`"1.5"`, `"2"`, `"0.25"`) into cents.
    ///
    /// ## Rules
    /// - Optional leading `-`
    /// - Digits, optionally followed by `.` and fractional digits
    /// - At most two significant fractional digits (`"1.500"` is fine,
    ///   `"1.505"` is not)
    /// - No exponents, no thousands separators
    ///
    /// ## Example
    /// ```rust
    /// use vending_core::money::Money;
    ///
    /// assert_eq!(Money::parse_decimal("1.50").unwrap().cents(), 150);
    /// assert_eq!(Money::parse_decimal("1.5").unwrap().cents(), 150);
    /// assert_eq!(Money::parse_decimal("12").unwrap().cents(), 1200);
    /// assert!(Money::parse_decimal("1.505").is_err());
    /// assert!(Money::parse_decimal("1e2").is_err());
    /// ```
    pub fn parse_decimal(text: &str) -> ValidationResult<Money> {
        let text = text.trim();
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let (major, minor) = digits.split_once('.').unwrap_or((digits, ""));

        if major.is_empty()
            || !major.bytes().all(|b| b.is_ascii_digit())
            || !minor.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(ValidationError::InvalidFormat {
                field: "amount".to_string(),
                reason: format!("'{}' is not a plain decimal number", text),
            });
        }

        // "100.0" and "1.500" carry harmless trailing zeros
        let minor = if minor.len() > 2 {
            minor.trim_end_matches('0')
        } else {
            minor
        };
        if minor.len() > 2 {
            return Err(ValidationError::InvalidFormat {
                field: "amount".to_string(),
                reason: format!("'{}' has more than two decimal places", text),
            });
        }

        let out_of_range = || ValidationError::OutOfRange {
            field: "amount".to_string(),
            min: i64::MIN / 100,
            max: i64::MAX / 100,
        };

        let major: i64 = major.parse().map_err(|_| out_of_range())?;
        let minor: i64 = match minor.len() {
            0 => 0,
            1 => minor.parse::<i64>().map_err(|_| out_of_range())? * 10,
            _ => minor.parse().map_err(|_| out_of_range())?,
        };

        let cents = major
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .ok_or_else(out_of_range)?;

        Ok(Money(if negative { -cents } else { cents }))
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    ///
    /// ## Example
    /// ```rust
    /// use vending_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.dollars(), 10);
    /// ```
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

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// Only called on item prices, which are capped at `MAX_PRICE_CENTS`,
    /// so the product stays inside `i64` for any `u32` quantity.
    #[inline]
    pub(crate) const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0 * qty as i64)
    }

    /// Adds two values, returning `None` on overflow.
    #[inline]
    pub const fn checked_add(self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for messages and debugging. Localized formatting belongs to
/// whatever renders the amount.
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

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
