//! # Validation Module
//!
//! Input validation utilities for the vending machine.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Catalog loader (vending-catalog)                             │
//! │  ├── Shape checks (mapping vs. sequence, field types)                  │
//! │  └── Calls THIS MODULE for field rules                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Kiosk commands (apps/kiosk)                                  │
//! │  ├── Raw caller input (i64 quantity, cents)                            │
//! │  └── THIS MODULE: turns it into typed values                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: VendingMachine                                               │
//! │  └── Stock and balance rules (the vend transaction itself)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use vending_core::validation::{validate_item_name, validate_quantity};
//!
//! validate_item_name("Soda").unwrap();
//! let qty = validate_quantity(2).unwrap();
//! assert_eq!(qty.get(), 2);
//! ```

use std::num::NonZeroU32;

use crate::error::ValidationError;
use crate::money::Money;
use crate::MAX_PRICE_CENTS;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a selection identifier.
///
/// ## Rules
/// - Must not be blank
/// - At most 64 characters
pub fn validate_selection_id(id: &str) -> ValidationResult<()> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "selection".to_string(),
        });
    }

    if id.chars().count() > 64 {
        return Err(ValidationError::TooLong {
            field: "selection".to_string(),
            max: 64,
        });
    }

    Ok(())
}

/// Validates an item name.
///
/// ## Rules
/// - Must not be blank
/// - At most 200 characters
///
/// ## Example
/// ```rust
/// use vending_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Fruit Juice").is_ok());
/// assert!(validate_item_name("").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative (free items are allowed)
/// - Must not exceed `MAX_PRICE_CENTS`
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() || price.cents() > MAX_PRICE_CENTS {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

/// Validates a stock level read from a catalog.
///
/// ## Rules
/// - Must be non-negative
/// - Must fit in `u32`
pub fn validate_stock(quantity: i64) -> ValidationResult<u32> {
    u32::try_from(quantity).map_err(|_| ValidationError::OutOfRange {
        field: "quantity".to_string(),
        min: 0,
        max: u32::MAX as i64,
    })
}

/// Validates a requested vend quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must fit in `u32`
///
/// Stock is the only upper bound; the machine reports it as `OutOfStock`.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Kiosk: vend                                                            │
/// │                                                                         │
/// │  Caller sends quantity: 2                                              │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_quantity(2) ← THIS FUNCTION                                  │
/// │       │                                                                 │
/// │       ├── qty <= 0? → Error: "quantity must be positive"               │
/// │       │                                                                 │
/// │       ├── qty > u32::MAX? → Error: out of range                        │
/// │       │                                                                 │
/// │       └── OK → NonZeroU32 handed to VendingMachine::vend               │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<NonZeroU32> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    u32::try_from(qty)
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or_else(|| ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: u32::MAX as i64,
        })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_selection_id() {
        assert!(validate_selection_id("Soda").is_ok());
        assert!(validate_selection_id("diet-soda").is_ok());

        assert!(validate_selection_id("").is_err());
        assert!(validate_selection_id("   ").is_err());
        assert!(validate_selection_id(&"A".repeat(65)).is_err());
    }

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Candy Bar").is_ok());
        assert!(validate_item_name("").is_err());
        assert!(validate_item_name(&"A".repeat(201)).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_cents(150)).is_ok());
        assert!(validate_price(Money::from_cents(MAX_PRICE_CENTS)).is_ok());

        assert!(validate_price(Money::from_cents(-1)).is_err());
        assert!(validate_price(Money::from_cents(MAX_PRICE_CENTS + 1)).is_err());
    }

    #[test]
    fn test_validate_stock() {
        assert_eq!(validate_stock(0).unwrap(), 0);
        assert_eq!(validate_stock(12).unwrap(), 12);
        assert!(validate_stock(-1).is_err());
        assert!(validate_stock(u32::MAX as i64 + 1).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert_eq!(validate_quantity(1).unwrap().get(), 1);
        assert_eq!(validate_quantity(1000).unwrap().get(), 1000);
        assert_eq!(validate_quantity(u32::MAX as i64).unwrap().get(), u32::MAX);

        assert!(matches!(
            validate_quantity(0),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(validate_quantity(-1).is_err());
        assert!(matches!(
            validate_quantity(u32::MAX as i64 + 1),
            Err(ValidationError::OutOfRange { .. })
        ));
    }
}
