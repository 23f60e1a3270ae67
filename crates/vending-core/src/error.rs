//! # Error Types
//!
//! Domain-specific error types for vending-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  vending-core errors (this file)                                       │
//! │  ├── VendingError     - Deposit / vend failures (recoverable)          │
//! │  └── ValidationError  - Field validation failures                      │
//! │                                                                         │
//! │  vending-catalog errors (separate crate)                               │
//! │  └── CatalogError     - MalformedCatalog, I/O, parse (fatal)           │
//! │                                                                         │
//! │  Kiosk errors (in app)                                                 │
//! │  └── ApiError         - What the caller sees (serialized)              │
//! │                                                                         │
//! │  Flow: VendingError → ApiError → Caller                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these are logged or retried here. The caller decides.

use thiserror::Error;

use crate::money::Money;
use crate::types::Selection;

// =============================================================================
// Vending Error
// =============================================================================

/// Failures of a deposit or a vend.
///
/// Every variant leaves the machine exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VendingError {
    /// The selection is not stocked by this machine.
    ///
    /// ## User Workflow
    /// Caller re-prompts for another selection.
    #[error("Invalid selection: {0}")]
    InvalidSelection(Selection),

    /// The requested quantity exceeds what is left.
    ///
    /// ## User Workflow
    /// ```text
    /// vend(Chips, 3)
    ///      │
    ///      ▼
    /// Check stock: available=1
    ///      │
    ///      ▼
    /// OutOfStock { selection: "Chips", available: 1, requested: 3 }
    ///      │
    ///      ▼
    /// Caller shows: "This item is unavailable. Please make another selection"
    /// ```
    #[error("{selection} is out of stock: available {available}, requested {requested}")]
    OutOfStock {
        selection: Selection,
        available: u32,
        requested: u32,
    },

    /// The deposited balance does not cover the purchase.
    ///
    /// `required` is the TOTAL cost of the purchase (`price × quantity`),
    /// not the shortfall. Callers display it as "You need $X to complete
    /// the transaction".
    #[error("Insufficient funds: {required} required to complete the transaction")]
    InsufficientFunds { required: Money },

    /// A deposit was zero, negative, or would overflow the balance.
    #[error("Invalid amount: {0}")]
    InvalidAmount(Money),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised while building items and inventories, and by the kiosk when it
/// turns raw caller input into typed values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g. a price with three decimals).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g. the same selection listed twice).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with VendingError.
pub type VendResult<T> = Result<T, VendingError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_funds_reports_total() {
        let err = VendingError::InsufficientFunds {
            required: Money::from_cents(150),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient funds: $1.50 required to complete the transaction"
        );
    }

    #[test]
    fn test_out_of_stock_message() {
        let err = VendingError::OutOfStock {
            selection: Selection::new("Chips"),
            available: 0,
            requested: 1,
        };
        assert_eq!(
            err.to_string(),
            "Chips is out of stock: available 0, requested 1"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::Duplicate {
            field: "selection".to_string(),
            value: "Soda".to_string(),
        };
        assert_eq!(err.to_string(), "selection 'Soda' already exists");
    }
}
