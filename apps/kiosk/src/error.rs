//! # API Error Type
//!
//! Unified error type for kiosk commands, plus the startup error.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Kiosk                              │
//! │                                                                         │
//! │  Command Function  Result<T, ApiError>                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Bad input? ──────── ValidationError ──────────┐                       │
//! │         │                                      │                       │
//! │         ▼                                      ▼                       │
//! │  Vend refused? ───── VendingError ──────────► ApiError ──► Caller      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Success ─────────────────────────────────────────────────► Caller     │
//! │                                                                         │
//! │  Startup: ConfigError / CatalogError ──► StartupError (fatal)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `ApiError` carries a machine-readable `code`, and the `title` and
//! `message` a caller shows in its alert.

use serde::Serialize;
use thiserror::Error;
use vending_catalog::CatalogError;
use vending_core::{ValidationError, VendingError};

use crate::config::ConfigError;

/// API error returned from kiosk commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "INSUFFICIENT_FUNDS",
///   "title": "Insufficient Funds",
///   "message": "You need $1.50 to complete the transaction",
///   "requiredCents": 150
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Short heading for an alert
    pub title: String,

    /// Human-readable error message for display
    pub message: String,

    /// Total cost of the refused purchase, for `INSUFFICIENT_FUNDS`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_cents: Option<i64>,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Unknown selection
    InvalidSelection,

    /// Not enough stock for the requested quantity
    OutOfStock,

    /// Balance does not cover the purchase
    InsufficientFunds,

    /// Deposit amount rejected
    InvalidAmount,

    /// Input validation failed
    ValidationError,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, title: impl Into<String>, message: impl Into<String>) -> Self {
        ApiError {
            code,
            title: title.into(),
            message: message.into(),
            required_cents: None,
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, "Invalid Input", message)
    }

    /// Creates the error for a selection the machine does not stock.
    pub fn invalid_selection() -> Self {
        ApiError::new(
            ErrorCode::InvalidSelection,
            "Invalid Selection",
            "Please make another selection",
        )
    }
}

/// Converts vend/deposit failures to API errors.
impl From<VendingError> for ApiError {
    fn from(err: VendingError) -> Self {
        match err {
            VendingError::InvalidSelection(_) => ApiError::invalid_selection(),
            VendingError::OutOfStock { .. } => ApiError::new(
                ErrorCode::OutOfStock,
                "Out of Stock",
                "This item is unavailable. Please make another selection",
            ),
            VendingError::InsufficientFunds { required } => ApiError {
                required_cents: Some(required.cents()),
                ..ApiError::new(
                    ErrorCode::InsufficientFunds,
                    "Insufficient Funds",
                    format!("You need {} to complete the transaction", required),
                )
            },
            VendingError::InvalidAmount(amount) => ApiError::new(
                ErrorCode::InvalidAmount,
                "Invalid Amount",
                format!("Cannot deposit {}", amount),
            ),
        }
    }
}

/// Converts input validation failures to API errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Startup Error
// =============================================================================

/// Failures that stop the kiosk from starting.
///
/// These are never defaulted away: a kiosk with a broken catalog does not
/// start with an empty one.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}
