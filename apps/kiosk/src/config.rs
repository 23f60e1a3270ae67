//! Kiosk configuration.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults.
//!
//! | Variable                     | Default                 |
//! |------------------------------|-------------------------|
//! | `VENDING_CATALOG_PATH`       | `VendingInventory.json` |
//! | `VENDING_DEPOSIT_STEP_CENTS` | `500` ($5.00)           |

use serde::Serialize;
use std::env;
use std::path::PathBuf;
use vending_core::Money;

/// Default amount added by one press of the deposit button.
pub const DEFAULT_DEPOSIT_STEP_CENTS: i64 = 500;

/// Default catalog file, relative to the working directory.
pub const DEFAULT_CATALOG_PATH: &str = "VendingInventory.json";

/// Kiosk configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KioskConfig {
    /// Catalog document read once at startup
    pub catalog_path: PathBuf,

    /// Fixed amount added by `deposit_step`
    pub deposit_step: Money,
}

impl KioskConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let catalog_path = lookup("VENDING_CATALOG_PATH")
            .unwrap_or_else(|| DEFAULT_CATALOG_PATH.to_string());

        if catalog_path.trim().is_empty() {
            return Err(ConfigError::MissingRequired("VENDING_CATALOG_PATH".to_string()));
        }

        let deposit_step_cents: i64 = lookup("VENDING_DEPOSIT_STEP_CENTS")
            .unwrap_or_else(|| DEFAULT_DEPOSIT_STEP_CENTS.to_string())
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue("VENDING_DEPOSIT_STEP_CENTS".to_string()))?;

        if deposit_step_cents <= 0 {
            return Err(ConfigError::InvalidValue(
                "VENDING_DEPOSIT_STEP_CENTS".to_string(),
            ));
        }

        Ok(KioskConfig {
            catalog_path: PathBuf::from(catalog_path),
            deposit_step: Money::from_cents(deposit_step_cents),
        })
    }
}

impl Default for KioskConfig {
    fn default() -> Self {
        KioskConfig {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            deposit_step: Money::from_cents(DEFAULT_DEPOSIT_STEP_CENTS),
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}
