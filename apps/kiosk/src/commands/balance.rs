//! # Balance Commands
//!
//! Reading and adding to the deposited balance.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use vending_core::Money;

use crate::config::KioskConfig;
use crate::error::ApiError;
use crate::state::MachineState;

/// Current balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceResponse {
    pub balance_cents: i64,
}

impl From<Money> for BalanceResponse {
    fn from(balance: Money) -> Self {
        BalanceResponse {
            balance_cents: balance.cents(),
        }
    }
}

/// Gets the deposited balance.
pub fn get_balance(machine: &MachineState) -> BalanceResponse {
    machine.with_machine(|m| m.amount_deposited()).into()
}

/// Deposits an explicit amount.
///
/// ## Errors
/// `INVALID_AMOUNT` for zero or negative amounts; the balance is unchanged.
pub fn deposit(machine: &MachineState, amount_cents: i64) -> Result<BalanceResponse, ApiError> {
    debug!(amount_cents, "deposit command");

    let balance = machine
        .with_machine_mut(|m| m.deposit(Money::from_cents(amount_cents)))
        .map_err(|err| {
            warn!(amount_cents, error = %err, "Deposit rejected");
            ApiError::from(err)
        })?;

    Ok(balance.into())
}

/// Deposits the configured fixed increment ($5.00 by default).
///
/// This is the one-button deposit: every press adds the same amount.
pub fn deposit_step(
    machine: &MachineState,
    config: &KioskConfig,
) -> Result<BalanceResponse, ApiError> {
    deposit(machine, config.deposit_step.cents())
}
