//! # Vend Command
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Caller picks Soda, sets quantity 2, presses "Purchase"                 │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  vend(state, "Soda", 2)                                                 │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  ┌────────────────────────────────────────────────────────────────┐    │
//! │  │  1. Validate quantity (positive, fits u32)                     │    │
//! │  │  2. Lock the machine                                           │    │
//! │  │  3. VendingMachine::vend  (selection → stock → funds → commit) │    │
//! │  │  4. Unlock                                                     │    │
//! │  └────────────────────────────────────────────────────────────────┘    │
//! │                    │                                                    │
//! │          ┌─────────┴──────────┐                                         │
//! │          ▼                    ▼                                         │
//! │   VendResponse           ApiError                                       │
//! │   (receipt, balance)     (title + message for an alert)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;
use vending_core::validation::validate_quantity;
use vending_core::{Selection, VendReceipt};

use crate::error::ApiError;
use crate::state::MachineState;

/// A completed vend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendResponse {
    /// Unique id for this vend (UUID v4)
    pub receipt_id: String,
    pub selection: String,
    pub quantity: u32,
    pub unit_price_cents: i64,
    pub total_cents: i64,
    /// Stock left for the selection
    pub remaining_stock: u32,
    /// Balance left in the machine
    pub balance_cents: i64,
    pub vended_at: DateTime<Utc>,
}

impl VendResponse {
    fn from_receipt(receipt: VendReceipt) -> Self {
        VendResponse {
            receipt_id: Uuid::new_v4().to_string(),
            selection: receipt.selection.to_string(),
            quantity: receipt.quantity,
            unit_price_cents: receipt.unit_price.cents(),
            total_cents: receipt.total_price.cents(),
            remaining_stock: receipt.remaining_stock,
            balance_cents: receipt.remaining_balance.cents(),
            vended_at: Utc::now(),
        }
    }
}

/// Vends `quantity` units of `selection`.
///
/// ## Errors
/// - `VALIDATION_ERROR` - quantity not positive or beyond `u32`
/// - `INVALID_SELECTION` - unknown selection
/// - `OUT_OF_STOCK` - not enough left
/// - `INSUFFICIENT_FUNDS` - `requiredCents` is the total cost
///
/// On any error the machine is unchanged.
pub fn vend(
    machine: &MachineState,
    selection: &str,
    quantity: i64,
) -> Result<VendResponse, ApiError> {
    debug!(selection, quantity, "vend command");

    let quantity = validate_quantity(quantity)?;
    let selection = Selection::new(selection);

    let receipt = machine
        .with_machine_mut(|m| m.vend(&selection, quantity))
        .map_err(|err| {
            debug!(%selection, error = %err, "Vend refused");
            ApiError::from(err)
        })?;

    let response = VendResponse::from_receipt(receipt);
    info!(
        receipt_id = %response.receipt_id,
        selection = %response.selection,
        quantity = response.quantity,
        total_cents = response.total_cents,
        "Vend completed"
    );

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::balance::{deposit, get_balance};
    use crate::commands::catalog::get_item;
    use crate::error::ErrorCode;
    use vending_core::VendingMachine;

    /// Soda $1.50 x5, Chips $1.25 x0.
    fn state() -> MachineState {
        let inventory = vending_catalog::from_json_str(
            r#"[
                { "name": "Soda",  "price": 1.5,  "quantity": 5, "iconIdentifier": "soda" },
                { "name": "Chips", "price": 1.25, "quantity": 0, "iconIdentifier": "chips" }
            ]"#,
        )
        .unwrap();
        MachineState::new(VendingMachine::new(inventory))
    }

    #[test]
    fn test_vend_success() {
        let state = state();
        deposit(&state, 500).unwrap();

        let response = vend(&state, "Soda", 2).unwrap();

        assert_eq!(response.selection, "Soda");
        assert_eq!(response.total_cents, 300);
        assert_eq!(response.remaining_stock, 3);
        assert_eq!(response.balance_cents, 200);
        assert!(Uuid::parse_str(&response.receipt_id).is_ok());

        assert_eq!(get_balance(&state).balance_cents, 200);
        assert_eq!(get_item(&state, "Soda").unwrap().quantity, 3);
    }

    #[test]
    fn test_vend_insufficient_funds() {
        let state = state();

        let err = vend(&state, "Soda", 1).unwrap_err();

        assert_eq!(err.code, ErrorCode::InsufficientFunds);
        assert_eq!(err.message, "You need $1.50 to complete the transaction");
        assert_eq!(err.required_cents, Some(150));
        assert_eq!(get_item(&state, "Soda").unwrap().quantity, 5);
        assert_eq!(get_balance(&state).balance_cents, 0);
    }

    #[test]
    fn test_vend_out_of_stock() {
        let state = state();
        deposit(&state, 10_000).unwrap();

        let err = vend(&state, "Chips", 1).unwrap_err();
        assert_eq!(err.code, ErrorCode::OutOfStock);
        assert_eq!(get_balance(&state).balance_cents, 10_000);
    }

    #[test]
    fn test_vend_invalid_selection() {
        let state = state();
        let err = vend(&state, "Unknown", 1).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidSelection);
    }

    #[test]
    fn test_vend_rejects_bad_quantity() {
        let state = state();
        deposit(&state, 500).unwrap();

        for bad in [0, -2, u32::MAX as i64 + 1] {
            let err = vend(&state, "Soda", bad).unwrap_err();
            assert_eq!(err.code, ErrorCode::ValidationError);
        }
        assert_eq!(get_item(&state, "Soda").unwrap().quantity, 5);
    }

    #[test]
    fn test_large_quantities_follow_stock_and_selection_rules() {
        let inventory = vending_catalog::from_json_str(
            r#"[
                { "name": "Gum",  "price": 0.01, "quantity": 5000, "iconIdentifier": "gum" },
                { "name": "Soda", "price": 1.5,  "quantity": 5,    "iconIdentifier": "soda" }
            ]"#,
        )
        .unwrap();
        let state = MachineState::new(VendingMachine::new(inventory));
        deposit(&state, 1_000_000).unwrap();

        let response = vend(&state, "Gum", 1000).unwrap();
        assert_eq!(response.total_cents, 1000);
        assert_eq!(response.remaining_stock, 4000);
        assert_eq!(response.balance_cents, 999_000);

        let err = vend(&state, "Unknown", 1000).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidSelection);

        let err = vend(&state, "Soda", 1000).unwrap_err();
        assert_eq!(err.code, ErrorCode::OutOfStock);

        assert_eq!(get_item(&state, "Soda").unwrap().quantity, 5);
        assert_eq!(get_balance(&state).balance_cents, 999_000);
    }

    /// Many callers racing for five sodas: exactly five succeed and the
    /// balance drops by exactly five sodas' worth.
    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_vends_never_oversell() {
        let state = state();
        deposit(&state, 100_000).unwrap();

        let mut handles = Vec::new();
        for _ in 0..32 {
            let state = state.clone();
            handles.push(tokio::task::spawn_blocking(move || vend(&state, "Soda", 1)));
        }

        let mut sold = 0;
        let mut refused = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => sold += 1,
                Err(err) => {
                    assert_eq!(err.code, ErrorCode::OutOfStock);
                    refused += 1;
                }
            }
        }

        assert_eq!(sold, 5);
        assert_eq!(refused, 27);
        assert_eq!(get_item(&state, "Soda").unwrap().quantity, 0);
        assert_eq!(get_balance(&state).balance_cents, 100_000 - 5 * 150);
    }
}
