//! # Catalog Commands
//!
//! Read-only views of what the machine sells.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  list_selections  → every slot, display order, current stock            │
//! │  get_item         → one slot                                            │
//! │  quote            → total price and stock left for a quantity           │
//! │                                                                         │
//! │  None of these change the machine.                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;
use vending_core::validation::validate_quantity;
use vending_core::{Item, Quote, Selection};

use crate::error::ApiError;
use crate::state::MachineState;

/// One slot of the machine as the caller sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionDto {
    pub selection: String,
    pub name: String,
    pub price_cents: i64,
    pub quantity: u32,
    pub icon: String,
}

impl SelectionDto {
    fn new(selection: &Selection, item: &Item) -> Self {
        SelectionDto {
            selection: selection.to_string(),
            name: item.name().to_string(),
            price_cents: item.price().cents(),
            quantity: item.quantity(),
            icon: item.icon().as_str().to_string(),
        }
    }
}

/// Price preview for a selection and quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub selection: String,
    pub quantity: u32,
    pub unit_price_cents: i64,
    pub total_price_cents: i64,
    /// Stock left if this purchase went through (never below zero)
    pub stock_after: u32,
}

impl From<Quote> for QuoteResponse {
    fn from(quote: Quote) -> Self {
        QuoteResponse {
            selection: quote.selection.to_string(),
            quantity: quote.quantity,
            unit_price_cents: quote.unit_price.cents(),
            total_price_cents: quote.total_price.cents(),
            stock_after: quote.stock_after,
        }
    }
}

/// Lists every selection in display order.
pub fn list_selections(machine: &MachineState) -> Vec<SelectionDto> {
    machine.with_machine(|m| {
        m.inventory()
            .iter()
            .map(|(selection, item)| SelectionDto::new(selection, item))
            .collect()
    })
}

/// Gets one selection.
///
/// ## Errors
/// `INVALID_SELECTION` if the machine does not stock it.
pub fn get_item(machine: &MachineState, selection: &str) -> Result<SelectionDto, ApiError> {
    let selection = Selection::new(selection);
    machine
        .with_machine(|m| m.item(&selection).map(|item| SelectionDto::new(&selection, item)))
        .ok_or_else(ApiError::invalid_selection)
}

/// Prices a purchase without performing it.
///
/// ## Errors
/// - `VALIDATION_ERROR` for a quantity that is not positive or beyond `u32`
/// - `INVALID_SELECTION` if the machine does not stock the selection
pub fn quote(
    machine: &MachineState,
    selection: &str,
    quantity: i64,
) -> Result<QuoteResponse, ApiError> {
    debug!(selection, quantity, "quote command");

    let quantity = validate_quantity(quantity)?;
    let selection = Selection::new(selection);

    machine
        .with_machine(|m| m.quote(&selection, quantity.get()))
        .map(QuoteResponse::from)
        .ok_or_else(ApiError::invalid_selection)
}
