//! # vending-core: Pure Transaction Model for the Vending Machine
//!
//! This crate is the **heart** of the vending machine. It owns the inventory,
//! the deposited-balance ledger, and the rules of a vend. Nothing in here
//! touches the file system, the clock, or a logger.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Vending Machine Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Kiosk (apps/kiosk)                           │   │
//! │  │    deposit ──► list_selections ──► quote ──► vend               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ vending-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  machine  │  │ validation│  │   │
//! │  │   │ Selection │  │   Money   │  │  deposit  │  │   rules   │  │   │
//! │  │   │ Inventory │  │  (cents)  │  │   vend    │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • PURE STATE TRANSITIONS                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                ▲                                        │
//! │  ┌─────────────────────────────┴───────────────────────────────────┐   │
//! │  │              vending-catalog (startup only)                     │   │
//! │  │              JSON document ──► Inventory                        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Selection, Item, Inventory, Quote, VendReceipt
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`machine`] - The `VendingMachine` and its `vend` transaction
//! - [`error`] - Domain error types
//! - [`validation`] - Field validation rules
//!
//! ## Example Usage
//!
//! ```rust
//! use std::num::NonZeroU32;
//! use vending_core::{IconRef, Inventory, Item, Money, Selection, VendingMachine};
//!
//! let mut inventory = Inventory::new();
//! let soda = Item::new("Soda", Money::from_cents(150), 5, IconRef::new("soda")).unwrap();
//! inventory.insert(Selection::new("Soda"), soda).unwrap();
//!
//! let mut machine = VendingMachine::new(inventory);
//! machine.deposit(Money::from_cents(500)).unwrap();
//!
//! let two = NonZeroU32::new(2).unwrap();
//! machine.vend(&Selection::new("Soda"), two).unwrap();
//!
//! assert_eq!(machine.amount_deposited().cents(), 200);
//! assert_eq!(machine.item(&Selection::new("Soda")).unwrap().quantity(), 3);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod machine;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ValidationError, VendResult, VendingError};
pub use machine::VendingMachine;
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum unit price accepted for an item ($1,000,000.00).
///
/// Keeps `price * quantity` inside `i64` for any `u32` quantity.
pub const MAX_PRICE_CENTS: i64 = 100_000_000;
