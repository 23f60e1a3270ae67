//! # Kiosk Commands
//!
//! The caller boundary of the vending machine. Each command takes the
//! state it needs plus raw caller input, and returns a serializable
//! response or an [`ApiError`](crate::error::ApiError).
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── balance.rs  ◄─── get_balance, deposit, deposit_step
//! ├── catalog.rs  ◄─── list_selections, get_item, quote
//! └── vend.rs     ◄─── vend
//! ```
//!
//! ## Typical Session
//! ```text
//! list_selections ──► deposit_step ──► quote(Soda, 2) ──► vend(Soda, 2)
//!                                                              │
//!                         get_balance ◄────────────────────────┘
//! ```

pub mod balance;
pub mod catalog;
pub mod vend;
