//! # vending-catalog: Catalog Loading
//!
//! Reads the external catalog document once at startup and hands the
//! resulting [`Inventory`](vending_core::Inventory) to the machine.
//!
//! ## Load Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  VendingInventory.json                                                  │
//! │       │  fs::read_to_string          ──► CatalogError::Io              │
//! │       ▼                                                                 │
//! │  serde_json::Value (generic tree)    ──► CatalogError::Parse           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  shape + field checks                ──► CatalogError::Malformed       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Inventory (display order = document order)                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no retry and no fallback. A bad catalog is an error for the
//! caller to report.
//!
//! ## Example
//! ```rust
//! let inventory = vending_catalog::from_json_str(
//!     r#"[{ "name": "Soda", "price": 1.5, "quantity": 5, "iconIdentifier": "soda" }]"#,
//! ).unwrap();
//! assert_eq!(inventory.len(), 1);
//! ```

pub mod error;
pub mod loader;

pub use error::{CatalogError, CatalogResult, MalformedCatalog};
pub use loader::{from_json_str, from_path, from_value};
