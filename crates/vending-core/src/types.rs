//! # Domain Types
//!
//! Core domain types for the vending machine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   Selection     │   │      Item       │   │   Inventory     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  "Soda"         │──►│  name           │◄──│  order (Vec)    │       │
//! │  │  "Chips"        │   │  price (Money)  │   │  items (Map)    │       │
//! │  │  ...            │   │  quantity (u32) │   │                 │       │
//! │  └─────────────────┘   │  icon (IconRef) │   └─────────────────┘       │
//! │                        └─────────────────┘                              │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │     Quote       │   │  VendReceipt    │                             │
//! │  │  (read only)    │   │  (after vend)   │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use ts_rs::TS;

use crate::money::Money;
use crate::validation::{validate_item_name, validate_price, validate_selection_id, ValidationResult};
use crate::error::ValidationError;

// =============================================================================
// Selection
// =============================================================================

/// Identifier for one purchasable product line.
///
/// The set of selections is fixed when the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, TS)]
#[ts(export)]
pub struct Selection(String);

impl Selection {
    pub fn new(id: impl Into<String>) -> Self {
        Selection(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Icon Reference
// =============================================================================

/// Opaque reference to a display asset. The core only passes it through.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, TS)]
#[ts(export)]
pub struct IconRef(String);

impl IconRef {
    pub fn new(id: impl Into<String>) -> Self {
        IconRef(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// Item
// =============================================================================

/// Descriptive and stock record for a selection.
///
/// ## Invariants
/// - `name` is non-empty
/// - `0 <= price <= MAX_PRICE_CENTS`
/// - `quantity` can never go below zero (unsigned)
///
/// Items are values: a change in stock produces a new `Item` through
/// [`Item::with_quantity`] and the machine swaps its copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Item {
    name: String,
    price: Money,
    quantity: u32,
    icon: IconRef,
}

impl Item {
    /// Creates an item, validating name and price.
    ///
    /// ## Example
    /// ```rust
    /// use vending_core::{IconRef, Item, Money};
    ///
    /// let soda = Item::new("Soda", Money::from_cents(150), 5, IconRef::new("soda"));
    /// assert!(soda.is_ok());
    ///
    /// let free_lunch = Item::new("", Money::zero(), 1, IconRef::new("lunch"));
    /// assert!(free_lunch.is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        price: Money,
        quantity: u32,
        icon: IconRef,
    ) -> ValidationResult<Self> {
        let name = name.into();
        validate_item_name(&name)?;
        validate_price(price)?;

        Ok(Item {
            name,
            price,
            quantity,
            icon,
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    /// Current stock.
    #[inline]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    #[inline]
    pub fn icon(&self) -> &IconRef {
        &self.icon
    }

    /// Total cost of `quantity` units (price × quantity).
    ///
    /// Cannot overflow: price is capped at `MAX_PRICE_CENTS`.
    #[inline]
    pub fn total_for(&self, quantity: u32) -> Money {
        self.price.multiply_quantity(quantity)
    }

    /// Returns a copy of this item carrying a different stock level.
    pub fn with_quantity(&self, quantity: u32) -> Item {
        Item {
            quantity,
            ..self.clone()
        }
    }
}

// =============================================================================
// Inventory
// =============================================================================

/// Ordered mapping from selection to item.
///
/// ## Ordering
/// `selections()` returns entries in insertion order, which is the order
/// the catalog listed them. That is the display order.
///
/// ## Invariants
/// - Every selection in `order` has exactly one entry in `items`
/// - No selection appears twice
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    order: Vec<Selection>,
    items: HashMap<Selection, Item>,
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Inventory::default()
    }

    /// Builds an inventory from `(selection, item)` pairs in display order.
    pub fn from_entries<I>(entries: I) -> ValidationResult<Self>
    where
        I: IntoIterator<Item = (Selection, Item)>,
    {
        let mut inventory = Inventory::new();
        for (selection, item) in entries {
            inventory.insert(selection, item)?;
        }
        Ok(inventory)
    }

    /// Appends a selection.
    ///
    /// ## Returns
    /// - `Err(ValidationError::Duplicate)` if the selection is already present
    /// - `Err(ValidationError::Required)` if the identifier is blank
    pub fn insert(&mut self, selection: Selection, item: Item) -> ValidationResult<()> {
        validate_selection_id(selection.as_str())?;

        if self.items.contains_key(&selection) {
            return Err(ValidationError::Duplicate {
                field: "selection".to_string(),
                value: selection.to_string(),
            });
        }

        self.order.push(selection.clone());
        self.items.insert(selection, item);
        Ok(())
    }

    pub fn get(&self, selection: &Selection) -> Option<&Item> {
        self.items.get(selection)
    }

    /// Replaces the item stored for an existing selection.
    pub(crate) fn replace(&mut self, selection: &Selection, item: Item) {
        if let Some(slot) = self.items.get_mut(selection) {
            *slot = item;
        }
    }

    /// Selections in display order.
    pub fn selections(&self) -> &[Selection] {
        &self.order
    }

    /// Iterates `(selection, item)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&Selection, &Item)> {
        self.order
            .iter()
            .filter_map(move |s| self.items.get(s).map(|item| (s, item)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

// =============================================================================
// Quote
// =============================================================================

/// Read-only preview of a purchase: what it would cost and what would be
/// left on the shelf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Quote {
    pub selection: Selection,
    pub quantity: u32,
    pub unit_price: Money,
    pub total_price: Money,
    /// Stock left after the purchase, floored at zero.
    pub stock_after: u32,
}

// =============================================================================
// Vend Receipt
// =============================================================================

/// Outcome of a successful vend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct VendReceipt {
    pub selection: Selection,
    pub quantity: u32,
    pub unit_price: Money,
    pub total_price: Money,
    /// Stock left for this selection.
    pub remaining_stock: u32,
    /// Balance left in the machine (change is retained).
    pub remaining_balance: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================
