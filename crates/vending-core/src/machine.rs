//! # Vending Machine
//!
//! The transaction model: stock levels plus a deposited-balance ledger.
//!
//! ## Vend Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  vend(selection, quantity)                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. selection in inventory? ── no ──► InvalidSelection                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  2. quantity <= stock? ─────── no ──► OutOfStock                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  3. balance >= price × qty? ── no ──► InsufficientFunds(price × qty)   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  4. stock -= qty; balance -= price × qty   (one step)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The first failing check wins. Nothing is written until every check has
//! passed, so a failed vend leaves stock and balance untouched.
//!
//! The machine does no locking. Callers that share it between threads
//! must hold one lock across the whole `vend` call.

use std::num::NonZeroU32;

use crate::error::{VendResult, VendingError};
use crate::money::Money;
use crate::types::{Inventory, Item, Quote, Selection, VendReceipt};

/// Stock levels and deposited balance for one machine.
#[derive(Debug, Clone)]
pub struct VendingMachine {
    inventory: Inventory,
    amount_deposited: Money,
}

impl VendingMachine {
    /// Creates a machine stocked from `inventory` with a zero balance.
    pub fn new(inventory: Inventory) -> Self {
        VendingMachine {
            inventory,
            amount_deposited: Money::zero(),
        }
    }

    /// Current deposited balance.
    #[inline]
    pub fn amount_deposited(&self) -> Money {
        self.amount_deposited
    }

    /// Selections in display order.
    pub fn selections(&self) -> &[Selection] {
        self.inventory.selections()
    }

    /// Current state of the item for `selection`, reflecting prior vends.
    pub fn item(&self, selection: &Selection) -> Option<&Item> {
        self.inventory.get(selection)
    }

    /// Read access to the whole inventory.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Adds funds to the balance and returns the new balance.
    ///
    /// ## Errors
    /// `InvalidAmount` if `amount <= 0` or the balance would overflow.
    /// The balance is unchanged on error.
    pub fn deposit(&mut self, amount: Money) -> VendResult<Money> {
        if !amount.is_positive() {
            return Err(VendingError::InvalidAmount(amount));
        }

        let balance = self
            .amount_deposited
            .checked_add(amount)
            .ok_or(VendingError::InvalidAmount(amount))?;

        self.amount_deposited = balance;
        Ok(balance)
    }

    /// Prices a purchase without performing it.
    ///
    /// Returns `None` for an unknown selection. `stock_after` floors at zero
    /// when the quantity exceeds stock.
    pub fn quote(&self, selection: &Selection, quantity: u32) -> Option<Quote> {
        let item = self.inventory.get(selection)?;

        Some(Quote {
            selection: selection.clone(),
            quantity,
            unit_price: item.price(),
            total_price: item.total_for(quantity),
            stock_after: item.quantity().saturating_sub(quantity),
        })
    }

    /// Vends `quantity` units of `selection`.
    ///
    /// ## Errors
    /// Checked in this order, first failure wins:
    /// 1. `InvalidSelection` - selection unknown
    /// 2. `OutOfStock` - `quantity` exceeds current stock
    /// 3. `InsufficientFunds { required }` - balance below `price × quantity`;
    ///    `required` is the total cost
    ///
    /// On error neither stock nor balance changes.
    pub fn vend(&mut self, selection: &Selection, quantity: NonZeroU32) -> VendResult<VendReceipt> {
        let requested = quantity.get();

        let item = self
            .inventory
            .get(selection)
            .ok_or_else(|| VendingError::InvalidSelection(selection.clone()))?;

        if requested > item.quantity() {
            return Err(VendingError::OutOfStock {
                selection: selection.clone(),
                available: item.quantity(),
                requested,
            });
        }

        let total = item.total_for(requested);
        if self.amount_deposited < total {
            return Err(VendingError::InsufficientFunds { required: total });
        }

        // All checks passed; commit both fields together.
        let updated = item.with_quantity(item.quantity() - requested);
        let unit_price = updated.price();
        let remaining_stock = updated.quantity();

        self.inventory.replace(selection, updated);
        self.amount_deposited -= total;

        Ok(VendReceipt {
            selection: selection.clone(),
            quantity: requested,
            unit_price,
            total_price: total,
            remaining_stock,
            remaining_balance: self.amount_deposited,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::IconRef;

    fn qty(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    fn soda() -> Selection {
        Selection::new("Soda")
    }

    fn chips() -> Selection {
        Selection::new("Chips")
    }

    /// Soda $1.50 x5, Chips $1.25 x0, Water $1.00 x10.
    fn test_machine() -> VendingMachine {
        let entry = |name: &str, cents: i64, stock: u32| {
            (
                Selection::new(name),
                Item::new(name, Money::from_cents(cents), stock, IconRef::new(name)).unwrap(),
            )
        };

        let inventory = Inventory::from_entries(vec![
            entry("Soda", 150, 5),
            entry("Chips", 125, 0),
            entry("Water", 100, 10),
        ])
        .unwrap();

        VendingMachine::new(inventory)
    }

    fn stock_of(machine: &VendingMachine, selection: &Selection) -> u32 {
        machine.item(selection).unwrap().quantity()
    }

    #[test]
    fn test_new_machine_starts_with_zero_balance() {
        let machine = test_machine();
        assert_eq!(machine.amount_deposited(), Money::zero());
    }

    #[test]
    fn test_deposit_then_vend_soda() {
        let mut machine = test_machine();

        let balance = machine.deposit(Money::from_cents(500)).unwrap();
        assert_eq!(balance, Money::from_cents(500));

        let receipt = machine.vend(&soda(), qty(2)).unwrap();

        assert_eq!(stock_of(&machine, &soda()), 3);
        assert_eq!(machine.amount_deposited(), Money::from_cents(200));
        assert_eq!(receipt.total_price, Money::from_cents(300));
        assert_eq!(receipt.unit_price, Money::from_cents(150));
        assert_eq!(receipt.remaining_stock, 3);
        assert_eq!(receipt.remaining_balance, Money::from_cents(200));
    }

    #[test]
    fn test_vend_without_deposit_reports_total_cost() {
        let mut machine = test_machine();

        let err = machine.vend(&soda(), qty(1)).unwrap_err();

        assert_eq!(
            err,
            VendingError::InsufficientFunds {
                required: Money::from_cents(150)
            }
        );
        assert_eq!(stock_of(&machine, &soda()), 5);
        assert_eq!(machine.amount_deposited(), Money::zero());
    }

    #[test]
    fn test_insufficient_funds_required_is_total_not_shortfall() {
        let mut machine = test_machine();
        machine.deposit(Money::from_cents(200)).unwrap();

        // 3 × $1.50 = $4.50; shortfall would be $2.50
        let err = machine.vend(&soda(), qty(3)).unwrap_err();
        assert_eq!(
            err,
            VendingError::InsufficientFunds {
                required: Money::from_cents(450)
            }
        );
    }

    #[test]
    fn test_empty_slot_is_out_of_stock_regardless_of_balance() {
        let mut machine = test_machine();
        machine.deposit(Money::from_cents(100_000)).unwrap();

        let err = machine.vend(&chips(), qty(1)).unwrap_err();

        assert!(matches!(
            err,
            VendingError::OutOfStock {
                available: 0,
                requested: 1,
                ..
            }
        ));
        assert_eq!(machine.amount_deposited(), Money::from_cents(100_000));
    }

    #[test]
    fn test_unknown_selection_is_invalid() {
        let mut machine = test_machine();
        machine.deposit(Money::from_cents(500)).unwrap();

        let err = machine.vend(&Selection::new("Unknown"), qty(1)).unwrap_err();
        assert_eq!(err, VendingError::InvalidSelection(Selection::new("Unknown")));
        assert_eq!(machine.amount_deposited(), Money::from_cents(500));
    }

    #[test]
    fn test_stock_is_checked_before_funds() {
        let mut machine = test_machine();

        // No money AND too many: stock wins
        let err = machine.vend(&soda(), qty(6)).unwrap_err();
        assert!(matches!(err, VendingError::OutOfStock { .. }));
    }

    #[test]
    fn test_exact_balance_is_enough() {
        let mut machine = test_machine();
        machine.deposit(Money::from_cents(300)).unwrap();

        machine.vend(&soda(), qty(2)).unwrap();
        assert_eq!(machine.amount_deposited(), Money::zero());
    }

    #[test]
    fn test_vend_entire_stock() {
        let mut machine = test_machine();
        machine.deposit(Money::from_cents(1_000)).unwrap();

        machine.vend(&soda(), qty(5)).unwrap();
        assert_eq!(stock_of(&machine, &soda()), 0);

        let err = machine.vend(&soda(), qty(1)).unwrap_err();
        assert!(matches!(err, VendingError::OutOfStock { available: 0, .. }));
        assert_eq!(machine.amount_deposited(), Money::from_cents(250));
    }

    #[test]
    fn test_deposit_rejects_non_positive() {
        let mut machine = test_machine();

        assert_eq!(
            machine.deposit(Money::zero()),
            Err(VendingError::InvalidAmount(Money::zero()))
        );
        assert_eq!(
            machine.deposit(Money::from_cents(-500)),
            Err(VendingError::InvalidAmount(Money::from_cents(-500)))
        );
        assert_eq!(machine.amount_deposited(), Money::zero());
    }

    #[test]
    fn test_deposit_overflow_is_rejected() {
        let mut machine = test_machine();
        machine.deposit(Money::from_cents(i64::MAX)).unwrap();

        assert!(machine.deposit(Money::from_cents(1)).is_err());
        assert_eq!(machine.amount_deposited(), Money::from_cents(i64::MAX));
    }

    #[test]
    fn test_selections_in_catalog_order() {
        let machine = test_machine();
        let order: Vec<&str> = machine.selections().iter().map(Selection::as_str).collect();
        assert_eq!(order, vec!["Soda", "Chips", "Water"]);
    }

    #[test]
    fn test_item_lookup_reflects_depletion() {
        let mut machine = test_machine();
        machine.deposit(Money::from_cents(500)).unwrap();
        machine.vend(&Selection::new("Water"), qty(4)).unwrap();

        let water = machine.item(&Selection::new("Water")).unwrap();
        assert_eq!(water.quantity(), 6);
        assert!(machine.item(&Selection::new("Unknown")).is_none());
    }

    #[test]
    fn test_quote_does_not_mutate() {
        let machine = test_machine();

        let quote = machine.quote(&soda(), 2).unwrap();
        assert_eq!(quote.unit_price, Money::from_cents(150));
        assert_eq!(quote.total_price, Money::from_cents(300));
        assert_eq!(quote.stock_after, 3);

        let over = machine.quote(&soda(), 9).unwrap();
        assert_eq!(over.stock_after, 0);

        assert!(machine.quote(&Selection::new("Unknown"), 1).is_none());
        assert_eq!(stock_of(&machine, &soda()), 5);
    }

    // =========================================================================
    // Property Tests
    // =========================================================================

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn single_item_machine(price: i64, stock: u32) -> VendingMachine {
            let item = Item::new("Soda", Money::from_cents(price), stock, IconRef::new("soda")).unwrap();
            VendingMachine::new(Inventory::from_entries(vec![(soda(), item)]).unwrap())
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: the vend outcome is fully determined by stock and
            /// balance, and a failure changes nothing.
            #[test]
            fn vend_follows_stock_then_funds(
                price in 0i64..10_000,
                stock in 0u32..50,
                requested in 1u32..60,
                deposit in 0i64..200_000,
            ) {
                let mut machine = single_item_machine(price, stock);
                if deposit > 0 {
                    machine.deposit(Money::from_cents(deposit)).unwrap();
                }
                let before = machine.amount_deposited();
                let cost = Money::from_cents(price * requested as i64);

                let result = machine.vend(&soda(), NonZeroU32::new(requested).unwrap());

                if requested > stock {
                    let is_out_of_stock = matches!(result, Err(VendingError::OutOfStock { .. }));
                    prop_assert!(is_out_of_stock);
                    prop_assert_eq!(stock_of(&machine, &soda()), stock);
                    prop_assert_eq!(machine.amount_deposited(), before);
                } else if before < cost {
                    prop_assert_eq!(result, Err(VendingError::InsufficientFunds { required: cost }));
                    prop_assert_eq!(stock_of(&machine, &soda()), stock);
                    prop_assert_eq!(machine.amount_deposited(), before);
                } else {
                    prop_assert!(result.is_ok());
                    prop_assert_eq!(stock_of(&machine, &soda()), stock - requested);
                    prop_assert_eq!(machine.amount_deposited().cents(), before.cents() - cost.cents());
                }
            }

            /// Property: unknown selections fail the same way whatever the
            /// quantity or balance.
            #[test]
            fn unknown_selection_always_invalid(
                requested in 1u32..10_000,
                deposit in 1i64..1_000_000,
            ) {
                let mut machine = single_item_machine(150, 5);
                machine.deposit(Money::from_cents(deposit)).unwrap();

                let unknown = Selection::new("Unknown");
                let result = machine.vend(&unknown, NonZeroU32::new(requested).unwrap());
                prop_assert_eq!(result, Err(VendingError::InvalidSelection(unknown)));
                prop_assert_eq!(machine.amount_deposited(), Money::from_cents(deposit));
            }

            /// Property: two deposits equal one deposit of the sum.
            #[test]
            fn deposits_are_additive(a in 1i64..1_000_000, b in 1i64..1_000_000) {
                let mut split = single_item_machine(150, 5);
                split.deposit(Money::from_cents(a)).unwrap();
                split.deposit(Money::from_cents(b)).unwrap();

                let mut combined = single_item_machine(150, 5);
                combined.deposit(Money::from_cents(a + b)).unwrap();

                prop_assert_eq!(split.amount_deposited(), combined.amount_deposited());
            }
        }
    }
}
