//! # Inventory Ledger
//!
//! The in-memory stock/cash register: validates purchase requests against
//! item availability and deposited funds.
//!
//! ## Purchase Guard Chain
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     purchase(name)                                  │
//! │                                                                     │
//! │  name in inventory? ──no──► InvalidSelection                        │
//! │       │ yes                                                         │
//! │       ▼                                                             │
//! │  count > 0? ────────no──► OutOfStock                                │
//! │       │ yes                                                         │
//! │       ▼                                                             │
//! │  price <= balance? ─no──► InsufficientFunds { price - balance }     │
//! │       │ yes                                                         │
//! │       ▼                                                             │
//! │  balance -= price; count -= 1; Ok(())                               │
//! │                                                                     │
//! │  First failure wins. NO state changes on any failure path.          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! The ledger is single-owner and synchronous: one caller drives it
//! sequentially, exactly like a physical register with one coin slot. If a
//! host ever shares it across threads, the whole ledger goes behind one
//! mutex (the state is far too small for finer locking to mean anything).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::coins::Coins;
use crate::error::{LedgerError, LedgerResult};
use crate::types::{Item, LedgerSummary};
use crate::validation::{validate_count, validate_item_name, validate_price};
use crate::MAX_ITEM_COUNT;

// =============================================================================
// Ledger
// =============================================================================

/// The register state: stocked items plus the buyer's deposited coins.
///
/// ## Invariants
/// - Item names are unique (map keys)
/// - `balance` and every `count` are non-negative (by type)
/// - `balance` changes only through `deposit`, `purchase`, and `refund`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Ledger {
    /// Stocked items, keyed by display name.
    ///
    /// BTreeMap so iteration order is stable for rendering.
    inventory: BTreeMap<String, Item>,

    /// Coins currently deposited by the buyer.
    balance: Coins,
}

impl Ledger {
    /// Creates an empty register with zero balance.
    pub fn new() -> Self {
        Ledger {
            inventory: BTreeMap::new(),
            balance: Coins::zero(),
        }
    }

    /// Creates a register stocked with a fixed starting inventory.
    ///
    /// ## Example
    /// ```rust
    /// use vendo_core::{Coins, Item, Ledger};
    ///
    /// let ledger = Ledger::with_inventory([
    ///     ("Candy Bar", Item::new(Coins::new(12), 7)),
    ///     ("Chips", Item::new(Coins::new(10), 4)),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(ledger.balance(), Coins::zero());
    /// ```
    pub fn with_inventory<I, S>(items: I) -> LedgerResult<Self>
    where
        I: IntoIterator<Item = (S, Item)>,
        S: Into<String>,
    {
        let mut ledger = Ledger::new();
        for (name, item) in items {
            ledger.stock(name, item)?;
        }
        Ok(ledger)
    }

    /// Puts an item on the shelf, validating catalog rules first.
    ///
    /// Stocking an existing name replaces that slot (price and count).
    pub fn stock(&mut self, name: impl Into<String>, item: Item) -> LedgerResult<()> {
        let name = name.into();
        validate_item_name(&name)?;
        validate_price(item.price.units())?;
        validate_count(item.count)?;

        // Key by the trimmed name: validation ignores surrounding whitespace,
        // so the stored key must too, or " Chips" and "Chips" become two slots
        self.inventory.insert(name.trim().to_string(), item);
        Ok(())
    }

    // =========================================================================
    // Buyer Operations
    // =========================================================================

    /// Adds coins to the deposited balance.
    ///
    /// Cannot fail: amounts are non-negative by type and addition saturates.
    /// Depositing zero is a no-op.
    pub fn deposit(&mut self, amount: Coins) {
        self.balance += amount;
    }

    /// Validates and executes a purchase request.
    ///
    /// Guards run in order and the first failure wins; a failed purchase
    /// leaves the ledger exactly as it was. See the module docs for the
    /// full chain.
    ///
    /// ## Example
    /// ```rust
    /// use vendo_core::{Coins, Item, Ledger, LedgerError};
    ///
    /// let mut ledger = Ledger::with_inventory([
    ///     ("Chips", Item::new(Coins::new(10), 4)),
    /// ])
    /// .unwrap();
    ///
    /// // No coins in yet: exactly 10 short
    /// assert_eq!(
    ///     ledger.purchase("Chips"),
    ///     Err(LedgerError::InsufficientFunds { shortfall: Coins::new(10) })
    /// );
    ///
    /// ledger.deposit(Coins::new(10));
    /// assert!(ledger.purchase("Chips").is_ok());
    /// ```
    pub fn purchase(&mut self, name: &str) -> LedgerResult<()> {
        let Some(item) = self.inventory.get_mut(name) else {
            return Err(LedgerError::InvalidSelection {
                name: name.to_string(),
            });
        };

        if !item.is_in_stock() {
            return Err(LedgerError::OutOfStock {
                name: name.to_string(),
            });
        }

        let Some(remaining) = self.balance.checked_sub(item.price) else {
            return Err(LedgerError::InsufficientFunds {
                // Exact: the funds guard just established price > balance
                shortfall: item.price.saturating_sub(self.balance),
            });
        };

        // All guards passed: mutate, and only now
        self.balance = remaining;
        item.count -= 1;

        Ok(())
    }

    /// Returns the undeposited balance to the buyer (coin return).
    ///
    /// The balance is reset to zero; the returned amount is the buyer's.
    pub fn refund(&mut self) -> Coins {
        std::mem::take(&mut self.balance)
    }

    // =========================================================================
    // Operator Operations
    // =========================================================================

    /// Adds units to an existing slot's stock count.
    ///
    /// ## Behavior
    /// - Unknown name: `InvalidSelection` (restocking cannot invent slots)
    /// - The count is clamped at `MAX_ITEM_COUNT` (slot capacity)
    pub fn restock(&mut self, name: &str, additional: u32) -> LedgerResult<()> {
        let Some(item) = self.inventory.get_mut(name) else {
            return Err(LedgerError::InvalidSelection {
                name: name.to_string(),
            });
        };

        item.count = item.count.saturating_add(additional).min(MAX_ITEM_COUNT);
        Ok(())
    }

    // =========================================================================
    // Read Accessors
    // =========================================================================

    /// Coins currently deposited by the buyer.
    #[inline]
    pub fn balance(&self) -> Coins {
        self.balance
    }

    /// Looks up an item by name.
    pub fn item(&self, name: &str) -> Option<&Item> {
        self.inventory.get(name)
    }

    /// Whether a stocked slot is sold out.
    ///
    /// Returns `None` for names this register has never stocked, so callers
    /// can tell "empty slot" apart from "no such slot".
    pub fn is_sold_out(&self, name: &str) -> Option<bool> {
        self.inventory.get(name).map(|item| !item.is_in_stock())
    }

    /// Iterates the shelf in stable (alphabetical) order.
    pub fn items(&self) -> impl Iterator<Item = (&str, &Item)> {
        self.inventory.iter().map(|(name, item)| (name.as_str(), item))
    }

    /// Number of distinct item names stocked (including sold-out slots).
    pub fn distinct_items(&self) -> usize {
        self.inventory.len()
    }

    /// Total units on the shelf across all items.
    pub fn total_units(&self) -> u64 {
        self.inventory.values().map(|i| i.count as u64).sum()
    }

    /// Total shelf value in coins.
    pub fn stock_value_units(&self) -> u64 {
        self.inventory.values().map(|i| i.stock_value_units()).sum()
    }

    /// Snapshot of register totals for rendering.
    pub fn summary(&self) -> LedgerSummary {
        LedgerSummary::from(self)
    }
}

impl From<&Ledger> for LedgerSummary {
    fn from(ledger: &Ledger) -> Self {
        LedgerSummary {
            distinct_items: ledger.distinct_items(),
            total_units: ledger.total_units(),
            stock_value_units: ledger.stock_value_units(),
            balance_units: ledger.balance().units(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// The shelf from the source material: Candy Bar 12/7, Chips 10/4,
    /// Pretzels 7/11.
    fn seed_ledger() -> Ledger {
        Ledger::with_inventory([
            ("Candy Bar", Item::new(Coins::new(12), 7)),
            ("Chips", Item::new(Coins::new(10), 4)),
            ("Pretzels", Item::new(Coins::new(7), 11)),
        ])
        .unwrap()
    }

    #[test]
    fn test_purchase_succeeds_with_exact_funds() {
        let mut ledger = seed_ledger();
        ledger.deposit(Coins::new(10));

        ledger.purchase("Chips").unwrap();

        assert_eq!(ledger.item("Chips").unwrap().count, 3);
        assert_eq!(ledger.balance(), Coins::zero());
    }

    #[test]
    fn test_purchase_leaves_other_items_untouched() {
        let mut ledger = seed_ledger();
        ledger.deposit(Coins::new(10));

        ledger.purchase("Chips").unwrap();

        assert_eq!(ledger.item("Candy Bar").unwrap().count, 7);
        assert_eq!(ledger.item("Pretzels").unwrap().count, 11);
    }

    #[test]
    fn test_purchase_unknown_item_is_invalid_selection() {
        let mut ledger = seed_ledger();
        ledger.deposit(Coins::new(100));

        let err = ledger.purchase("Soda").unwrap_err();
        assert_eq!(
            err,
            LedgerError::InvalidSelection {
                name: "Soda".to_string()
            }
        );
    }

    #[test]
    fn test_purchase_sold_out_item_is_out_of_stock() {
        let mut ledger = Ledger::with_inventory([
            ("Pretzels", Item::new(Coins::new(7), 0)),
        ])
        .unwrap();
        ledger.deposit(Coins::new(100));

        let err = ledger.purchase("Pretzels").unwrap_err();
        assert_eq!(
            err,
            LedgerError::OutOfStock {
                name: "Pretzels".to_string()
            }
        );
    }

    #[test]
    fn test_purchase_reports_exact_shortfall() {
        let mut ledger = seed_ledger();
        ledger.deposit(Coins::new(8));

        // Candy Bar costs 12, deposited 8: exactly 4 short
        let err = ledger.purchase("Candy Bar").unwrap_err();
        assert_eq!(
            err,
            LedgerError::InsufficientFunds {
                shortfall: Coins::new(4)
            }
        );
    }

    #[test]
    fn test_purchase_with_zero_balance_shortfall_is_full_price() {
        let mut ledger = seed_ledger();

        let err = ledger.purchase("Chips").unwrap_err();
        assert_eq!(
            err,
            LedgerError::InsufficientFunds {
                shortfall: Coins::new(10)
            }
        );
    }

    #[test]
    fn test_failed_purchase_has_no_partial_effects() {
        let mut ledger = seed_ledger();
        ledger.deposit(Coins::new(8));
        let before = ledger.clone();

        assert!(ledger.purchase("Soda").is_err());
        assert_eq!(ledger, before);

        assert!(ledger.purchase("Candy Bar").is_err());
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_out_of_stock_wins_over_insufficient_funds() {
        // Both guards would fail; stock is checked first
        let mut ledger = Ledger::with_inventory([
            ("Pretzels", Item::new(Coins::new(7), 0)),
        ])
        .unwrap();

        let err = ledger.purchase("Pretzels").unwrap_err();
        assert!(matches!(err, LedgerError::OutOfStock { .. }));
    }

    #[test]
    fn test_purchase_is_not_idempotent() {
        let mut ledger = seed_ledger();
        ledger.deposit(Coins::new(24));

        ledger.purchase("Candy Bar").unwrap();
        ledger.purchase("Candy Bar").unwrap();

        // Two units consumed, two payments taken
        assert_eq!(ledger.item("Candy Bar").unwrap().count, 5);
        assert_eq!(ledger.balance(), Coins::zero());
    }

    #[test]
    fn test_deposit_accumulates() {
        let mut ledger = seed_ledger();
        ledger.deposit(Coins::new(3));
        ledger.deposit(Coins::new(4));
        assert_eq!(ledger.balance(), Coins::new(7));

        ledger.deposit(Coins::zero());
        assert_eq!(ledger.balance(), Coins::new(7));
    }

    #[test]
    fn test_refund_returns_balance_and_resets() {
        let mut ledger = seed_ledger();
        ledger.deposit(Coins::new(8));

        assert_eq!(ledger.refund(), Coins::new(8));
        assert_eq!(ledger.balance(), Coins::zero());

        // Refunding an empty register yields nothing
        assert_eq!(ledger.refund(), Coins::zero());
    }

    #[test]
    fn test_restock_adds_units() {
        let mut ledger = seed_ledger();
        ledger.restock("Chips", 6).unwrap();
        assert_eq!(ledger.item("Chips").unwrap().count, 10);
    }

    #[test]
    fn test_restock_unknown_item_fails() {
        let mut ledger = seed_ledger();
        let err = ledger.restock("Soda", 5).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidSelection { .. }));
    }

    #[test]
    fn test_restock_clamps_at_slot_capacity() {
        let mut ledger = seed_ledger();
        ledger.restock("Pretzels", u32::MAX).unwrap();
        assert_eq!(ledger.item("Pretzels").unwrap().count, MAX_ITEM_COUNT);
    }

    #[test]
    fn test_is_sold_out_distinguishes_empty_from_unknown() {
        let mut ledger = seed_ledger();
        ledger.stock("Gum", Item::new(Coins::new(3), 0)).unwrap();

        assert_eq!(ledger.is_sold_out("Gum"), Some(true));
        assert_eq!(ledger.is_sold_out("Pretzels"), Some(false));
        assert_eq!(ledger.is_sold_out("Soda"), None);
    }

    #[test]
    fn test_stock_keys_by_trimmed_name() {
        let mut ledger = Ledger::new();
        ledger
            .stock(" Chips ", Item::new(Coins::new(10), 4))
            .unwrap();

        // One slot, reachable by the name buyers actually type
        assert_eq!(ledger.distinct_items(), 1);
        assert!(ledger.item("Chips").is_some());
        assert!(ledger.item(" Chips ").is_none());

        ledger.deposit(Coins::new(10));
        assert_eq!(ledger.purchase("Chips"), Ok(()));
    }

    #[test]
    fn test_stock_rejects_invalid_catalog_input() {
        let mut ledger = Ledger::new();

        let err = ledger
            .stock("", Item::new(Coins::new(5), 1))
            .unwrap_err();
        assert!(matches!(err, LedgerError::Validation(_)));
        assert_eq!(ledger.distinct_items(), 0);
    }

    #[test]
    fn test_summary_totals() {
        let mut ledger = seed_ledger();
        ledger.deposit(Coins::new(8));

        let summary = ledger.summary();
        assert_eq!(summary.distinct_items, 3);
        assert_eq!(summary.total_units, 7 + 4 + 11);
        // 12×7 + 10×4 + 7×11 = 84 + 40 + 77
        assert_eq!(summary.stock_value_units, 201);
        assert_eq!(summary.balance_units, 8);
    }
}
