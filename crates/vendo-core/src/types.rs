//! # Domain Types
//!
//! Core domain types used throughout Vendo.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌────────────────┐   ┌────────────────┐   ┌────────────────┐      │
//! │  │     Item       │   │    Receipt     │   │ LedgerSummary  │      │
//! │  │  ────────────  │   │  ────────────  │   │  ────────────  │      │
//! │  │  price (Coins) │   │  item (name)   │   │  distinct_items│      │
//! │  │  count (u32)   │   │  price (Coins) │   │  total_units   │      │
//! │  └────────────────┘   │  issued_at     │   │  stock_value   │      │
//! │                       └────────────────┘   │  balance       │      │
//! │                                            └────────────────┘      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Items carry no synthetic ID: the inventory keys them by their unique
//! display name, which is also what buyers select by.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::coins::Coins;

// =============================================================================
// Item
// =============================================================================

/// A purchasable product slot in the inventory.
///
/// ## Invariants
/// - `count` can never go below zero (by type)
/// - a successful purchase decrements `count` by exactly 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Cost of one unit, in coins.
    pub price: Coins,

    /// Units currently in stock.
    pub count: u32,
}

impl Item {
    /// Creates an item with the given price and starting stock.
    pub const fn new(price: Coins, count: u32) -> Self {
        Item { price, count }
    }

    /// Checks whether at least one unit is available.
    #[inline]
    pub const fn is_in_stock(&self) -> bool {
        self.count > 0
    }

    /// Total value of the units on the shelf (price × count).
    ///
    /// Widened to u64: a full slot of max-priced items overflows u32.
    #[inline]
    pub const fn stock_value_units(&self) -> u64 {
        self.price.units() as u64 * self.count as u64
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// Proof of a completed purchase, issued by the presentation layer.
///
/// ## Design Notes
/// - `price`: frozen at purchase time; a later price change on the shelf
///   does not rewrite history
/// - The ledger itself never creates receipts: `purchase` succeeds with
///   unit, and the caller decides whether a paper trail is wanted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Name of the item dispensed.
    pub item: String,

    /// Price paid, in coins (frozen).
    pub price: Coins,

    /// When the purchase completed.
    pub issued_at: DateTime<Utc>,
}

impl Receipt {
    /// Issues a receipt timestamped now.
    pub fn issue(item: impl Into<String>, price: Coins) -> Self {
        Receipt {
            item: item.into(),
            price,
            issued_at: Utc::now(),
        }
    }
}

// =============================================================================
// Ledger Summary
// =============================================================================

/// Point-in-time snapshot of register totals, for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSummary {
    /// Number of distinct item names stocked (including sold-out slots).
    pub distinct_items: usize,

    /// Total units on the shelf across all items.
    pub total_units: u64,

    /// Total shelf value in coins (Σ price × count).
    pub stock_value_units: u64,

    /// Coins currently deposited by the buyer.
    pub balance_units: u32,
}

// =============================================================================
// Unit Tests
// =============================================================================
