//! # vendo-core: Pure Business Logic for Vendo
//!
//! This crate is the **heart** of Vendo. It contains the inventory ledger
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Vendo Architecture                           │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                 apps/register (presentation)                  │ │
//! │  │    seed catalog ──► deposit/purchase flows ──► rendering      │ │
//! │  └────────────────────────────┬──────────────────────────────────┘ │
//! │                               │                                     │
//! │  ┌────────────────────────────▼──────────────────────────────────┐ │
//! │  │              ★ vendo-core (THIS CRATE) ★                      │ │
//! │  │                                                               │ │
//! │  │   ┌─────────┐  ┌─────────┐  ┌──────────┐  ┌────────────┐    │ │
//! │  │   │  types  │  │  coins  │  │  ledger  │  │ validation │    │ │
//! │  │   │  Item   │  │  Coins  │  │  Ledger  │  │   rules    │    │ │
//! │  │   │ Receipt │  │  arith  │  │  guards  │  │   checks   │    │ │
//! │  │   └─────────┘  └─────────┘  └──────────┘  └────────────┘    │ │
//! │  │                                                               │ │
//! │  │   NO I/O • NO PRINTING • NO PERSISTENCE • PURE FUNCTIONS     │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Item, Receipt, LedgerSummary)
//! - [`coins`] - Coins type with unsigned integer arithmetic
//! - [`error`] - Domain error types
//! - [`ledger`] - The register: deposit, purchase, refund, restock
//! - [`validation`] - Catalog rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every operation is deterministic - same input = same output
//! 2. **No I/O**: Printing, file system, and network access are FORBIDDEN here;
//!    textual rendering ("Dispensing Chips") belongs to the calling layer
//! 3. **Unsigned Coins**: Balances and prices are u32 - negative money is
//!    unrepresentable, not merely validated away
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use vendo_core::{Coins, Item, Ledger, LedgerError};
//!
//! let mut ledger = Ledger::with_inventory([
//!     ("Candy Bar", Item::new(Coins::new(12), 7)),
//!     ("Chips", Item::new(Coins::new(10), 4)),
//!     ("Pretzels", Item::new(Coins::new(7), 11)),
//! ])
//! .unwrap();
//!
//! ledger.deposit(Coins::new(8));
//!
//! // Candy Bar costs 12 and only 8 coins are in: 4 short
//! assert_eq!(
//!     ledger.purchase("Candy Bar"),
//!     Err(LedgerError::InsufficientFunds { shortfall: Coins::new(4) })
//! );
//!
//! // Top up and retry - the failure was recoverable
//! ledger.deposit(Coins::new(4));
//! assert!(ledger.purchase("Candy Bar").is_ok());
//! assert_eq!(ledger.balance(), Coins::zero());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod coins;
pub mod error;
pub mod ledger;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use vendo_core::Ledger` instead of
// `use vendo_core::ledger::Ledger`

pub use coins::Coins;
pub use error::{LedgerError, LedgerResult, ValidationError};
pub use ledger::Ledger;
pub use types::{Item, LedgerSummary, Receipt};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of an item name, in characters
///
/// ## Business Reason
/// Item names double as inventory keys and as the label on the shelf;
/// anything longer than this will not render on a register display.
pub const MAX_ITEM_NAME_LEN: usize = 50;

/// Maximum stock count of a single slot
///
/// ## Business Reason
/// Models physical slot capacity and catches typo restocks
/// (e.g., typing 1000 instead of 10). `restock` clamps here.
pub const MAX_ITEM_COUNT: u32 = 999;

/// Maximum price of a single item, in coins
///
/// ## Business Reason
/// A coin-operated register cannot meaningfully charge more than this;
/// it also keeps shelf-value totals far away from overflow.
pub const MAX_ITEM_PRICE: u32 = 10_000;
