//! # Error Types
//!
//! Domain-specific error types for vendo-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Error Types                                │
//! │                                                                     │
//! │  vendo-core errors (this file)                                      │
//! │  ├── LedgerError      - Purchase guard failures                     │
//! │  └── ValidationError  - Catalog input validation failures           │
//! │                                                                     │
//! │  Register app (presentation)                                        │
//! │  └── matches on LedgerError and renders a message per variant       │
//! │                                                                     │
//! │  Flow: ValidationError → LedgerError → caller match → rendering     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (item name, shortfall)
//! 3. Errors are enum variants, never String
//! 4. Every variant is terminal and recoverable: the caller decides whether
//!    to retry (e.g., after depositing more coins) or abandon the request

use thiserror::Error;

use crate::coins::Coins;

// =============================================================================
// Ledger Error
// =============================================================================

/// Purchase guard failures.
///
/// These errors are returned from a single `purchase` call frame and never
/// escalated further. None of them indicates a corrupted ledger: state is
/// untouched whenever one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The requested item name is not a key in the inventory.
    ///
    /// ## When This Occurs
    /// - Buyer asked for an item the machine never stocked
    /// - A favorite-snack preference points at a discontinued item
    #[error("Invalid selection: {name}")]
    InvalidSelection { name: String },

    /// The item exists but its stock count is zero.
    ///
    /// ## User Workflow
    /// ```text
    /// purchase("Pretzels")
    ///      │
    ///      ▼
    /// Check stock: count = 0
    ///      │
    ///      ▼
    /// OutOfStock { name: "Pretzels" }
    ///      │
    ///      ▼
    /// Register shows: "Out of Stock."
    /// ```
    #[error("Out of stock: {name}")]
    OutOfStock { name: String },

    /// Stock is available but the deposited balance does not cover the price.
    ///
    /// Carries the shortfall (`price - balance`) so the caller can prompt
    /// for exactly the missing amount and retry after a deposit.
    #[error("Insufficient funds: {shortfall} more needed")]
    InsufficientFunds { shortfall: Coins },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when catalog input doesn't meet requirements.
/// Used for early validation before an item enters the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: u32, max: u32 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with LedgerError.
pub type LedgerResult<T> = Result<T, LedgerError>;

// =============================================================================
// Unit Tests
// =============================================================================
