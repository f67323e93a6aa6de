//! # Validation Module
//!
//! Catalog input validation for Vendo.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Types                                                     │
//! │  ├── Coins(u32) - negative prices/balances unrepresentable          │
//! │  └── count: u32 - negative stock unrepresentable                    │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE - catalog rules                               │
//! │  ├── item names non-empty and bounded                               │
//! │  └── prices and counts within register limits                       │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Purchase guards (ledger.rs)                               │
//! │  └── existence → stock → funds, checked per request                 │
//! │                                                                     │
//! │  Defense in depth: each layer catches different mistakes            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use vendo_core::validation::{validate_item_name, validate_count};
//!
//! // Validate before stocking the shelf
//! validate_item_name("Candy Bar").unwrap();
//! validate_count(7).unwrap();
//! ```

use crate::error::ValidationError;
use crate::{MAX_ITEM_COUNT, MAX_ITEM_NAME_LEN, MAX_ITEM_PRICE};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item name (the inventory key buyers select by).
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 50 characters
/// - Spaces are allowed ("Candy Bar" is a valid name)
///
/// ## Example
/// ```rust
/// use vendo_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Candy Bar").is_ok());
/// assert!(validate_item_name("").is_err());
/// assert!(validate_item_name("A".repeat(100).as_str()).is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "item name".to_string(),
        });
    }

    if name.len() > MAX_ITEM_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "item name".to_string(),
            max: MAX_ITEM_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates an item price in coins.
///
/// ## Rules
/// - Zero is allowed (free items)
/// - Must not exceed MAX_ITEM_PRICE (negative is unrepresentable)
pub fn validate_price(price_units: u32) -> ValidationResult<()> {
    if price_units > MAX_ITEM_PRICE {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_ITEM_PRICE,
        });
    }

    Ok(())
}

/// Validates a stock count.
///
/// ## Rules
/// - Zero is allowed (a slot may start sold out)
/// - Must not exceed MAX_ITEM_COUNT (physical slot capacity)
pub fn validate_count(count: u32) -> ValidationResult<()> {
    if count > MAX_ITEM_COUNT {
        return Err(ValidationError::OutOfRange {
            field: "count".to_string(),
            min: 0,
            max: MAX_ITEM_COUNT,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
