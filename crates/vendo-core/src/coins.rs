//! # Coins Module
//!
//! Provides the `Coins` type for handling deposited funds and prices safely.
//!
//! ## Why an Unsigned Integer?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE NEGATIVE BALANCE PROBLEM                                       │
//! │                                                                     │
//! │  With a plain signed integer:                                       │
//! │    balance = 5; balance -= 12  →  balance = -7  ❌ NONSENSE!        │
//! │                                                                     │
//! │  A register can never hold a negative number of coins, and an item  │
//! │  can never cost a negative amount.                                  │
//! │                                                                     │
//! │  OUR SOLUTION: Coins(u32)                                           │
//! │    Non-negativity is carried by the type. Subtraction is only       │
//! │    available as checked_sub / saturating_sub, so every caller       │
//! │    decides explicitly what an underflow means.                      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use vendo_core::coins::Coins;
//!
//! let price = Coins::new(12);
//! let balance = Coins::new(8);
//!
//! // Guards compare directly
//! assert!(price > balance);
//!
//! // The shortfall is an explicit checked subtraction
//! assert_eq!(price.checked_sub(balance), Some(Coins::new(4)));
//! assert_eq!(balance.checked_sub(price), None);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

// =============================================================================
// Coins Type
// =============================================================================

/// A non-negative amount of currency, counted in whole coins.
///
/// ## Design Decisions
/// - **u32 (unsigned)**: a balance or price below zero is unrepresentable,
///   so the `count >= 0` / `balance >= 0` invariants need no runtime checks
/// - **Single field tuple struct**: zero-cost abstraction over u32
/// - **Derives**: full serde support, total ordering for price guards
///
/// ## Where Coins Flow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────┐
/// │  Buyer's purse ──deposit──► Ledger.balance ──purchase──► (consumed) │
/// │                                    │                                │
/// │                                    └──refund──► back to the buyer   │
/// │                                                                     │
/// │  EVERY monetary value in the system flows through this type         │
/// └─────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Coins(u32);

impl Coins {
    /// Creates a Coins value from a whole-coin count.
    ///
    /// ## Example
    /// ```rust
    /// use vendo_core::coins::Coins;
    ///
    /// let price = Coins::new(12);
    /// assert_eq!(price.units(), 12);
    /// ```
    #[inline]
    pub const fn new(units: u32) -> Self {
        Coins(units)
    }

    /// Returns the raw coin count.
    #[inline]
    pub const fn units(&self) -> u32 {
        self.0
    }

    /// Returns zero coins.
    ///
    /// ## Example
    /// ```rust
    /// use vendo_core::coins::Coins;
    ///
    /// let zero = Coins::zero();
    /// assert!(zero.is_zero());
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Coins(0)
    }

    /// Checks if the amount is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Subtracts, returning `None` on underflow.
    ///
    /// This is the primitive behind the funds guard: a purchase computes
    /// `balance.checked_sub(price)` and treats `None` as insufficient funds.
    ///
    /// ## Example
    /// ```rust
    /// use vendo_core::coins::Coins;
    ///
    /// assert_eq!(Coins::new(10).checked_sub(Coins::new(7)), Some(Coins::new(3)));
    /// assert_eq!(Coins::new(7).checked_sub(Coins::new(10)), None);
    /// ```
    #[inline]
    pub const fn checked_sub(self, other: Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(units) => Some(Coins(units)),
            None => None,
        }
    }

    /// Subtracts, clamping at zero on underflow.
    #[inline]
    pub const fn saturating_sub(self, other: Self) -> Self {
        Coins(self.0.saturating_sub(other.0))
    }

    /// Adds, clamping at `u32::MAX` on overflow.
    ///
    /// Deposits use this so the operation stays total: an absurdly large
    /// deposit pins the balance at the maximum instead of wrapping.
    #[inline]
    pub const fn saturating_add(self, other: Self) -> Self {
        Coins(self.0.saturating_add(other.0))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the raw coin count.
///
/// ## Note
/// This is for debugging and message interpolation. The presentation layer
/// owns the surrounding wording ("insert an additional N coins").
impl fmt::Display for Coins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Addition of two Coins values (saturating).
impl Add for Coins {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        self.saturating_add(other)
    }
}

/// Addition assignment (+=), saturating.
impl AddAssign for Coins {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = self.saturating_add(other);
    }
}

impl From<u32> for Coins {
    #[inline]
    fn from(units: u32) -> Self {
        Coins(units)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_units() {
        let amount = Coins::new(12);
        assert_eq!(amount.units(), 12);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Coins::new(7)), "7");
        assert_eq!(format!("{}", Coins::zero()), "0");
    }

    #[test]
    fn test_ordering_matches_funds_guard() {
        // The purchase guard is `price <= balance`
        assert!(Coins::new(10) <= Coins::new(10));
        assert!(Coins::new(10) <= Coins::new(11));
        assert!(!(Coins::new(12) <= Coins::new(8)));
    }

    #[test]
    fn test_checked_sub() {
        assert_eq!(
            Coins::new(12).checked_sub(Coins::new(8)),
            Some(Coins::new(4))
        );
        assert_eq!(Coins::new(8).checked_sub(Coins::new(12)), None);
        assert_eq!(
            Coins::new(5).checked_sub(Coins::new(5)),
            Some(Coins::zero())
        );
    }

    #[test]
    fn test_saturating_arithmetic() {
        assert_eq!(Coins::new(3).saturating_sub(Coins::new(9)), Coins::zero());
        assert_eq!(
            Coins::new(u32::MAX).saturating_add(Coins::new(1)),
            Coins::new(u32::MAX)
        );
    }

    #[test]
    fn test_add_assign() {
        let mut balance = Coins::zero();
        balance += Coins::new(8);
        balance += Coins::new(2);
        assert_eq!(balance, Coins::new(10));
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Coins::default(), Coins::zero());
    }
}
