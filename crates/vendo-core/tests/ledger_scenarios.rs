//! End-to-end register scenarios exercising the full purchase contract
//! through the public API only.

use vendo_core::{Coins, Item, Ledger, LedgerError};

/// Chips at 10 coins, 4 units on the shelf.
fn chips_only() -> Ledger {
    Ledger::with_inventory([("Chips", Item::new(Coins::new(10), 4))]).unwrap()
}

#[test]
fn purchase_with_nothing_deposited_is_short_by_full_price() {
    let mut ledger = chips_only();

    assert_eq!(
        ledger.purchase("Chips"),
        Err(LedgerError::InsufficientFunds {
            shortfall: Coins::new(10)
        })
    );

    // Nothing moved
    assert_eq!(ledger.item("Chips").unwrap().count, 4);
    assert_eq!(ledger.balance(), Coins::zero());
}

#[test]
fn purchase_with_exact_deposit_dispenses_and_empties_balance() {
    let mut ledger = chips_only();
    ledger.deposit(Coins::new(10));

    assert_eq!(ledger.purchase("Chips"), Ok(()));
    assert_eq!(ledger.item("Chips").unwrap().count, 3);
    assert_eq!(ledger.balance(), Coins::zero());
}

#[test]
fn sold_out_slot_fails_regardless_of_funds() {
    let mut ledger =
        Ledger::with_inventory([("Pretzels", Item::new(Coins::new(7), 0))]).unwrap();
    ledger.deposit(Coins::new(100));

    assert_eq!(
        ledger.purchase("Pretzels"),
        Err(LedgerError::OutOfStock {
            name: "Pretzels".to_string()
        })
    );
    assert_eq!(ledger.balance(), Coins::new(100));
}

#[test]
fn unknown_item_fails_regardless_of_funds() {
    let mut ledger = chips_only();
    ledger.deposit(Coins::new(1_000));

    assert_eq!(
        ledger.purchase("Soda"),
        Err(LedgerError::InvalidSelection {
            name: "Soda".to_string()
        })
    );
    assert_eq!(ledger.balance(), Coins::new(1_000));
}

#[test]
fn failed_purchase_is_retryable_after_topping_up() {
    let mut ledger = chips_only();
    ledger.deposit(Coins::new(8));

    let err = ledger.purchase("Chips").unwrap_err();
    let LedgerError::InsufficientFunds { shortfall } = err else {
        panic!("expected InsufficientFunds, got {err:?}");
    };

    // Deposit exactly the reported shortfall and retry
    ledger.deposit(shortfall);
    assert_eq!(ledger.purchase("Chips"), Ok(()));
    assert_eq!(ledger.balance(), Coins::zero());
}

#[test]
fn repeated_purchases_consume_repeated_units_and_payments() {
    let mut ledger = chips_only();
    ledger.deposit(Coins::new(30));

    ledger.purchase("Chips").unwrap();
    ledger.purchase("Chips").unwrap();
    ledger.purchase("Chips").unwrap();

    assert_eq!(ledger.item("Chips").unwrap().count, 1);
    assert_eq!(ledger.balance(), Coins::zero());
}

#[test]
fn overpaying_leaves_change_on_the_balance_until_refunded() {
    let mut ledger = chips_only();
    ledger.deposit(Coins::new(25));

    ledger.purchase("Chips").unwrap();
    assert_eq!(ledger.balance(), Coins::new(15));

    // Coin return hands the change back
    assert_eq!(ledger.refund(), Coins::new(15));
    assert_eq!(ledger.balance(), Coins::zero());
}

#[test]
fn ledger_survives_a_json_round_trip() {
    let mut ledger = Ledger::with_inventory([
        ("Candy Bar", Item::new(Coins::new(12), 7)),
        ("Chips", Item::new(Coins::new(10), 4)),
    ])
    .unwrap();
    ledger.deposit(Coins::new(8));

    let json = serde_json::to_string(&ledger).unwrap();
    let mut restored: Ledger = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, ledger);

    // The restored register behaves identically
    assert_eq!(
        restored.purchase("Candy Bar"),
        Err(LedgerError::InsufficientFunds {
            shortfall: Coins::new(4)
        })
    );
}
