//! # Vendo Register
//!
//! Console demo register: the presentation layer over `vendo-core`.
//!
//! ## What It Renders
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Register Session                              │
//! │                                                                     │
//! │  Buyer ──coins──► Ledger.deposit ──► Ledger.purchase ──► outcome    │
//! │                                            │                        │
//! │              ┌─────────────────────────────┤                        │
//! │              ▼                             ▼                        │
//! │     "Dispensing Chips"          "Insufficient funds. Please         │
//! │     (+ receipt issued)           insert an additional 2 coins."     │
//! │                                                                     │
//! │  The ledger never prints; every display line originates here.       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use vendo_core::{Coins, Item, Ledger, LedgerError, Receipt};

/// Buyer → preferred snack. Buyers without an entry get [`DEFAULT_SNACK`].
///
/// Note Bob's preference names an item this machine has never stocked;
/// his purchases demonstrate the invalid-selection outcome.
const FAVORITE_SNACKS: &[(&str, &str)] = &[
    ("Alice", "Chips"),
    ("Bob", "Licorice"),
    ("Eve", "Pretzels"),
];

/// Fallback snack for buyers with no recorded preference.
const DEFAULT_SNACK: &str = "Candy Bar";

/// The buyer's pocket: coins not yet fed into the machine.
///
/// Withdrawals are capped at what the purse actually holds, so the purse
/// can never go negative either.
#[derive(Debug)]
struct Purse {
    coins: Coins,
}

impl Purse {
    fn with_coins(coins: Coins) -> Self {
        Purse { coins }
    }

    /// Takes up to `requested` coins out of the purse.
    fn withdraw(&mut self, requested: Coins) -> Coins {
        let taken = requested.min(self.coins);
        self.coins = self.coins.saturating_sub(taken);
        taken
    }

    /// Puts refunded coins back.
    fn receive(&mut self, coins: Coins) {
        self.coins += coins;
    }
}

/// Resolves a buyer's preferred snack, falling back to [`DEFAULT_SNACK`].
fn favorite_snack(person: &str) -> &'static str {
    FAVORITE_SNACKS
        .iter()
        .find(|(name, _)| *name == person)
        .map(|(_, snack)| *snack)
        .unwrap_or(DEFAULT_SNACK)
}

/// Buys a person's favorite snack, issuing a receipt on success.
///
/// The price is captured before the purchase so the receipt freezes what
/// is about to be charged. The existence check here mirrors the ledger's
/// own first guard, so a missing slot fails the same way `purchase` would.
fn buy_favorite_snack(person: &str, ledger: &mut Ledger) -> Result<Receipt, LedgerError> {
    let snack = favorite_snack(person);
    let Some(item) = ledger.item(snack) else {
        return Err(LedgerError::InvalidSelection {
            name: snack.to_string(),
        });
    };
    let price = item.price;

    ledger.purchase(snack)?;
    Ok(Receipt::issue(snack, price))
}

/// Renders a purchase outcome on the register display.
///
/// The wording per variant is the machine's fixed vocabulary; callers that
/// want structure match on [`LedgerError`] instead of parsing these lines.
fn render_outcome(buyer: &str, outcome: &Result<Receipt, LedgerError>) {
    match outcome {
        Ok(receipt) => {
            println!("Dispensing {}", receipt.item);
            info!(
                buyer,
                item = %receipt.item,
                price = %receipt.price,
                issued_at = %receipt.issued_at,
                "purchase complete"
            );
        }
        Err(LedgerError::InvalidSelection { name }) => {
            println!("Invalid Selection.");
            warn!(buyer, item = %name, "unknown selection");
        }
        Err(LedgerError::OutOfStock { name }) => {
            println!("Out of Stock.");
            warn!(buyer, item = %name, "slot is empty");
        }
        Err(LedgerError::InsufficientFunds { shortfall }) => {
            println!(
                "Insufficient funds. Please insert an additional {shortfall} coins."
            );
            info!(buyer, %shortfall, "waiting for more coins");
        }
        Err(LedgerError::Validation(err)) => {
            println!("Register error: {err}");
            warn!(buyer, %err, "rejected catalog input");
        }
    }
}

fn render_shelf(ledger: &Ledger) {
    println!("--- Shelf ---");
    for (name, item) in ledger.items() {
        println!("  {name}: {} coins, {} in stock", item.price, item.count);
    }
    let summary = ledger.summary();
    println!(
        "  {} items, {} units, shelf value {} coins, balance {} coins",
        summary.distinct_items,
        summary.total_units,
        summary.stock_value_units,
        summary.balance_units
    );
}

fn main() -> Result<(), LedgerError> {
    // Initialize tracing
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    info!("Starting Vendo register demo...");

    // The starting shelf
    let mut ledger = Ledger::with_inventory([
        ("Candy Bar", Item::new(Coins::new(12), 7)),
        ("Chips", Item::new(Coins::new(10), 4)),
        ("Pretzels", Item::new(Coins::new(7), 11)),
    ])?;
    render_shelf(&ledger);

    let mut purse = Purse::with_coins(Coins::new(60));

    // Alice feeds in 8 coins and asks for her favorite (Chips, 10 coins):
    // 2 short, and the register says exactly how short
    ledger.deposit(purse.withdraw(Coins::new(8)));
    let outcome = buy_favorite_snack("Alice", &mut ledger);
    render_outcome("Alice", &outcome);

    // The shortfall is recoverable: top up by the reported amount and retry
    if let Err(LedgerError::InsufficientFunds { shortfall }) = outcome {
        ledger.deposit(purse.withdraw(shortfall));
        let retry = buy_favorite_snack("Alice", &mut ledger);
        render_outcome("Alice", &retry);
    }

    // Bob's favorite is Licorice, which this machine has never stocked
    ledger.deposit(purse.withdraw(Coins::new(20)));
    let outcome = buy_favorite_snack("Bob", &mut ledger);
    render_outcome("Bob", &outcome);

    // Mallory has no recorded preference and gets the default Candy Bar
    let outcome = buy_favorite_snack("Mallory", &mut ledger);
    render_outcome("Mallory", &outcome);

    // Alice clears out the remaining Chips, then hits the empty slot
    ledger.deposit(purse.withdraw(Coins::new(30)));
    for _ in 0..3 {
        let outcome = buy_favorite_snack("Alice", &mut ledger);
        render_outcome("Alice", &outcome);
    }
    let outcome = buy_favorite_snack("Alice", &mut ledger);
    render_outcome("Alice", &outcome);

    // Coin return: whatever is still on the balance goes back to the purse
    let change = ledger.refund();
    purse.receive(change);
    info!(%change, remaining = %purse.coins, "refunded unspent balance");

    // The operator restocks the Chips slot for the next session
    ledger.restock("Chips", 4)?;
    render_shelf(&ledger);

    info!("Register demo complete");
    Ok(())
}
