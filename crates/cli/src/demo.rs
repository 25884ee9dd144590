//! Scripted walkthrough exercising every ledger operation.

use std::io::Write;

use rust_decimal::Decimal;
use tally_ledger::{Ledger, TransactionId};

pub fn run_demo<W: Write>(out: &mut W, undo_capacity: usize) -> anyhow::Result<Ledger> {
    let mut ledger = Ledger::new(Decimal::from(1000)).with_undo_capacity(undo_capacity);
    writeln!(out, "===== LEDGER WALKTHROUGH =====")?;
    writeln!(out, "Opening balance: ${:.2}", ledger.balance())?;

    writeln!(out, "\n[Step 1] Deposit & Withdrawal")?;
    writeln!(out, "{}", ledger.deposit(Decimal::from(500), "Salary")?)?;
    writeln!(out, "{}", ledger.withdraw(Decimal::from(200), "Groceries")?)?;
    write!(out, "{}", ledger.summary())?;

    writeln!(out, "\n[Step 2] Undo")?;
    writeln!(out, "{}", ledger.undo()?)?;
    write!(out, "{}", ledger.summary())?;

    writeln!(out, "\n[Step 3] Sorting & Searching")?;
    writeln!(out, "{}", ledger.deposit(Decimal::from(300), "Bonus")?)?;
    writeln!(out, "{}", ledger.deposit(Decimal::from(100), "Cash")?)?;
    ledger.sort_by_amount();
    writeln!(out, "Transactions sorted by amount.")?;
    write!(out, "{}", ledger.history())?;

    for raw in [2, 3] {
        let id = TransactionId::new(raw);
        match ledger.search_by_id(id) {
            Some(t) => writeln!(out, "Search {id}: {t}")?,
            None => writeln!(out, "Search {id}: not found (undone ids are not reused)")?,
        }
    }

    writeln!(out, "\nWalkthrough finished.")?;
    Ok(ledger)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_ledger::DEFAULT_UNDO_CAPACITY;

    #[test]
    fn walkthrough_ends_in_expected_state() {
        let mut out = Vec::new();
        let ledger = run_demo(&mut out, DEFAULT_UNDO_CAPACITY).unwrap();

        assert_eq!(ledger.balance(), Decimal::from(1900));
        assert_eq!(ledger.transaction_count(), 3);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Current Balance: $1300.00"));
        assert!(text.contains("Current Balance: $1500.00"));
        assert!(text.contains("Search 2: not found"));
        assert!(text.contains("Search 3: ID: 3 | Type: DEPOSIT | Amount: $300.00 | Description: Bonus"));
    }
}
