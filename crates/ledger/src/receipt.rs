//! Outcome values returned by ledger operations.
//!
//! Each carries the data a caller needs to report what happened; their
//! `Display` output is the human-readable status line.

use rust_decimal::Decimal;

use crate::transaction::{Transaction, TransactionKind};

/// Result of a successful deposit or withdrawal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub transaction: Transaction,
    /// `false` when the reversal log was full, so this movement cannot be undone.
    pub undoable: bool,
}

impl Receipt {
    pub fn balance(&self) -> Decimal {
        self.transaction.balance_after()
    }
}

impl core::fmt::Display for Receipt {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let verb = match self.transaction.kind() {
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdrawal => "Withdrawal",
        };
        write!(f, "{verb} successful! New balance: ${:.2}", self.balance())?;
        if !self.undoable {
            write!(f, " (undo history full; this transaction cannot be undone)")?;
        }
        Ok(())
    }
}

/// Result of a successful undo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoReceipt {
    /// The movement that was reversed.
    pub reverted: Transaction,
    pub balance: Decimal,
}

impl core::fmt::Display for UndoReceipt {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Transaction undone successfully! New balance: ${:.2}",
            self.balance
        )
    }
}

/// Point-in-time account overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub balance: Decimal,
    pub transactions: usize,
    pub available_undos: usize,
}

impl core::fmt::Display for Summary {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "=== Account Balance ===")?;
        writeln!(f, "Current Balance: ${:.2}", self.balance)?;
        writeln!(f, "Total Transactions: {}", self.transactions)?;
        writeln!(f, "Available Undos: {}", self.available_undos)
    }
}
