//! Domain error model.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::id::TransactionId;

/// Result type used across the ledger layer.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger-level error.
///
/// Every variant is recoverable: an operation that returns one of these has
/// left the ledger exactly as it found it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Deposit or withdrawal with a non-positive amount.
    #[error("amount must be positive (got {0})")]
    InvalidAmount(Decimal),

    /// Withdrawal larger than the current balance.
    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    /// Applying or reverting a movement would leave the representable range.
    #[error("balance overflow: cannot move {amount} on a balance of {balance}")]
    BalanceOverflow { balance: Decimal, amount: Decimal },

    /// Undo requested while the reversal log is empty.
    #[error("no transactions to undo")]
    NothingToUndo,

    /// No transaction with the given id in the active history.
    #[error("transaction {0} not found")]
    NotFound(TransactionId),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl LedgerError {
    pub fn invalid_amount(amount: Decimal) -> Self {
        Self::InvalidAmount(amount)
    }

    pub fn insufficient_funds(requested: Decimal, available: Decimal) -> Self {
        Self::InsufficientFunds {
            requested,
            available,
        }
    }

    pub fn balance_overflow(balance: Decimal, amount: Decimal) -> Self {
        Self::BalanceOverflow { balance, amount }
    }

    pub fn not_found(id: TransactionId) -> Self {
        Self::NotFound(id)
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
