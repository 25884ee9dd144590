//! Flat wire shape of a transaction for foreign callers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tally_ledger::{Transaction, TransactionKind};

/// `{"id", "type", "amount", "description", "timestamp", "balanceAfter"}`
///
/// Amounts are JSON numbers; `timestamp` is Unix seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDto {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub description: String,
    pub timestamp: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance_after: Decimal,
}

impl From<&Transaction> for TransactionDto {
    fn from(t: &Transaction) -> Self {
        Self {
            id: t.id().get(),
            kind: t.kind(),
            amount: t.amount().value(),
            description: t.description().to_string(),
            timestamp: t.timestamp().timestamp(),
            balance_after: t.balance_after(),
        }
    }
}
