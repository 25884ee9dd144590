use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tally_core::{Amount, TransactionId};

/// Direction of a movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Deposit => "DEPOSIT",
            TransactionKind::Withdrawal => "WITHDRAWAL",
        }
    }

    /// Balance after applying a movement of `amount` in this direction, or
    /// `None` if it would overflow `Decimal`.
    pub fn apply(self, balance: Decimal, amount: Amount) -> Option<Decimal> {
        match self {
            TransactionKind::Deposit => balance.checked_add(amount.value()),
            TransactionKind::Withdrawal => balance.checked_sub(amount.value()),
        }
    }

    /// Balance after reversing a movement of `amount` in this direction, or
    /// `None` if it would overflow `Decimal`.
    pub fn revert(self, balance: Decimal, amount: Amount) -> Option<Decimal> {
        match self {
            TransactionKind::Deposit => balance.checked_sub(amount.value()),
            TransactionKind::Withdrawal => balance.checked_add(amount.value()),
        }
    }
}

impl core::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recorded movement (immutable).
///
/// Fields are private; once built a record is only ever read, cloned, or
/// moved between containers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    id: TransactionId,
    kind: TransactionKind,
    amount: Amount,
    description: String,
    timestamp: DateTime<Utc>,
    /// Ledger balance right after this movement was applied.
    balance_after: Decimal,
}

impl Transaction {
    /// Build a record stamped with the current wall-clock time.
    pub fn new(
        id: TransactionId,
        kind: TransactionKind,
        amount: Amount,
        description: impl Into<String>,
        balance_after: Decimal,
    ) -> Self {
        Self::new_at(id, kind, amount, description, balance_after, Utc::now())
    }

    /// Build a record with an explicit timestamp.
    pub fn new_at(
        id: TransactionId,
        kind: TransactionKind,
        amount: Amount,
        description: impl Into<String>,
        balance_after: Decimal,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            kind,
            amount,
            description: description.into(),
            timestamp,
            balance_after,
        }
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn balance_after(&self) -> Decimal {
        self.balance_after
    }
}

impl core::fmt::Display for Transaction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "ID: {} | Type: {} | Amount: ${} | Description: {} | Balance: ${:.2}",
            self.id, self.kind, self.amount, self.description, self.balance_after
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn amount(units: i64) -> Amount {
        Amount::positive(Decimal::from(units)).unwrap()
    }

    #[test]
    fn renders_single_line_summary() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        let t = Transaction::new_at(
            TransactionId::new(7),
            TransactionKind::Withdrawal,
            amount(200),
            "Groceries",
            Decimal::new(130050, 2),
            at,
        );

        assert_eq!(
            t.to_string(),
            "ID: 7 | Type: WITHDRAWAL | Amount: $200.00 | Description: Groceries | Balance: $1300.50"
        );
    }

    #[test]
    fn revert_undoes_apply() {
        let start = Decimal::from(1000);
        for kind in [TransactionKind::Deposit, TransactionKind::Withdrawal] {
            let moved = kind.apply(start, amount(250)).unwrap();
            assert_eq!(kind.revert(moved, amount(250)), Some(start));
        }
    }

    #[test]
    fn apply_and_revert_report_overflow() {
        assert_eq!(TransactionKind::Deposit.apply(Decimal::MAX, amount(1)), None);
        assert_eq!(TransactionKind::Withdrawal.revert(Decimal::MAX, amount(1)), None);
        assert_eq!(TransactionKind::Withdrawal.apply(Decimal::MIN, amount(1)), None);
        assert_eq!(TransactionKind::Deposit.revert(Decimal::MIN, amount(1)), None);
    }
}
