//! Ordered sequence of active transactions.

use tally_core::TransactionId;

use crate::sort::{SortKey, merge_sort_by};
use crate::transaction::Transaction;

/// Active transactions, insertion order unless explicitly re-sorted.
///
/// Ids are unique within a history; uniqueness is the caller's responsibility
/// (the ledger allocates them from a monotonic sequence).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<Transaction>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record at the end.
    pub fn append(&mut self, record: Transaction) {
        self.entries.push(record);
    }

    /// Detach and return the last record.
    pub fn remove_newest(&mut self) -> Option<Transaction> {
        self.entries.pop()
    }

    /// Detach and return the record with `id`, wherever it sits.
    pub fn remove_by_id(&mut self, id: TransactionId) -> Option<Transaction> {
        let index = self.entries.iter().position(|t| t.id() == id)?;
        Some(self.entries.remove(index))
    }

    /// Last record in the current order.
    pub fn newest(&self) -> Option<&Transaction> {
        self.entries.last()
    }

    pub fn sort_by(&mut self, key: SortKey) {
        if self.entries.len() <= 1 {
            return;
        }
        let entries = std::mem::take(&mut self.entries);
        self.entries = merge_sort_by(entries, &|a: &Transaction, b: &Transaction| {
            key.in_order(a, b)
        });
    }

    pub fn sort_by_timestamp(&mut self) {
        self.sort_by(SortKey::Timestamp);
    }

    pub fn sort_by_amount(&mut self) {
        self.sort_by(SortKey::Amount);
    }

    /// Borrowed view of every record, in current order.
    pub fn snapshot(&self) -> Vec<&Transaction> {
        self.entries.iter().collect()
    }

    pub fn get(&self, index: usize) -> Option<&Transaction> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Full listing: header plus one numbered line per record.
impl core::fmt::Display for History {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.entries.is_empty() {
            return writeln!(f, "No transactions found.");
        }

        writeln!(f, "=== Transaction History ===")?;
        writeln!(f, "Total Transactions: {}", self.entries.len())?;
        writeln!(f, "----------------------------")?;
        for (n, t) in self.entries.iter().enumerate() {
            writeln!(f, "{}. {}", n + 1, t)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::TransactionKind;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use tally_core::Amount;

    fn epoch() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn tx(id: u64, amount: i64, seconds: i64) -> Transaction {
        Transaction::new_at(
            TransactionId::new(id),
            TransactionKind::Deposit,
            Amount::positive(Decimal::from(amount)).unwrap(),
            format!("t{id}"),
            Decimal::ZERO,
            epoch() + Duration::seconds(seconds),
        )
    }

    fn ids(history: &History) -> Vec<u64> {
        history.iter().map(|t| t.id().get()).collect()
    }

    #[test]
    fn append_and_remove_newest_are_lifo() {
        let mut history = History::new();
        assert!(history.remove_newest().is_none());

        history.append(tx(1, 10, 0));
        history.append(tx(2, 20, 1));
        assert_eq!(history.len(), 2);

        let removed = history.remove_newest().unwrap();
        assert_eq!(removed.id(), TransactionId::new(2));
        assert_eq!(history.newest().map(|t| t.id().get()), Some(1));

        // Appending after a removal lands at the new tail.
        history.append(tx(3, 30, 2));
        assert_eq!(ids(&history), vec![1, 3]);
    }

    #[test]
    fn remove_by_id_detaches_from_the_middle() {
        let mut history = History::new();
        for (id, amount) in [(1, 10), (2, 20), (3, 30)] {
            history.append(tx(id, amount, id as i64));
        }

        assert_eq!(history.remove_by_id(TransactionId::new(2)).map(|t| t.id().get()), Some(2));
        assert!(history.remove_by_id(TransactionId::new(2)).is_none());
        assert_eq!(ids(&history), vec![1, 3]);
    }

    #[test]
    fn get_is_bounds_checked() {
        let mut history = History::new();
        assert!(history.get(0).is_none());
        history.append(tx(1, 10, 0));
        assert_eq!(history.get(0).map(|t| t.id().get()), Some(1));
        assert!(history.get(1).is_none());
    }

    #[test]
    fn sort_by_amount_is_stable() {
        let mut history = History::new();
        history.append(tx(1, 50, 0));
        history.append(tx(2, 10, 1));
        history.append(tx(3, 50, 2));
        history.append(tx(4, 10, 3));
        history.append(tx(5, 30, 4));

        history.sort_by_amount();
        assert_eq!(ids(&history), vec![2, 4, 5, 1, 3]);

        // Appends after a sort still go to the end.
        history.append(tx(6, 1, 5));
        assert_eq!(history.newest().map(|t| t.id().get()), Some(6));
    }

    #[test]
    fn sort_by_timestamp_restores_chronological_order() {
        let mut history = History::new();
        history.append(tx(1, 30, 0));
        history.append(tx(2, 20, 0));
        history.append(tx(3, 10, 5));

        history.sort_by_amount();
        assert_eq!(ids(&history), vec![3, 2, 1]);

        history.sort_by_timestamp();
        // 1 and 2 share a timestamp; the amount sort put 2 first and it stays first.
        assert_eq!(ids(&history), vec![2, 1, 3]);
    }

    #[test]
    fn listing_numbers_each_entry() {
        let mut history = History::new();
        assert_eq!(history.to_string(), "No transactions found.\n");

        history.append(tx(1, 10, 0));
        history.append(tx(2, 20, 1));
        let listing = history.to_string();
        assert!(listing.starts_with("=== Transaction History ===\nTotal Transactions: 2\n"));
        assert!(listing.contains("1. ID: 1 | Type: DEPOSIT"));
        assert!(listing.contains("2. ID: 2 | Type: DEPOSIT"));
    }

    proptest! {
        /// Property: after sorting by amount, neighbours are ordered and equal
        /// amounts keep ascending ids (insertion order).
        #[test]
        fn sorted_by_amount_is_ordered_and_stable(amounts in prop::collection::vec(1i64..20, 0..64)) {
            let mut history = History::new();
            for (i, amount) in amounts.iter().enumerate() {
                history.append(tx(i as u64 + 1, *amount, i as i64));
            }

            history.sort_by_amount();
            prop_assert_eq!(history.len(), amounts.len());

            for i in 1..history.len() {
                let a = history.get(i - 1).unwrap();
                let b = history.get(i).unwrap();
                prop_assert!(a.amount() <= b.amount());
                if a.amount() == b.amount() {
                    prop_assert!(a.id() < b.id());
                }
            }
        }
    }
}
