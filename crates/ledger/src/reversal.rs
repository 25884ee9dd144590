//! Bounded undo stack.

use crate::transaction::Transaction;

/// Default number of movements that can be undone.
pub const DEFAULT_UNDO_CAPACITY: usize = 50;

/// LIFO of record copies, newest on top.
///
/// Holds its own clones; nothing here aliases the history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReversalLog {
    stack: Vec<Transaction>,
    capacity: usize,
}

impl ReversalLog {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_UNDO_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            stack: Vec::with_capacity(capacity.min(DEFAULT_UNDO_CAPACITY)),
            capacity,
        }
    }

    /// Push a copy of `record`. Returns `false` (and pushes nothing) when full.
    #[must_use]
    pub fn push(&mut self, record: &Transaction) -> bool {
        if self.is_full() {
            return false;
        }
        self.stack.push(record.clone());
        true
    }

    pub fn pop(&mut self) -> Option<Transaction> {
        self.stack.pop()
    }

    pub fn peek(&self) -> Option<&Transaction> {
        self.stack.last()
    }

    /// Change the bound. Shrinking below the current size forgets the oldest entries.
    pub fn set_capacity(&mut self, capacity: usize) {
        if self.stack.len() > capacity {
            let excess = self.stack.len() - capacity;
            self.stack.drain(..excess);
        }
        self.capacity = capacity;
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.stack.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for ReversalLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::TransactionKind;
    use rust_decimal::Decimal;
    use tally_core::{Amount, TransactionId};

    fn tx(id: u64) -> Transaction {
        Transaction::new(
            TransactionId::new(id),
            TransactionKind::Deposit,
            Amount::positive(Decimal::ONE).unwrap(),
            "",
            Decimal::ONE,
        )
    }

    #[test]
    fn pop_returns_most_recent_first() {
        let mut log = ReversalLog::new();
        assert!(log.pop().is_none());

        assert!(log.push(&tx(1)));
        assert!(log.push(&tx(2)));
        assert_eq!(log.peek().map(|t| t.id().get()), Some(2));
        assert_eq!(log.pop().map(|t| t.id().get()), Some(2));
        assert_eq!(log.pop().map(|t| t.id().get()), Some(1));
        assert!(log.is_empty());
    }

    #[test]
    fn push_fails_at_capacity() {
        let mut log = ReversalLog::with_capacity(2);
        assert!(log.push(&tx(1)));
        assert!(log.push(&tx(2)));
        assert!(log.is_full());

        assert!(!log.push(&tx(3)));
        assert_eq!(log.len(), 2);
        assert_eq!(log.peek().map(|t| t.id().get()), Some(2));
    }

    #[test]
    fn default_capacity_is_fifty() {
        let mut log = ReversalLog::default();
        assert_eq!(log.capacity(), DEFAULT_UNDO_CAPACITY);
        for id in 1..=50 {
            assert!(log.push(&tx(id)));
        }
        assert!(!log.push(&tx(51)));
    }

    #[test]
    fn shrinking_drops_oldest() {
        let mut log = ReversalLog::new();
        for id in 1..=4 {
            assert!(log.push(&tx(id)));
        }
        log.set_capacity(2);
        assert_eq!(log.len(), 2);
        assert_eq!(log.pop().map(|t| t.id().get()), Some(4));
        assert_eq!(log.pop().map(|t| t.id().get()), Some(3));
    }
}
