use rust_decimal::Decimal;

use tally_core::{
    Amount, Clock, IdSequence, LedgerError, LedgerResult, SystemClock, TransactionId,
};

use crate::history::History;
use crate::receipt::{Receipt, Summary, UndoReceipt};
use crate::reversal::ReversalLog;
use crate::sort::SortKey;
use crate::transaction::{Transaction, TransactionKind};

/// Single-account ledger with bounded undo.
///
/// Owns the balance, the id sequence, the active history and the reversal
/// log. Every failing operation returns before touching any of them.
///
/// Not synchronized: wrap in a mutex if it has to be shared across threads.
#[derive(Debug, Clone)]
pub struct Ledger<C = SystemClock> {
    balance: Decimal,
    ids: IdSequence,
    history: History,
    reversal: ReversalLog,
    clock: C,
}

impl Ledger<SystemClock> {
    pub fn new(initial_balance: Decimal) -> Self {
        tracing::debug!("ledger created with balance {:.2}", initial_balance);
        Self {
            balance: initial_balance,
            ids: IdSequence::new(),
            history: History::new(),
            reversal: ReversalLog::new(),
            clock: SystemClock,
        }
    }
}

impl Default for Ledger<SystemClock> {
    fn default() -> Self {
        Self::new(Decimal::ZERO)
    }
}

impl<C: Clock> Ledger<C> {
    /// Replace the time source used to stamp new transactions.
    pub fn with_clock<D: Clock>(self, clock: D) -> Ledger<D> {
        Ledger {
            balance: self.balance,
            ids: self.ids,
            history: self.history,
            reversal: self.reversal,
            clock,
        }
    }

    /// Bound the number of undoable movements.
    pub fn with_undo_capacity(mut self, capacity: usize) -> Self {
        self.reversal.set_capacity(capacity);
        self
    }

    pub fn deposit(
        &mut self,
        amount: Decimal,
        description: impl Into<String>,
    ) -> LedgerResult<Receipt> {
        let amount = Amount::positive(amount).inspect_err(|e| {
            tracing::debug!("deposit rejected: {e}");
        })?;
        self.record(TransactionKind::Deposit, amount, description.into())
    }

    pub fn withdraw(
        &mut self,
        amount: Decimal,
        description: impl Into<String>,
    ) -> LedgerResult<Receipt> {
        let amount = Amount::positive(amount).inspect_err(|e| {
            tracing::debug!("withdrawal rejected: {e}");
        })?;
        if amount.value() > self.balance {
            let err = LedgerError::insufficient_funds(amount.value(), self.balance);
            tracing::debug!("withdrawal rejected: {err}");
            return Err(err);
        }
        self.record(TransactionKind::Withdrawal, amount, description.into())
    }

    fn record(
        &mut self,
        kind: TransactionKind,
        amount: Amount,
        description: String,
    ) -> LedgerResult<Receipt> {
        let balance = kind.apply(self.balance, amount).ok_or_else(|| {
            let err = LedgerError::balance_overflow(self.balance, amount.value());
            tracing::debug!("{kind} rejected: {err}");
            err
        })?;

        self.balance = balance;
        let id = self.ids.next_id();

        let transaction = Transaction::new_at(
            id,
            kind,
            amount,
            description,
            self.balance,
            self.clock.now(),
        );

        let undoable = self.reversal.push(&transaction);
        if !undoable {
            tracing::warn!(
                "undo log full ({} entries); transaction {} cannot be undone",
                self.reversal.capacity(),
                id
            );
        }

        tracing::debug!(
            id = %id,
            kind = %kind,
            amount = %amount,
            balance = %self.balance,
            "transaction recorded"
        );

        self.history.append(transaction.clone());
        Ok(Receipt {
            transaction,
            undoable,
        })
    }

    /// Reverse the most recent undoable movement.
    ///
    /// While the history is in insertion order the reversed record is its
    /// tail. After a sort it may sit anywhere, so it is located by id.
    pub fn undo(&mut self) -> LedgerResult<UndoReceipt> {
        let entry = self.reversal.peek().ok_or(LedgerError::NothingToUndo)?;
        // Movements recorded after the undo log filled are not tracked, so the
        // current balance can be far from the one this entry produced.
        let balance = entry
            .kind()
            .revert(self.balance, entry.amount())
            .ok_or_else(|| LedgerError::balance_overflow(self.balance, entry.amount().value()))
            .inspect_err(|e| tracing::debug!("undo rejected: {e}"))?;
        let entry = self.reversal.pop().ok_or(LedgerError::NothingToUndo)?;

        let removed = match self.history.newest() {
            Some(newest) if newest.id() == entry.id() => self.history.remove_newest(),
            _ => self.history.remove_by_id(entry.id()),
        };
        debug_assert!(
            removed.is_some(),
            "undo entry {} missing from history",
            entry.id()
        );

        self.balance = balance;
        tracing::info!(
            "undid transaction {} ({}); balance {:.2}",
            entry.id(),
            entry.kind(),
            self.balance
        );

        Ok(UndoReceipt {
            reverted: entry,
            balance: self.balance,
        })
    }

    pub fn sort_by(&mut self, key: SortKey) {
        self.history.sort_by(key);
        tracing::info!("sorted {} transactions by {:?}", self.history.len(), key);
    }

    pub fn sort_by_date(&mut self) {
        self.sort_by(SortKey::Timestamp);
    }

    pub fn sort_by_amount(&mut self) {
        self.sort_by(SortKey::Amount);
    }

    /// Binary search by id over an id-ordered snapshot.
    ///
    /// The stored history order is left untouched.
    pub fn search_by_id(&self, id: TransactionId) -> Option<&Transaction> {
        let mut snapshot = self.history.snapshot();
        snapshot.sort_unstable_by_key(|t| t.id());
        let index = snapshot.binary_search_by_key(&id, |t| t.id()).ok()?;
        Some(snapshot[index])
    }

    /// Like [`Ledger::search_by_id`], reporting a miss as [`LedgerError::NotFound`].
    pub fn find_by_id(&self, id: TransactionId) -> LedgerResult<&Transaction> {
        self.search_by_id(id).ok_or_else(|| LedgerError::not_found(id))
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn can_undo(&self) -> bool {
        !self.reversal.is_empty()
    }

    pub fn transaction_count(&self) -> usize {
        self.history.len()
    }

    pub fn undo_depth(&self) -> usize {
        self.reversal.len()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn summary(&self) -> Summary {
        Summary {
            balance: self.balance,
            transactions: self.history.len(),
            available_undos: self.reversal.len(),
        }
    }
}
