//! Transaction-history engine (single account, bounded undo).
//!
//! Pure domain logic only: no IO, no terminal handling, no persistence.

pub mod history;
pub mod ledger;
pub mod receipt;
pub mod reversal;
pub mod sort;
pub mod transaction;

pub use history::History;
pub use ledger::Ledger;
pub use receipt::{Receipt, Summary, UndoReceipt};
pub use reversal::{DEFAULT_UNDO_CAPACITY, ReversalLog};
pub use sort::SortKey;
pub use tally_core::{Amount, Clock, LedgerError, LedgerResult, SystemClock, TransactionId};
pub use transaction::{Transaction, TransactionKind};
