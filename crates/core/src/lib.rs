//! `tally-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the ledger engine
//! and its adapters (no IO, no logging setup).

pub mod clock;
pub mod error;
pub mod id;
pub mod money;

pub use clock::{Clock, SystemClock};
pub use error::{LedgerError, LedgerResult};
pub use id::{IdSequence, TransactionId};
pub use money::Amount;
