//! Time source used to stamp transactions.

use chrono::{DateTime, Utc};

/// Source of "now" for transaction timestamps.
///
/// The ledger never reads the wall clock directly; tests inject a
/// deterministic implementation.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<F> Clock for F
where
    F: Fn() -> DateTime<Utc>,
{
    fn now(&self) -> DateTime<Utc> {
        self()
    }
}
