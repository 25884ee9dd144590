//! Quick timing table for insert / sort / search.
//!
//! For statistically sound numbers use the criterion benches in `tally-ledger`.

use std::io::Write;
use std::time::{Duration, Instant};

use rust_decimal::Decimal;
use tally_ledger::{Ledger, TransactionId};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub size: u64,
    pub insert: Duration,
    pub sort: Duration,
    pub search: Duration,
}

/// Average of `runs` rounds of: `size` deposits, one sort by amount, one
/// search for id `size / 2`.
pub fn measure(size: u64, runs: u32, undo_capacity: usize) -> anyhow::Result<Timing> {
    let runs = runs.max(1);
    let mut insert = Duration::ZERO;
    let mut sort = Duration::ZERO;
    let mut search = Duration::ZERO;

    for _ in 0..runs {
        let mut ledger = Ledger::new(Decimal::ZERO).with_undo_capacity(undo_capacity);

        let start = Instant::now();
        for i in 1..=size {
            ledger.deposit(Decimal::from(i * 10), "Auto")?;
        }
        insert += start.elapsed();

        let start = Instant::now();
        ledger.sort_by_amount();
        sort += start.elapsed();

        let start = Instant::now();
        let _ = ledger.search_by_id(TransactionId::new(size / 2));
        search += start.elapsed();
    }

    Ok(Timing {
        size,
        insert: insert / runs,
        sort: sort / runs,
        search: search / runs,
    })
}

pub fn run_bench<W: Write>(
    out: &mut W,
    sizes: &[u64],
    runs: u32,
    undo_capacity: usize,
) -> anyhow::Result<Vec<Timing>> {
    writeln!(out, "===== PERFORMANCE ANALYSIS =====")?;
    writeln!(
        out,
        "{:<10}{:<20}{:<20}{:<20}",
        "N", "Insert (ms)", "Sort (ms)", "Search (ms)"
    )?;

    let mut timings = Vec::with_capacity(sizes.len());
    for &size in sizes {
        let t = measure(size, runs, undo_capacity)?;
        writeln!(
            out,
            "{:<10}{:<20.3}{:<20.3}{:<20.3}",
            t.size,
            millis(t.insert),
            millis(t.sort),
            millis(t.search)
        )?;
        timings.push(t);
    }

    writeln!(out, "\nBig-O Summary:")?;
    writeln!(out, "Insertion (append): O(1) amortized")?;
    writeln!(out, "Undo (stack pop): O(1)")?;
    writeln!(out, "Sorting (merge sort): O(n log n)")?;
    writeln!(out, "Searching (snapshot sort + binary search): O(n log n)")?;
    Ok(timings)
}

fn millis(d: Duration) -> f64 {
    d.as_secs_f64() * 1_000.0
}
