use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use tally_ledger::{Ledger, TransactionId};

const SIZES: [u64; 3] = [1_000, 10_000, 100_000];

/// Ledger with `n` deposits of 10, 20, 30, ... recorded in order.
fn filled_ledger(n: u64) -> Ledger {
    let mut ledger = Ledger::new(Decimal::ZERO).with_undo_capacity(0);
    for i in 1..=n {
        ledger
            .deposit(Decimal::from(i * 10), "Auto")
            .expect("positive deposit");
    }
    ledger
}

/// Mixed amounts so the sort has real work to do.
fn shuffled_ledger(n: u64) -> Ledger {
    let mut ledger = Ledger::new(Decimal::ZERO).with_undo_capacity(0);
    for i in 1..=n {
        let amount = (i * 7_919) % 100_003 + 1;
        ledger
            .deposit(Decimal::from(amount), "Auto")
            .expect("positive deposit");
    }
    ledger
}

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");
    for n in SIZES {
        group.throughput(Throughput::Elements(n));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| filled_ledger(black_box(n)));
        });
    }
    group.finish();
}

fn bench_sort_by_amount(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_by_amount");
    for n in SIZES {
        let ledger = shuffled_ledger(n);
        group.throughput(Throughput::Elements(n));
        group.bench_with_input(BenchmarkId::from_parameter(n), &ledger, |b, ledger| {
            b.iter_batched(
                || ledger.clone(),
                |mut ledger| {
                    ledger.sort_by_amount();
                    ledger
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_search_by_id(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_by_id");
    for n in SIZES {
        let mut ledger = shuffled_ledger(n);
        ledger.sort_by_amount();
        let target = TransactionId::new(n / 2);
        group.bench_with_input(BenchmarkId::from_parameter(n), &ledger, |b, ledger| {
            b.iter(|| ledger.search_by_id(black_box(target)).is_some());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_append, bench_sort_by_amount, bench_search_by_id);
criterion_main!(benches);
