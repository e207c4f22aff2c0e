//! Benchmark for traversal: the trampolined driver in each context.
//!
//! Compares the driver with `Iterator::collect` for the contexts the
//! standard library also supports.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use seqtraverse::control::Trampoline;
use seqtraverse::typeclass::{
    Identity, IdentityContext, OptionContext, Sum, Traversable, ValidationContext, Writer,
    traverse_array,
};
use std::hint::black_box;

const SIZES: [usize; 3] = [100, 10_000, 100_000];

// =============================================================================
// Option
// =============================================================================

fn benchmark_traverse_option(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("traverse_option");

    for size in SIZES {
        let values: Vec<u64> = (0..size as u64).collect();

        group.bench_with_input(BenchmarkId::new("traverse_array", size), &values, |bencher, values| {
            bencher.iter(|| {
                let result = traverse_array::<OptionContext, _, _, _>(values, |x| x.checked_mul(2));
                black_box(result)
            });
        });

        group.bench_with_input(BenchmarkId::new("iterator_collect", size), &values, |bencher, values| {
            bencher.iter(|| {
                let result: Option<Vec<u64>> = values.iter().map(|x| x.checked_mul(2)).collect();
                black_box(result)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Result
// =============================================================================

fn benchmark_traverse_result(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("traverse_result");

    for size in SIZES {
        let values: Vec<i64> = (0..size as i64).collect();

        group.bench_with_input(BenchmarkId::new("traverse_result", size), &values, |bencher, values| {
            bencher.iter(|| {
                let result = values
                    .clone()
                    .traverse_result(|x| if x >= 0 { Ok(x) } else { Err("negative") });
                black_box(result)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Accumulating contexts
// =============================================================================

fn benchmark_traverse_accumulating(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("traverse_accumulating");

    for size in SIZES {
        group.bench_with_input(BenchmarkId::new("validation_every_tenth_fails", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let result = traverse_array::<ValidationContext<Vec<usize>>, _, _, _>(0..size, |x| {
                    if x % 10 == 0 { Err(vec![x]) } else { Ok(x) }
                });
                black_box(result)
            });
        });

        group.bench_with_input(BenchmarkId::new("writer_sum", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let result = (0..size as u64)
                    .collect::<Vec<_>>()
                    .traverse_writer(|x| Writer::new(x, Sum(x)));
                black_box(result)
            });
        });

        group.bench_with_input(BenchmarkId::new("identity", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let result = traverse_array::<IdentityContext, _, _, _>(0..size, Identity);
                black_box(result)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Trampoline
// =============================================================================

fn benchmark_trampoline_run(criterion: &mut Criterion) {
    fn count_down(n: u64) -> Trampoline<'static, u64> {
        if n == 0 {
            Trampoline::done(0)
        } else {
            Trampoline::suspend(move || count_down(n - 1))
        }
    }

    let mut group = criterion.benchmark_group("trampoline_run");

    for depth in [100u64, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("count_down", depth), &depth, |bencher, &depth| {
            bencher.iter(|| black_box(count_down(black_box(depth)).run()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_traverse_option,
    benchmark_traverse_result,
    benchmark_traverse_accumulating,
    benchmark_trampoline_run
);
criterion_main!(benches);
