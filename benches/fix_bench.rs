//! Benchmark for the fixed-point combinator and the control containers.
//!
//! Compares `fix`-derived recursion against plain named recursion, and the
//! cost of mapping through `Maybe` and `Either` chains.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lambox::control::{Either, Maybe, Recursive, either, fix, maybe};
use std::hint::black_box;

fn named_fibonacci(n: u32) -> u64 {
    if n == 1 || n == 2 { 1 } else { named_fibonacci(n - 1) + named_fibonacci(n - 2) }
}

// =============================================================================
// Fixed Point
// =============================================================================

fn benchmark_fibonacci(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("fibonacci");
    let fixed = fix(|recurse: Recursive<u32, u64>| {
        move |n: u32| if n == 1 || n == 2 { 1 } else { recurse(n - 1) + recurse(n - 2) }
    });

    for n in [10, 15, 20] {
        group.bench_with_input(BenchmarkId::new("fix", n), &n, |bencher, &n| {
            bencher.iter(|| fixed(black_box(n)));
        });
        group.bench_with_input(BenchmarkId::new("named", n), &n, |bencher, &n| {
            bencher.iter(|| named_fibonacci(black_box(n)));
        });
    }

    group.finish();
}

fn benchmark_fix_construction(criterion: &mut Criterion) {
    criterion.bench_function("fix_construction", |bencher| {
        bencher.iter(|| {
            let factorial = fix(|recurse: Recursive<u64, u64>| {
                move |n: u64| if n <= 1 { 1 } else { n * recurse(n - 1) }
            });
            black_box(factorial(1))
        });
    });
}

// =============================================================================
// Containers
// =============================================================================

fn benchmark_container_chains(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("container_chain");

    group.bench_function("maybe_present", |bencher| {
        bencher.iter(|| {
            let result = Maybe::of(black_box(3_i64))
                .map(|n| n + 1)
                .flat_map(|n| if n > 0 { Maybe::of(n * 2) } else { Maybe::nothing() })
                .map(|n| n - 1);
            maybe(0, |n| n, result)
        });
    });

    group.bench_function("either_left_short_circuit", |bencher| {
        bencher.iter(|| {
            let result: Either<&str, i64> = Either::left(black_box("failed"))
                .map(|n: i64| n + 1)
                .flat_map(|n| Either::Right(n * 2))
                .map(|n| n - 1);
            either(str::len, |n| usize::try_from(n).unwrap_or_default(), result)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_fibonacci,
    benchmark_fix_construction,
    benchmark_container_chains
);
criterion_main!(benches);
