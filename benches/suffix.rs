//! Benchmarks for suffix resolution.

use criterion::{Criterion, criterion_group, criterion_main};
use ordinals::{Suffix, suffix_for};
use std::hint::black_box;

fn bench_suffix_for(c: &mut Criterion) {
    c.bench_function("suffix_for(111)", |b| b.iter(|| suffix_for(black_box(111))));
}

fn bench_range(c: &mut Criterion) {
    c.bench_function("Suffix::of over -500..500", |b| {
        b.iter(|| {
            (-500_i64..500)
                .map(|n| Suffix::of(black_box(n)))
                .filter(|s| *s == Suffix::Th)
                .count()
        })
    });
}

criterion_group!(benches, bench_suffix_for, bench_range);
criterion_main!(benches);
