//! Benchmarks for suggestion ranking
//!
//! Run with: cargo bench --package suggest
//!
//! Uses a synthetic category universe; the real listing has a few dozen
//! names, the larger sizes show how the parallel scoring pass scales.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use suggest::{distance, SuggestionRanker};

fn make_universe(size: usize) -> Vec<String> {
    const STEMS: [&str; 8] = [
        "TypeScript", "Rust", "Next.js", "Prisma", "Supabase", "Tailwind", "React", "Go",
    ];
    (0..size)
        .map(|i| format!("{}{}", STEMS[i % STEMS.len()], i))
        .collect()
}

fn bench_distance(c: &mut Criterion) {
    c.bench_function("distance_kitten_sitting", |b| {
        b.iter(|| distance(black_box("kitten"), black_box("sitting")))
    });
}

fn bench_rank(c: &mut Criterion) {
    let ranker = SuggestionRanker::new();
    let mut group = c.benchmark_group("rank");

    for size in [32, 512, 8192] {
        let universe = make_universe(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &universe, |b, universe| {
            b.iter(|| {
                let ranked = ranker.rank(black_box("typscrpt"), black_box(universe.as_slice()));
                black_box(ranked)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_distance, bench_rank);
criterion_main!(benches);
