use criterion::{Criterion, black_box, criterion_group, criterion_main};
use notespan_engine::text::{merge_adjacent, merge_adjacent_parallel};
mod common;

fn bench_sequential_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_sequential");
    group.sample_size(20);

    for size in [1_000, 10_000, 100_000] {
        let runs = common::generate_runs(size);
        group.bench_function(format!("{size}_runs"), |b| {
            b.iter(|| {
                let merged = merge_adjacent(black_box(runs.clone()));
                black_box(merged);
            });
        });
    }

    group.finish();
}

fn bench_parallel_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_parallel");
    group.sample_size(20);

    let runs = common::generate_runs(100_000);
    for workers in [2, 4, 8] {
        group.bench_function(format!("{workers}_workers"), |b| {
            b.iter(|| {
                let merged = merge_adjacent_parallel(black_box(runs.clone()), workers);
                black_box(merged);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sequential_merge, bench_parallel_merge);
criterion_main!(benches);
