//! Task reducer benchmarks
//!
//! Measures the cost of rebuilding the list per action, on the seed list and
//! on larger lists, plus provider dispatch overhead.
//!
//! Run with: `cargo bench -p todo`

#![allow(missing_docs)] // Benchmarks don't need extensive docs

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use todo::{apply, seed_tasks, Task, TaskAction, TaskId, TaskList, TaskProvider};

fn list_of(len: u64) -> TaskList {
    (0..len)
        .map(|i| Task::new(TaskId::new(i), format!("task {i}"), i % 2 == 0))
        .collect()
}

/// Benchmark `apply` in isolation (no store overhead)
fn benchmark_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply");
    group.throughput(Throughput::Elements(1));

    let seed = seed_tasks();
    group.bench_function("toggle_seed", |b| {
        b.iter(|| apply(black_box(&seed), black_box(TaskAction::toggle(TaskId::new(3)))));
    });

    for len in [10_u64, 100, 1_000] {
        let list = list_of(len);
        group.bench_with_input(BenchmarkId::new("toggle", len), &list, |b, list| {
            b.iter(|| apply(black_box(list), TaskAction::toggle(TaskId::new(len / 2))));
        });
        group.bench_with_input(BenchmarkId::new("remove", len), &list, |b, list| {
            b.iter(|| apply(black_box(list), TaskAction::remove(TaskId::new(len / 2))));
        });
        group.bench_with_input(BenchmarkId::new("create", len), &list, |b, list| {
            b.iter(|| {
                apply(
                    black_box(list),
                    TaskAction::create(Task::new(TaskId::new(len), "new", false)),
                )
            });
        });
    }

    group.finish();
}

/// Benchmark provider dispatch (store, tracing, and metrics included)
fn benchmark_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    group.throughput(Throughput::Elements(1));

    group.bench_function("toggle", |b| {
        let mut provider = TaskProvider::new();
        b.iter(|| provider.dispatch(black_box(TaskAction::toggle(TaskId::new(1)))));
    });

    group.finish();
}

criterion_group!(benches, benchmark_apply, benchmark_dispatch);
criterion_main!(benches);
