//! Benchmark suite for the lazy-deletion priority queue.
//!
//! Measures the operations the lazy-deletion design exists for:
//! - push/pop throughput at several queue sizes
//! - arbitrary removal: tombstoning vs a naive search-and-rebuild baseline
//! - reprioritization churn (the superseding add path)
//! - pop cost while wading through accumulated tombstones

#![allow(missing_docs)]

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};

use lazyheap::PriorityQueue;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Deterministic spread of priorities over a size; avoids pre-sorted input.
fn priority(task: u64) -> i64 {
    ((task * 2_654_435_761) % 1_000_003) as i64
}

fn setup_queue(size: u64) -> PriorityQueue<u64, i64> {
    let mut queue = PriorityQueue::with_capacity(size as usize);
    for task in 0..size {
        queue.add_task(task, priority(task));
    }
    queue
}

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");
    for size in [100u64, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || PriorityQueue::with_capacity(size as usize),
                |mut queue| {
                    for task in 0..size {
                        queue.add_task(black_box(task), priority(task));
                    }
                    while queue.pop_task().is_ok() {}
                    queue
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_half");
    // The rebuild baseline is quadratic; keep the size where it still
    // finishes in reasonable time.
    for size in [1_000u64] {
        group.throughput(Throughput::Elements(size / 2));

        group.bench_with_input(BenchmarkId::new("lazy", size), &size, |b, &size| {
            b.iter_batched(
                || setup_queue(size),
                |mut queue| {
                    for task in (0..size).step_by(2) {
                        queue.remove_task(&task).unwrap();
                    }
                    queue
                },
                BatchSize::SmallInput,
            );
        });

        // Baseline: a plain heap has no identity removal; evicting an
        // arbitrary element means filtering the backing storage and
        // rebuilding, O(n) per removal.
        group.bench_with_input(BenchmarkId::new("rebuild", size), &size, |b, &size| {
            b.iter_batched(
                || {
                    (0..size)
                        .map(|task| Reverse((priority(task), task)))
                        .collect::<BinaryHeap<_>>()
                },
                |mut heap| {
                    for task in (0..size).step_by(2) {
                        let kept = heap
                            .drain()
                            .filter(|&Reverse((_, t))| t != task)
                            .collect::<Vec<_>>();
                        heap = BinaryHeap::from(kept);
                    }
                    heap
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_reprioritize(c: &mut Criterion) {
    let mut group = c.benchmark_group("reprioritize");
    for size in [1_000u64, 10_000] {
        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || setup_queue(size),
                |mut queue| {
                    for task in 0..size {
                        queue.add_task(task, priority(task.wrapping_add(size)));
                    }
                    queue
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_pop_through_tombstones(c: &mut Criterion) {
    let mut group = c.benchmark_group("pop_through_tombstones");
    for size in [1_000u64, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || {
                    let mut queue = setup_queue(size);
                    // Tombstone 90% of the queue before measuring the drain.
                    for task in 0..size {
                        if task % 10 != 0 {
                            queue.remove_task(&task).unwrap();
                        }
                    }
                    queue
                },
                |mut queue| {
                    while queue.pop_task().is_ok() {}
                    queue
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_push_pop,
    bench_remove,
    bench_reprioritize,
    bench_pop_through_tombstones
);
criterion_main!(benches);
