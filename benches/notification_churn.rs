// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the notification lifecycle.
//!
//! Measures the performance of:
//! - Enqueue followed by manual dismissal
//! - Expiring a full batch through the tick driver
//! - Deriving the position-grouped view

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iced_toaster::ui::notifications::{Manager, Request};
use std::hint::black_box;
use std::time::{Duration, Instant};

const POSITIONS: [&str; 6] = [
    "top-left",
    "top-center",
    "top-right",
    "bottom-left",
    "bottom-center",
    "bottom-right",
];

fn filled_manager(count: usize, now: Instant) -> Manager {
    let mut manager = Manager::new();
    for n in 0..count {
        manager.notify_at(
            Request::info("bench").position(POSITIONS[n % POSITIONS.len()]),
            now,
        );
    }
    manager
}

/// Enqueue then dismiss, one toast at a time.
fn bench_notify_dismiss(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_churn");

    group.bench_function("notify_dismiss", |b| {
        let mut manager = Manager::new();
        b.iter(|| {
            let id = manager.notify(Request::success(black_box("saved")));
            black_box(manager.dismiss(id));
        });
    });

    group.finish();
}

/// Expire every toast of a batch with one tick.
fn bench_tick_expiry(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_churn");

    for count in [10usize, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("tick_expiry", count), &count, |b, &count| {
            b.iter_batched(
                || {
                    let now = Instant::now();
                    (filled_manager(count, now), now + Duration::from_secs(10))
                },
                |(mut manager, later)| black_box(manager.tick(later)),
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Group active toasts by position.
fn bench_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_churn");

    for count in [10usize, 100, 1000] {
        let manager = filled_manager(count, Instant::now());
        group.bench_with_input(BenchmarkId::new("group", count), &manager, |b, manager| {
            b.iter(|| black_box(manager.view().len()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_notify_dismiss, bench_tick_expiry, bench_group);
criterion_main!(benches);
