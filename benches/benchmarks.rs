use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::sync::Arc;

use satchel::{BasicStore, Observer, Store, Update};

fn adder_store() -> Store<i64, i64> {
    Store::builder()
        .state(0)
        .update("add", |total, amount| *total += amount.unwrap_or(1))
        .update("sub", |total, amount| *total -= amount.unwrap_or(1))
        .build()
        .unwrap()
}

fn update_benchmark(c: &mut Criterion) {
    let store = adder_store();

    c.bench_function("store_update", |b| {
        b.iter(|| {
            store.update_with("add", black_box(1)).unwrap();
        });
    });
}

fn unknown_update_benchmark(c: &mut Criterion) {
    let store = adder_store();

    c.bench_function("store_update_unknown", |b| {
        b.iter(|| {
            store.update(black_box("missing")).unwrap();
        });
    });
}

fn batch_update_benchmark(c: &mut Criterion) {
    let store = adder_store();

    c.bench_function("store_batch_update", |b| {
        b.iter(|| {
            store
                .batch_update(vec![
                    Update::with_payload("add", black_box(5)),
                    Update::new("sub"),
                    Update::with_payload("sub", 2),
                    Update::new("add"),
                ])
                .unwrap();
        });
    });
}

fn notify_fanout_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("notify_fanout");
    for observer_count in [1usize, 10, 100] {
        group.bench_with_input(
            BenchmarkId::from_parameter(observer_count),
            &observer_count,
            |b, &observer_count| {
                let store = adder_store();
                let observers: Vec<Observer> = (0..observer_count)
                    .map(|_| {
                        let observer: Observer = Arc::new(|applied: &[&'static str]| {
                            black_box(applied.len());
                        });
                        store.register(&observer).unwrap();
                        observer
                    })
                    .collect();

                b.iter(|| {
                    store.update("add").unwrap();
                });

                drop(observers);
            },
        );
    }
    group.finish();
}

fn register_deregister_benchmark(c: &mut Criterion) {
    let store = adder_store();
    let observer: Observer = Arc::new(|_applied: &[&'static str]| {});

    c.bench_function("register_deregister", |b| {
        b.iter(|| {
            store.register(&observer).unwrap();
            store.deregister(&observer).unwrap();
        });
    });
}

fn basic_store_update_benchmark(c: &mut Criterion) {
    let store: BasicStore<i64, i64> = BasicStore::builder()
        .state(0)
        .update("add", |total, amount| *total += amount.unwrap_or(1))
        .build()
        .unwrap();

    c.bench_function("basic_store_update_state", |b| {
        b.iter(|| {
            store.update_state_with("add", black_box(1));
        });
    });
}

criterion_group!(
    benches,
    update_benchmark,
    unknown_update_benchmark,
    batch_update_benchmark,
    notify_fanout_benchmark,
    register_deregister_benchmark,
    basic_store_update_benchmark
);
criterion_main!(benches);
