use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use seedbed::{create_seed_store, JsonSeed, SeedStore};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize, PartialEq)]
struct Seed {
    id: u32,
    name: String,
}

fn store_creation_benchmark(c: &mut Criterion) {
    c.bench_function("store_creation", |b| {
        b.iter(|| {
            let store: SeedStore<i32> = SeedStore::new(black_box(42));
            store
        });
    });
}

fn store_get_benchmark(c: &mut Criterion) {
    let store: SeedStore<i32> = SeedStore::new(42);

    c.bench_function("store_get", |b| {
        b.iter(|| {
            black_box(store.get());
        });
    });
}

fn store_with_benchmark(c: &mut Criterion) {
    let store = SeedStore::new("seed".to_string());

    c.bench_function("store_with", |b| {
        b.iter(|| {
            black_box(store.with(|s| s.len()));
        });
    });
}

fn store_clone_benchmark(c: &mut Criterion) {
    let store = SeedStore::new(vec![0u8; 4096]);

    c.bench_function("store_clone", |b| {
        b.iter(|| {
            black_box(store.clone());
        });
    });
}

fn json_seed_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("json_seed_load");

    for record_count in [1usize, 100, 1000].iter() {
        let records: Vec<String> = (0..*record_count)
            .map(|i| format!(r#"{{"id":{i},"name":"seed-{i}"}}"#))
            .collect();
        let text = format!("[{}]", records.join(","));

        group.bench_with_input(
            BenchmarkId::from_parameter(record_count),
            record_count,
            |b, _| {
                b.iter(|| {
                    let store: SeedStore<Vec<Seed>> =
                        create_seed_store(JsonSeed::new(black_box(text.clone()))).unwrap();
                    store
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    store_creation_benchmark,
    store_get_benchmark,
    store_with_benchmark,
    store_clone_benchmark,
    json_seed_benchmark,
);
criterion_main!(benches);
