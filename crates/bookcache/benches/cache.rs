use std::time::Duration;

use bookcache::BookCache;
use bookstore::BookStore;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};

fn instant_store() -> BookStore {
    BookStore::builtin().with_latency(Duration::ZERO)
}

fn bench_cached_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("cached_get");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("get_warm", |b| {
        let cache = BookCache::new(instant_store());

        // Warm the cache
        for id in 1..=10 {
            cache.resolve(id).unwrap();
        }

        let mut counter = 0u64;
        b.iter(|| {
            black_box(cache.get(counter % 10 + 1));
            counter += 1;
        });
    });

    group.bench_function("resolve_warm", |b| {
        let cache = BookCache::new(instant_store());
        for id in 1..=10 {
            cache.resolve(id).unwrap();
        }

        let mut counter = 0u64;
        b.iter(|| {
            black_box(cache.resolve(counter % 10 + 1));
            counter += 1;
        });
    });

    group.finish();
}

fn bench_cold_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("cold_resolve");
    group.sample_size(50);
    group.throughput(Throughput::Elements(10));

    group.bench_function("resolve_all_cold", |b| {
        b.iter_batched(
            || BookCache::new(instant_store()),
            |cache| {
                for id in 1..=10 {
                    black_box(cache.resolve(id));
                }
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("resolve_unknown", |b| {
        let cache = BookCache::new(instant_store());
        b.iter(|| black_box(cache.resolve(11)));
    });

    group.finish();
}

criterion_group!(benches, bench_cached_get, bench_cold_resolve);
criterion_main!(benches);
