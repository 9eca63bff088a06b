use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use lrukit::policy::lru_k::LrukCache;
use lrukit::traits::{CoreCache, LrukCacheTrait};
use std::time::Instant;

fn bench_lru_k_put_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("lru_k_policy");
    let ops_per_iter = 1024u64 * 2;
    group.throughput(Throughput::Elements(ops_per_iter));
    group.bench_function("put_get", |b| {
        b.iter_batched(
            || {
                let mut cache = LrukCache::new(1024, 2).unwrap();
                for i in 0..1024u64 {
                    cache.put(i, i).unwrap();
                }
                cache
            },
            |mut cache| {
                for i in 0..1024u64 {
                    cache.put(std::hint::black_box(i + 10_000), i).unwrap();
                    let _ = std::hint::black_box(cache.get(&std::hint::black_box(i)));
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_lru_k_pop_victim(c: &mut Criterion) {
    let mut group = c.benchmark_group("lru_k_policy");
    group.throughput(Throughput::Elements(1024));
    group.bench_function("pop_victim", |b| {
        b.iter_batched(
            || {
                let mut cache = LrukCache::new(1024, 2).unwrap();
                for i in 0..1024u64 {
                    cache.put(i, i).unwrap();
                    cache.touch(&i).unwrap();
                }
                cache
            },
            |mut cache| {
                for _ in 0..1024u64 {
                    let _ = std::hint::black_box(cache.pop_victim());
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_lru_k_eviction_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("lru_k_policy");
    group.throughput(Throughput::Elements(4096));
    group.bench_function("eviction_churn", |b| {
        b.iter_batched(
            || {
                let mut cache = LrukCache::new(1024, 2).unwrap();
                for i in 0..1024u64 {
                    cache.put(i, i).unwrap();
                    cache.touch(&i).unwrap();
                }
                cache
            },
            |mut cache| {
                for i in 0..4096u64 {
                    cache.put(std::hint::black_box(10_000 + i), i).unwrap();
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_lru_k_touch_hotset(c: &mut Criterion) {
    let mut group = c.benchmark_group("lru_k_policy");
    group.throughput(Throughput::Elements(4096));
    group.bench_function("touch_hotset", |b| {
        b.iter_batched(
            || {
                let mut cache = LrukCache::new(4096, 2).unwrap();
                for i in 0..4096u64 {
                    cache.put(i, i).unwrap();
                }
                cache
            },
            |mut cache| {
                for i in 0..4096u64 {
                    let _ = std::hint::black_box(cache.touch(&std::hint::black_box(i)));
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_lru_k_get_hit_ns(c: &mut Criterion) {
    c.bench_function("lru_k_get_hit_ns", |b| {
        b.iter_custom(|iters| {
            let capacity = 16_384u64;
            let mut cache = LrukCache::new(capacity as usize, 2).unwrap();
            for i in 0..capacity {
                cache.put(i, i).unwrap();
            }
            let start = Instant::now();
            for (idx, _) in (0..iters).enumerate() {
                let key = (idx as u64) % capacity;
                let _ = std::hint::black_box(cache.get(&key));
            }
            start.elapsed()
        })
    });
}

fn bench_lru_k_put_full_ns(c: &mut Criterion) {
    c.bench_function("lru_k_put_full_ns", |b| {
        b.iter_custom(|iters| {
            let capacity = 4096u64;
            let mut cache = LrukCache::new(capacity as usize, 2).unwrap();
            for i in 0..capacity {
                cache.put(i, i).unwrap();
                cache.touch(&i).unwrap();
            }
            let start = Instant::now();
            for i in 0..iters {
                let key = capacity + i;
                cache.put(std::hint::black_box(key), i).unwrap();
            }
            start.elapsed()
        })
    });
}

criterion_group!(
    end_to_end,
    bench_lru_k_put_get,
    bench_lru_k_eviction_churn
);
criterion_group!(
    policy_level,
    bench_lru_k_pop_victim,
    bench_lru_k_touch_hotset
);
criterion_group!(micro_ops, bench_lru_k_get_hit_ns, bench_lru_k_put_full_ns);
criterion_main!(end_to_end, policy_level, micro_ops);
