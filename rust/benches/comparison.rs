use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rbtreemap::TreeMap;
use std::collections::BTreeMap;

const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn random_keys(count: usize) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count).map(|_| rng.gen_range(0..(count as i32 * 10))).collect()
}

fn insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for size in SIZES {
        let keys = random_keys(size);

        group.bench_with_input(BenchmarkId::new("TreeMap", size), &keys, |b, keys| {
            b.iter(|| {
                let mut map = TreeMap::new();
                for &key in keys {
                    map.insert(key, key);
                }
                black_box(map)
            })
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &keys, |b, keys| {
            b.iter(|| {
                let mut map = BTreeMap::new();
                for &key in keys {
                    map.insert(key, key);
                }
                black_box(map)
            })
        });
    }
    group.finish();
}

fn lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("get");
    for size in SIZES {
        let keys = random_keys(size);
        let our_map: TreeMap<i32, i32> = keys.iter().map(|&k| (k, k)).collect();
        let std_map: BTreeMap<i32, i32> = keys.iter().map(|&k| (k, k)).collect();

        group.bench_with_input(BenchmarkId::new("TreeMap", size), &keys, |b, keys| {
            b.iter(|| {
                for key in keys {
                    black_box(our_map.get(key));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &keys, |b, keys| {
            b.iter(|| {
                for key in keys {
                    black_box(std_map.get(key));
                }
            })
        });
    }
    group.finish();
}

fn removal(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");
    for size in SIZES {
        let keys = random_keys(size);
        let our_map: TreeMap<i32, i32> = keys.iter().map(|&k| (k, k)).collect();
        let std_map: BTreeMap<i32, i32> = keys.iter().map(|&k| (k, k)).collect();

        group.bench_with_input(BenchmarkId::new("TreeMap", size), &keys, |b, keys| {
            b.iter_batched(
                || our_map.clone(),
                |mut map| {
                    for key in keys {
                        map.remove(key);
                    }
                    map
                },
                criterion::BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &keys, |b, keys| {
            b.iter_batched(
                || std_map.clone(),
                |mut map| {
                    for key in keys {
                        map.remove(key);
                    }
                    map
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate");
    let our_map: TreeMap<i32, i32> = (0..10_000).map(|i| (i, i)).collect();
    let std_map: BTreeMap<i32, i32> = (0..10_000).map(|i| (i, i)).collect();

    group.bench_function("TreeMap/iter", |b| {
        b.iter(|| black_box(our_map.iter().map(|(k, _)| *k as i64).sum::<i64>()))
    });

    group.bench_function("TreeMap/cursor", |b| {
        b.iter(|| {
            let mut cursor = our_map.cursor();
            let mut total = 0i64;
            while let Ok((k, _)) = cursor.next(&our_map) {
                total += *k as i64;
            }
            black_box(total)
        })
    });

    group.bench_function("BTreeMap/iter", |b| {
        b.iter(|| black_box(std_map.iter().map(|(k, _)| *k as i64).sum::<i64>()))
    });

    group.finish();
}

criterion_group!(benches, insertion, lookup, removal, iteration);
criterion_main!(benches);
