use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use freqlist::SelfOrganizingMap;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const UNIVERSE: u64 = 512;
const OPS: u64 = 4096;

/// Key stream where `hot_prob` of accesses land in the first `hot_size` keys.
fn hotset_keys(seed: u64, hot_size: u64, hot_prob: f64) -> Vec<u64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..OPS)
        .map(|_| {
            if rng.random::<f64>() < hot_prob {
                rng.random::<u64>() % hot_size
            } else {
                hot_size + rng.random::<u64>() % (UNIVERSE - hot_size)
            }
        })
        .collect()
}

fn uniform_keys(seed: u64) -> Vec<u64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..OPS).map(|_| rng.random::<u64>() % UNIVERSE).collect()
}

fn filled(n: u64) -> SelfOrganizingMap<u64, u64> {
    let mut map = SelfOrganizingMap::with_capacity(n as usize);
    for i in 0..n {
        map.set(i, i);
    }
    map
}

fn bench_set_new_keys(c: &mut Criterion) {
    let mut group = c.benchmark_group("self_organizing");
    group.throughput(Throughput::Elements(UNIVERSE));
    group.bench_function("set_new_keys", |b| {
        b.iter_batched(
            SelfOrganizingMap::<u64, u64>::new,
            |mut map| {
                for i in 0..UNIVERSE {
                    map.set(std::hint::black_box(i), i);
                }
                map
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_find_workloads(c: &mut Criterion) {
    let mut group = c.benchmark_group("self_organizing_find");
    group.throughput(Throughput::Elements(OPS));

    let workloads = [
        ("uniform", uniform_keys(7)),
        ("hotset_90_10", hotset_keys(7, UNIVERSE / 10, 0.9)),
        ("hotset_99_1", hotset_keys(7, UNIVERSE / 100, 0.99)),
    ];

    for (name, keys) in &workloads {
        group.bench_function(*name, |b| {
            b.iter_batched(
                || filled(UNIVERSE),
                |mut map| {
                    for key in keys {
                        let _ = std::hint::black_box(map.find(std::hint::black_box(key)));
                    }
                    map
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_set_existing_hotset(c: &mut Criterion) {
    let mut group = c.benchmark_group("self_organizing");
    group.throughput(Throughput::Elements(OPS));
    let keys = hotset_keys(11, UNIVERSE / 10, 0.9);
    group.bench_function("set_existing_hotset", |b| {
        b.iter_batched(
            || filled(UNIVERSE),
            |mut map| {
                for (i, key) in keys.iter().enumerate() {
                    let _ = std::hint::black_box(map.set(*key, i as u64));
                }
                map
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_find_head(c: &mut Criterion) {
    let mut group = c.benchmark_group("self_organizing");
    group.throughput(Throughput::Elements(OPS));
    group.bench_function("find_head", |b| {
        let mut map = filled(UNIVERSE);
        let head = UNIVERSE - 1;
        b.iter(|| {
            for _ in 0..OPS {
                let _ = std::hint::black_box(map.find(&std::hint::black_box(head)));
            }
        })
    });
    group.finish();
}

fn bench_merge_and_clone(c: &mut Criterion) {
    let mut group = c.benchmark_group("self_organizing");
    group.throughput(Throughput::Elements(UNIVERSE));
    let other: SelfOrganizingMap<u64, u64> = (UNIVERSE / 2..UNIVERSE + UNIVERSE / 2)
        .map(|i| (i, i))
        .collect();
    group.bench_function("merge_half_overlap", |b| {
        b.iter_batched(
            || filled(UNIVERSE),
            |mut map| {
                map.merge(std::hint::black_box(&other));
                map
            },
            BatchSize::SmallInput,
        )
    });

    let source = filled(UNIVERSE);
    group.bench_function("clone_cold", |b| {
        b.iter(|| std::hint::black_box(source.clone()))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_set_new_keys,
    bench_find_workloads,
    bench_set_existing_hotset,
    bench_find_head,
    bench_merge_and_clone
);
criterion_main!(benches);
