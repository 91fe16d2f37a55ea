use criterion::{black_box, BenchmarkId, Criterion};
use triad::{SkipList, WorkloadGenerator};

use super::{lookups, SEED, SIZES};

pub fn run(c: &mut Criterion) {
    let mut group = c.benchmark_group("skip_list");
    group.sample_size(10);

    for &size in SIZES {
        let mut gen = WorkloadGenerator::new(SEED);
        let keys = gen.generate_integers(size, 1_000_000).expect("valid bound");
        let probes = gen.sample(&keys, lookups(size));

        group.bench_with_input(BenchmarkId::new("insert", size), &keys, |b, keys| {
            b.iter(|| {
                let mut list = SkipList::with_seed(16, 0.5, SEED).expect("valid config");
                for &key in keys {
                    list.insert(black_box(key));
                }
                list
            });
        });

        let mut list = SkipList::with_seed(16, 0.5, SEED).expect("valid config");
        list.extend(keys.iter().copied());

        group.bench_with_input(BenchmarkId::new("search", size), &probes, |b, probes| {
            b.iter(|| {
                for key in probes {
                    black_box(list.search(black_box(key)));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("delete_insert", size), &probes, |b, probes| {
            // Each round leaves the key set unchanged.
            b.iter(|| {
                for &key in probes {
                    black_box(list.delete(black_box(&key)));
                    list.insert(key);
                }
            });
        });
    }

    group.finish();
}
