use criterion::{black_box, BatchSize, BenchmarkId, Criterion};
use triad::{FenwickTree, WorkloadGenerator};

use super::{SEED, SIZES};

pub fn run(c: &mut Criterion) {
    let mut group = c.benchmark_group("fenwick");
    group.sample_size(10);

    for &size in SIZES {
        let mut gen = WorkloadGenerator::new(SEED);
        let values = gen.generate_array(size, 100).expect("valid value bound");
        let positions: Vec<usize> = (0..size.min(10_000)).map(|_| gen.index(size)).collect();

        group.bench_with_input(BenchmarkId::new("build", size), &values, |b, values| {
            b.iter(|| {
                let mut ft = FenwickTree::<i64>::new(values.len());
                ft.build_from_array(black_box(values)).expect("fits");
                ft
            });
        });

        let ft = FenwickTree::from_slice(&values);
        group.bench_with_input(BenchmarkId::new("query", size), &positions, |b, positions| {
            b.iter(|| {
                for &i in positions {
                    black_box(ft.query(black_box(i)).expect("in range"));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("update", size), &positions, |b, positions| {
            b.iter_batched(
                || ft.clone(),
                |mut ft| {
                    for &i in positions {
                        ft.update(black_box(i), 1).expect("in range");
                    }
                    ft
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}
