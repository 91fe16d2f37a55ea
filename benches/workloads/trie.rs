use criterion::{black_box, BatchSize, BenchmarkId, Criterion};
use triad::{PrefixTree, WorkloadGenerator};

use super::{lookups, SEED, SIZES};

pub fn run(c: &mut Criterion) {
    let mut group = c.benchmark_group("trie");
    group.sample_size(10);

    for &size in SIZES {
        let mut gen = WorkloadGenerator::new(SEED);
        let words = gen.generate_words(size, 3, 10).expect("valid word bounds");
        let probes = gen.sample(&words, lookups(size));

        group.bench_with_input(BenchmarkId::new("insert", size), &words, |b, words| {
            b.iter(|| {
                let mut trie = PrefixTree::new();
                for word in words {
                    trie.insert(black_box(word));
                }
                trie
            });
        });

        let trie: PrefixTree = words.iter().collect();
        group.bench_with_input(BenchmarkId::new("search", size), &probes, |b, probes| {
            b.iter(|| {
                for word in probes {
                    black_box(trie.search(black_box(word)));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("prefix_enumeration", size), &probes, |b, probes| {
            b.iter(|| {
                for word in probes {
                    black_box(trie.get_all_words_with_prefix(&word[..2]));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("delete", size), &probes, |b, probes| {
            b.iter_batched(
                || trie.clone(),
                |mut trie| {
                    for word in probes {
                        black_box(trie.delete(word));
                    }
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}
