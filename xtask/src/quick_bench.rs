use anyhow::{ensure, Result};
use std::time::{Duration, Instant};

use triad::{FenwickTree, PrefixTree, SkipList, WorkloadConfig, WorkloadGenerator};

const MAX_SEARCHES: usize = 1_000;
const MAX_QUERIES: usize = 10_000;

struct Row {
    size: usize,
    structure: &'static str,
    build: Duration,
    lookup: Duration,
}

fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let out = f();
    (out, start.elapsed())
}

pub fn run(sizes: &[usize], config: &WorkloadConfig) -> Result<()> {
    ensure!(sizes.iter().all(|&s| s > 0), "dataset sizes must be positive");

    let mut gen = WorkloadGenerator::from_config(config);
    let mut rows = Vec::with_capacity(sizes.len() * 3);

    for &size in sizes {
        println!("\nTesting with {size} elements...");

        // Trie
        let words = gen.generate_words(size, config.min_word_len, config.max_word_len)?;
        let (trie, build) = timed(|| words.iter().collect::<PrefixTree>());
        let probes = gen.sample(&words, MAX_SEARCHES);
        let (_, lookup) = timed(|| probes.iter().filter(|w| trie.search(w)).count());
        println!("  Trie      insert: {:.4}s | search: {:.4}s", build.as_secs_f64(), lookup.as_secs_f64());
        rows.push(Row { size, structure: "Trie", build, lookup });

        // Fenwick Tree
        let values = gen.generate_array(size, config.max_array_value)?;
        let mut ft = FenwickTree::<i64>::new(size);
        let (built, build) = timed(|| ft.build_from_array(&values));
        built?;
        let positions: Vec<usize> = (0..MAX_QUERIES.min(size)).map(|_| gen.index(size)).collect();
        let (sums, lookup) = timed(|| {
            positions
                .iter()
                .map(|&i| ft.query(i))
                .collect::<triad::Result<Vec<i64>>>()
        });
        sums?;
        println!("  Fenwick   build:  {:.4}s | query:  {:.4}s", build.as_secs_f64(), lookup.as_secs_f64());
        rows.push(Row { size, structure: "Fenwick Tree", build, lookup });

        // Skip List
        let keys = gen.generate_integers(size, config.max_integer)?;
        let mut list = SkipList::new(16, 0.5)?;
        let ((), build) = timed(|| list.extend(keys.iter().copied()));
        let probes = gen.sample(&keys, MAX_SEARCHES);
        let (_, lookup) = timed(|| probes.iter().filter(|k| list.search(k)).count());
        println!("  Skip List insert: {:.4}s | search: {:.4}s", build.as_secs_f64(), lookup.as_secs_f64());
        rows.push(Row { size, structure: "Skip List", build, lookup });
    }

    print_summary(&rows);
    Ok(())
}

fn print_summary(rows: &[Row]) {
    println!("\nQuick benchmark summary");
    println!("{:<12} {:<15} {:<15} {:<15}", "Size", "Data Structure", "Insert/Build", "Search/Query");
    println!("{}", "-".repeat(60));

    let mut last_size = None;
    for row in rows {
        let size = if last_size == Some(row.size) {
            String::new()
        } else {
            row.size.to_string()
        };
        last_size = Some(row.size);
        println!(
            "{:<12} {:<15} {:<15.4} {:<15.4}",
            size,
            row.structure,
            row.build.as_secs_f64(),
            row.lookup.as_secs_f64()
        );
    }
}
