//! Scaling workloads shared by the `suite` bench.
//!
//! Every workload runs at the same sizes with a fixed seed so that baselines
//! saved by `cargo xtask bench` compare like with like.

pub mod fenwick;
pub mod skip_list;
pub mod trie;

pub const SIZES: &[usize] = &[1_000, 10_000, 100_000];
pub const SEED: u64 = 0x5EED;

/// Number of lookups timed per iteration, capped by the dataset size.
pub fn lookups(size: usize) -> usize {
    size.min(1_000)
}
