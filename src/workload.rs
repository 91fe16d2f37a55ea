//! Synthetic workloads for benchmarks and demos.
//!
//! Generates random words for the prefix tree, small positive values for the
//! Fenwick tree and wide-range integers for the skip list. Every generator
//! draws from a single [`StdRng`], so a fixed seed reproduces a dataset.

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Bounds for generated datasets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkloadConfig {
    /// Shortest generated word, in characters.
    pub min_word_len: usize,
    /// Longest generated word, in characters.
    pub max_word_len: usize,
    /// Upper bound (inclusive) for skip-list integers; the lower bound is 0.
    pub max_integer: i64,
    /// Upper bound (inclusive) for Fenwick values; the lower bound is 1.
    pub max_array_value: i64,
    /// Seed for the generator; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            min_word_len: 3,
            max_word_len: 10,
            max_integer: 1_000_000,
            max_array_value: 100,
            seed: None,
        }
    }
}

impl WorkloadConfig {
    /// Checks that every bound describes a non-empty range.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfiguration`] for an empty range.
    pub fn validate(&self) -> Result<()> {
        if self.min_word_len > self.max_word_len {
            return Err(Error::InvalidConfiguration(
                "minimum word length exceeds maximum word length",
            ));
        }
        if self.max_integer < 0 {
            return Err(Error::InvalidConfiguration("maximum integer must not be negative"));
        }
        if self.max_array_value < 1 {
            return Err(Error::InvalidConfiguration("maximum array value must be at least 1"));
        }
        Ok(())
    }
}

/// Random dataset generator.
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    rng: StdRng,
}

impl WorkloadGenerator {
    /// Creates a generator with a fixed seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a generator using the seed in `config`, or entropy if unset.
    pub fn from_config(config: &WorkloadConfig) -> Self {
        config.seed.map_or_else(Self::from_entropy, Self::new)
    }

    /// Generates `count` lowercase ASCII words with lengths uniform in
    /// `[min_len, max_len]`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfiguration`] if `min_len > max_len`.
    pub fn generate_words(&mut self, count: usize, min_len: usize, max_len: usize) -> Result<Vec<String>> {
        if min_len > max_len {
            return Err(Error::InvalidConfiguration(
                "minimum word length exceeds maximum word length",
            ));
        }
        let lengths = Uniform::new_inclusive(min_len, max_len);
        let letters = Uniform::new_inclusive(b'a', b'z');
        let words = (0..count)
            .map(|_| {
                let len = lengths.sample(&mut self.rng);
                (0..len)
                    .map(|_| char::from(letters.sample(&mut self.rng)))
                    .collect()
            })
            .collect();
        Ok(words)
    }

    /// Generates `count` integers uniform in `[0, max_val]`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfiguration`] if `max_val < 0`.
    pub fn generate_integers(&mut self, count: usize, max_val: i64) -> Result<Vec<i64>> {
        if max_val < 0 {
            return Err(Error::InvalidConfiguration("maximum integer must not be negative"));
        }
        Ok(self.uniform(count, 0, max_val))
    }

    /// Generates `count` Fenwick values uniform in `[1, max_val]`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfiguration`] if `max_val < 1`.
    pub fn generate_array(&mut self, count: usize, max_val: i64) -> Result<Vec<i64>> {
        if max_val < 1 {
            return Err(Error::InvalidConfiguration("maximum array value must be at least 1"));
        }
        Ok(self.uniform(count, 1, max_val))
    }

    fn uniform(&mut self, count: usize, low: i64, high: i64) -> Vec<i64> {
        let dist = Uniform::new_inclusive(low, high);
        (0..count).map(|_| dist.sample(&mut self.rng)).collect()
    }

    /// Picks up to `limit` distinct positions of `items` and returns clones
    /// of the chosen elements.
    pub fn sample<T: Clone>(&mut self, items: &[T], limit: usize) -> Vec<T> {
        rand::seq::index::sample(&mut self.rng, items.len(), limit.min(items.len()))
            .into_iter()
            .map(|i| items[i].clone())
            .collect()
    }

    /// Draws an index uniform in `[0, len)`. `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}
