//! `SkipList` - a probabilistic ordered multiset.
//!
//! Each stored key lives in a node whose height is drawn from a geometric
//! distribution; a node of height `h` is linked into levels `0..=h`. Searches
//! start on the highest active level and drop a level whenever the next key is
//! not strictly smaller than the target, giving expected `O(log n)` cost.
//!
//! Nodes live in an arena (`Vec` of slots) and link to each other by index,
//! so rewiring a forward pointer is a plain `Option<usize>` write. Freed slots
//! are recycled through an intrusive free list.
//!
//! The random source is a type parameter: seed it for reproducible layouts
//! (`SkipList::with_seed`) or supply any [`rand::Rng`] with
//! `SkipList::with_rng`.

mod iter;
mod list;

pub use iter::Iter;
pub use list::SkipList;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default bound on node height.
pub const DEFAULT_MAX_LEVEL: usize = 16;

/// Default chance that a node is promoted one level higher.
pub const DEFAULT_PROMOTION_PROBABILITY: f64 = 0.5;

/// Largest accepted `max_level`.
pub const MAX_LEVEL_LIMIT: usize = 64;

/// Construction parameters for a [`SkipList`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkipListConfig {
    /// Highest level a node may reach. Levels are numbered from 0.
    pub max_level: usize,
    /// Chance of promoting a node one level higher, strictly within (0, 1).
    pub promotion_probability: f64,
}

impl SkipListConfig {
    /// Checks both parameters.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfiguration`] if `max_level` exceeds
    /// [`MAX_LEVEL_LIMIT`] or the probability is not strictly within (0, 1).
    pub fn validate(&self) -> Result<()> {
        if self.max_level > MAX_LEVEL_LIMIT {
            return Err(Error::InvalidConfiguration(
                "max level exceeds the supported limit of 64",
            ));
        }
        // Also rejects NaN.
        if !(self.promotion_probability > 0.0 && self.promotion_probability < 1.0) {
            return Err(Error::InvalidConfiguration(
                "promotion probability must lie strictly between 0 and 1",
            ));
        }
        Ok(())
    }

    /// Expected node height, `1 / (1 - p)`, ignoring the `max_level` cap.
    pub fn expected_height(&self) -> f64 {
        1.0 / (1.0 - self.promotion_probability)
    }
}

impl Default for SkipListConfig {
    fn default() -> Self {
        Self {
            max_level: DEFAULT_MAX_LEVEL,
            promotion_probability: DEFAULT_PROMOTION_PROBABILITY,
        }
    }
}
