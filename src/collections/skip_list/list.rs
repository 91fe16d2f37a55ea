use core::fmt;
use core::mem;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::iter::Iter;
use super::{SkipListConfig, MAX_LEVEL_LIMIT};
use crate::error::Result;

/// Predecessor per level; `None` stands for the header.
type UpdateVector = [Option<usize>; MAX_LEVEL_LIMIT + 1];

pub(super) struct NodeData<K> {
    pub(super) key: K,
    /// One forward link per level the node participates in (`0..=height`).
    pub(super) forward: Vec<Option<usize>>,
}

/// A slot in the node arena.
/// Can be either an occupied node or a link to the next free slot.
pub(super) enum Slot<K> {
    Occupied(NodeData<K>),
    Free(Option<usize>),
}

/// A skip list holding an ordered multiset of keys.
///
/// Time Complexity (expected):
/// - Insert: O(log n)
/// - Search: O(log n)
/// - Delete: O(log n)
///
/// Space Complexity: O(n) expected
pub struct SkipList<K, R = StdRng> {
    pub(super) nodes: Vec<Slot<K>>,
    free_head: Option<usize>,
    /// Forward links of the sentinel header, `max_level + 1` slots.
    pub(super) head: Vec<Option<usize>>,
    /// Highest level currently in use.
    level: usize,
    max_level: usize,
    promotion_probability: f64,
    len: usize,
    rng: R,
}

impl<K> SkipList<K, StdRng> {
    /// Creates an empty skip list seeded from OS entropy.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfiguration`](crate::Error::InvalidConfiguration)
    /// if `max_level` exceeds 64 or `promotion_probability` is not strictly
    /// within (0, 1).
    pub fn new(max_level: usize, promotion_probability: f64) -> Result<Self> {
        Self::with_rng(max_level, promotion_probability, StdRng::from_entropy())
    }

    /// Creates an empty skip list with a deterministic height sequence.
    ///
    /// # Errors
    /// Same as [`new`](Self::new).
    pub fn with_seed(max_level: usize, promotion_probability: f64, seed: u64) -> Result<Self> {
        Self::with_rng(max_level, promotion_probability, StdRng::seed_from_u64(seed))
    }

    /// Creates an empty skip list from a [`SkipListConfig`].
    ///
    /// # Errors
    /// Same as [`new`](Self::new).
    pub fn from_config(config: &SkipListConfig) -> Result<Self> {
        Self::new(config.max_level, config.promotion_probability)
    }
}

impl<K, R> SkipList<K, R> {
    /// Creates an empty skip list drawing node heights from `rng`.
    ///
    /// # Errors
    /// Same as [`SkipList::new`].
    pub fn with_rng(max_level: usize, promotion_probability: f64, rng: R) -> Result<Self> {
        SkipListConfig {
            max_level,
            promotion_probability,
        }
        .validate()?;
        #[cfg(feature = "tracing")]
        tracing::debug!(max_level, promotion_probability, "creating skip list");
        Ok(Self::from_parts(max_level, promotion_probability, rng))
    }

    fn from_parts(max_level: usize, promotion_probability: f64, rng: R) -> Self {
        Self {
            nodes: Vec::new(),
            free_head: None,
            head: vec![None; max_level + 1],
            level: 0,
            max_level,
            promotion_probability,
            len: 0,
            rng,
        }
    }

    /// Returns the number of stored keys, duplicates counted.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no key is stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the highest level currently in use.
    pub fn level(&self) -> usize {
        self.level
    }

    /// Returns the configured bound on node height.
    pub fn max_level(&self) -> usize {
        self.max_level
    }

    /// Returns the configured promotion probability.
    pub fn promotion_probability(&self) -> f64 {
        self.promotion_probability
    }

    /// Returns the smallest key.
    pub fn first(&self) -> Option<&K> {
        self.head[0].map(|idx| &self.node(idx).key)
    }

    /// Iterates over keys in non-decreasing order (level 0 walk).
    pub fn iter(&self) -> Iter<'_, K, R> {
        Iter::new(self)
    }

    /// Removes every key, keeping the configuration and random source.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free_head = None;
        self.head.fill(None);
        self.level = 0;
        self.len = 0;
    }

    pub(super) fn node(&self, idx: usize) -> &NodeData<K> {
        match &self.nodes[idx] {
            Slot::Occupied(node) => node,
            Slot::Free(_) => panic!("skip list link points at a free slot"),
        }
    }

    fn node_mut(&mut self, idx: usize) -> &mut NodeData<K> {
        match &mut self.nodes[idx] {
            Slot::Occupied(node) => node,
            Slot::Free(_) => panic!("skip list link points at a free slot"),
        }
    }

    /// Forward link of `cursor` (header when `None`) at `level`.
    fn next_of(&self, cursor: Option<usize>, level: usize) -> Option<usize> {
        match cursor {
            Some(idx) => self.node(idx).forward[level],
            None => self.head[level],
        }
    }

    fn set_next(&mut self, cursor: Option<usize>, level: usize, target: Option<usize>) {
        match cursor {
            Some(idx) => self.node_mut(idx).forward[level] = target,
            None => self.head[level] = target,
        }
    }

    fn alloc_node(&mut self, node: NodeData<K>) -> usize {
        match self.free_head {
            Some(idx) => {
                match mem::replace(&mut self.nodes[idx], Slot::Occupied(node)) {
                    Slot::Free(next) => self.free_head = next,
                    Slot::Occupied(_) => panic!("skip list free list points at an occupied slot"),
                }
                idx
            }
            None => {
                self.nodes.push(Slot::Occupied(node));
                self.nodes.len() - 1
            }
        }
    }

    fn release_node(&mut self, idx: usize) {
        self.nodes[idx] = Slot::Free(self.free_head);
        self.free_head = Some(idx);
    }
}

impl<K: Ord, R> SkipList<K, R> {
    /// Descends from the active level to level 0, advancing while the next
    /// key is strictly less than `key`. Returns the last node visited per
    /// level; levels above the active one are left pointing at the header.
    fn find_predecessors(&self, key: &K) -> UpdateVector {
        let mut update: UpdateVector = [None; MAX_LEVEL_LIMIT + 1];
        let mut curr = None;
        for level in (0..=self.level).rev() {
            while let Some(next) = self.next_of(curr, level) {
                if self.node(next).key < *key {
                    curr = Some(next);
                } else {
                    break;
                }
            }
            update[level] = curr;
        }
        update
    }

    /// Returns true if at least one copy of `key` is stored.
    pub fn search(&self, key: &K) -> bool {
        let mut curr = None;
        for level in (0..=self.level).rev() {
            while let Some(next) = self.next_of(curr, level) {
                if self.node(next).key < *key {
                    curr = Some(next);
                } else {
                    break;
                }
            }
        }
        self.next_of(curr, 0)
            .is_some_and(|idx| self.node(idx).key == *key)
    }

    /// Alias of [`search`](Self::search).
    pub fn contains(&self, key: &K) -> bool {
        self.search(key)
    }

    /// Removes one copy of `key`, the earliest inserted among equal keys.
    ///
    /// Returns false if `key` is not stored.
    pub fn delete(&mut self, key: &K) -> bool {
        let update = self.find_predecessors(key);
        let target = match self.next_of(update[0], 0) {
            Some(idx) if self.node(idx).key == *key => idx,
            _ => return false,
        };

        for level in 0..=self.level {
            if self.next_of(update[level], level) != Some(target) {
                break;
            }
            let next = self.node(target).forward[level];
            self.set_next(update[level], level, next);
        }

        while self.level > 0 && self.head[self.level].is_none() {
            self.level -= 1;
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(level = self.level, "skip list delete");

        self.release_node(target);
        self.len -= 1;
        true
    }

    /// Verifies the structural invariants: every level up to the active one
    /// is sorted and only links nodes tall enough for it, no level above the
    /// active one is linked, and level 0 holds exactly `len` nodes.
    pub fn check_invariants(&self) -> bool {
        if self.level > 0 && self.head[self.level].is_none() {
            return false;
        }
        for level in 0..=self.max_level {
            if level > self.level {
                if self.head[level].is_some() {
                    return false;
                }
                continue;
            }

            let mut count = 0;
            let mut prev: Option<&K> = None;
            let mut curr = self.head[level];
            while let Some(idx) = curr {
                let Slot::Occupied(node) = &self.nodes[idx] else {
                    return false;
                };
                if node.forward.len() <= level || prev.is_some_and(|p| *p > node.key) {
                    return false;
                }
                count += 1;
                // A cycle would exceed the arena size.
                if count > self.nodes.len() {
                    return false;
                }
                prev = Some(&node.key);
                curr = node.forward[level];
            }

            if level == 0 && count != self.len {
                return false;
            }
        }
        true
    }
}

impl<K: Ord, R: Rng> SkipList<K, R> {
    /// Draws a node height: starting at 0, each successful Bernoulli trial
    /// with the promotion probability adds one level, up to `max_level`.
    pub fn sample_height(&mut self) -> usize {
        let mut level = 0;
        while level < self.max_level && self.rng.gen_bool(self.promotion_probability) {
            level += 1;
        }
        level
    }

    /// Inserts `key`. Duplicates are kept as distinct entries, each placed
    /// after the equal keys already stored.
    pub fn insert(&mut self, key: K) {
        let update = self.find_predecessors(&key);

        let height = self.sample_height();
        if height > self.level {
            // Predecessors on the newly active levels are already the header.
            #[cfg(feature = "tracing")]
            tracing::trace!(from = self.level, to = height, "skip list level raised");
            self.level = height;
        }

        let idx = self.alloc_node(NodeData {
            key,
            forward: vec![None; height + 1],
        });

        for level in 0..=height {
            let next = self.next_of(update[level], level);
            self.node_mut(idx).forward[level] = next;
            self.set_next(update[level], level, Some(idx));
        }

        self.len += 1;
    }
}

impl<K> Default for SkipList<K, StdRng> {
    fn default() -> Self {
        let config = SkipListConfig::default();
        Self::from_parts(
            config.max_level,
            config.promotion_probability,
            StdRng::from_entropy(),
        )
    }
}

impl<K: Ord, R: Rng> Extend<K> for SkipList<K, R> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for SkipList<K, StdRng> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut list = Self::default();
        list.extend(iter);
        list
    }
}

impl<'a, K, R> IntoIterator for &'a SkipList<K, R> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: fmt::Debug, R> fmt::Debug for SkipList<K, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
