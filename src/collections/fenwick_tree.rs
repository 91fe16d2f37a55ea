//! `FenwickTree` - a Binary Indexed Tree over a fixed-size signed sequence.
//!
//! A Fenwick Tree provides efficient methods for calculation and manipulation
//! of the prefix sums of a table of values.
//!
//! Time Complexity:
//! - Update: O(log n)
//! - Prefix Sum: O(log n)
//! - Range Sum: O(log n)
//! - Build from array: O(n log n)
//!
//! Space Complexity: O(n)
//!
//! Indices are 0-based on the public surface and validated on every call;
//! an index outside `[0, len)` is rejected with [`Error::OutOfRange`] rather
//! than silently ignored.

use crate::error::{Error, Result};
use core::ops::{AddAssign, Sub};
use num_traits::Zero;

/// Isolates the lowest set bit of `i`.
#[inline]
fn lowbit(i: usize) -> usize {
    i & i.wrapping_neg()
}

/// A Fenwick Tree over `len` positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenwickTree<T = i64> {
    /// The tree is 1-indexed internally for easier bit manipulation.
    /// Index 0 is unused (dummy).
    tree: Vec<T>,
}

impl<T> FenwickTree<T>
where
    T: Copy + Zero + AddAssign + Sub<Output = T>,
{
    /// Creates a tree of `size` positions, all zero.
    ///
    /// # Panics
    /// Panics if `size == usize::MAX`, since the dummy cell cannot be
    /// addressed. Use [`try_new`](Self::try_new) to get an error instead.
    pub fn new(size: usize) -> Self {
        match Self::try_new(size) {
            Ok(tree) => tree,
            Err(err) => panic!("{err}"),
        }
    }

    /// Creates a tree of `size` positions, all zero.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfiguration`] if `size + 1` overflows.
    pub fn try_new(size: usize) -> Result<Self> {
        let cells = size
            .checked_add(1)
            .ok_or(Error::InvalidConfiguration("fenwick tree size overflows usize"))?;
        #[cfg(feature = "tracing")]
        tracing::debug!(size, "allocating fenwick tree");
        Ok(Self {
            tree: vec![T::zero(); cells],
        })
    }

    /// Creates a tree sized to `values` and builds it from them.
    pub fn from_slice(values: &[T]) -> Self {
        let mut tree = Self::new(values.len());
        for (i, &val) in values.iter().enumerate() {
            tree.add_unchecked(i + 1, val);
        }
        tree
    }

    /// Returns the number of positions (excluding the dummy cell).
    pub fn len(&self) -> usize {
        self.tree.len() - 1
    }

    /// Alias of [`len`](Self::len).
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Returns true if the tree has no positions.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_index(&self, index: usize) -> Result<()> {
        let len = self.len();
        if index < len {
            Ok(())
        } else {
            Err(Error::OutOfRange { index, len })
        }
    }

    /// Walks upward from the 1-based position `idx`, adding `delta` to every
    /// cell that covers it.
    fn add_unchecked(&mut self, mut idx: usize, delta: T) {
        let n = self.len();
        while idx <= n {
            self.tree[idx] += delta;
            idx += lowbit(idx);
        }
    }

    /// Adds `delta` to the element at `index` (0-based).
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] if `index >= len`.
    pub fn update(&mut self, index: usize, delta: T) -> Result<()> {
        self.check_index(index)?;
        self.add_unchecked(index + 1, delta);
        Ok(())
    }

    /// Computes the prefix sum over `[0, index]` (inclusive, 0-based).
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] if `index >= len`.
    pub fn query(&self, index: usize) -> Result<T> {
        self.check_index(index)?;
        let mut sum = T::zero();
        let mut idx = index + 1;
        while idx > 0 {
            sum += self.tree[idx];
            idx -= lowbit(idx);
        }
        Ok(sum)
    }

    /// Computes the sum over `[left, right]`, both bounds inclusive.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRange`] if `left > right`, and
    /// [`Error::OutOfRange`] if `right >= len`.
    pub fn range_query(&self, left: usize, right: usize) -> Result<T> {
        if left > right {
            return Err(Error::InvalidRange { left, right });
        }
        let sum_right = self.query(right)?;
        if left == 0 {
            Ok(sum_right)
        } else {
            Ok(sum_right - self.query(left - 1)?)
        }
    }

    /// Returns the current value at a single position.
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] if `index >= len`.
    pub fn point_value(&self, index: usize) -> Result<T> {
        self.range_query(index, index)
    }

    /// Returns the sum of the whole sequence, zero when empty.
    pub fn total(&self) -> T {
        match self.len() {
            0 => T::zero(),
            n => self.query(n - 1).unwrap_or_else(|_| T::zero()),
        }
    }

    /// Applies `update(i, values[i])` for every position in order.
    ///
    /// Values accumulate onto the current contents; the tree is not reset.
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] if `values` is longer than the tree,
    /// before any cell is modified.
    pub fn build_from_array(&mut self, values: &[T]) -> Result<()> {
        let len = self.len();
        if values.len() > len {
            return Err(Error::OutOfRange {
                index: values.len(),
                len,
            });
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(count = values.len(), size = len, "building fenwick tree");
        for (i, &val) in values.iter().enumerate() {
            self.add_unchecked(i + 1, val);
        }
        Ok(())
    }

    /// Resets every position to zero, keeping the size.
    pub fn clear(&mut self) {
        self.tree.fill(T::zero());
    }
}

impl<T> Default for FenwickTree<T>
where
    T: Copy + Zero + AddAssign + Sub<Output = T>,
{
    fn default() -> Self {
        Self::new(0)
    }
}
