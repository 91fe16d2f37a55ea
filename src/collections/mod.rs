//! Indexed collections.
//!
//! Collections are organized by data structure type:
//! - `trie`: Character prefix tree over a set of strings
//! - `fenwick_tree`: Binary indexed tree for prefix and range sums
//! - `skip_list`: Probabilistic ordered multiset

pub mod fenwick_tree;
pub mod skip_list;
pub mod trie;

// Re-export commonly used types from submodules
pub use fenwick_tree::FenwickTree;
pub use skip_list::{SkipList, SkipListConfig};
pub use trie::PrefixTree;
