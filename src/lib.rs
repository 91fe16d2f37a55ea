//! # `triad` - Indexed In-Memory Data Structures
//!
//! Three classic indexed structures, each a self-contained engine with no
//! dependency on the others:
//!
//! - [`PrefixTree`]: a character trie storing a set of strings, with exact
//!   search, prefix search, prefix enumeration and logical deletion.
//! - [`FenwickTree`]: a binary indexed tree over a fixed-size signed sequence,
//!   with point updates and `O(log n)` prefix and range sums.
//! - [`SkipList`]: an ordered multiset with randomized node heights, giving
//!   expected `O(log n)` insert, search and delete.
//!
//! ## Error Model
//!
//! "Not found" is never an error: searches and deletes report `bool`, and
//! enumeration reports an empty result. Contract violations (an index outside
//! a Fenwick tree, an invalid skip-list configuration) are rejected
//! immediately with an [`Error`].
//!
//! ## Concurrency
//!
//! Every structure is single-threaded and synchronous. None of them use
//! interior mutability, so they are `Send + Sync` whenever their contents are;
//! callers needing shared mutation wrap an instance in their own lock.
//!
//! ## Example
//!
//! ```rust
//! use triad::{FenwickTree, PrefixTree, SkipList};
//!
//! let mut trie = PrefixTree::new();
//! trie.insert("hello");
//! trie.insert("help");
//! assert!(trie.starts_with("hel"));
//! assert_eq!(trie.get_all_words_with_prefix("he"), vec!["hello", "help"]);
//!
//! let mut sums = FenwickTree::<i64>::new(6);
//! sums.build_from_array(&[1, 3, 5, 7, 9, 11])?;
//! assert_eq!(sums.range_query(1, 3)?, 15);
//!
//! let mut list = SkipList::with_seed(16, 0.5, 7)?;
//! list.insert(12);
//! assert!(list.search(&12));
//! # Ok::<(), triad::Error>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod error;
pub mod workload;

pub use collections::fenwick_tree::FenwickTree;
pub use collections::skip_list::{SkipList, SkipListConfig};
pub use collections::trie::PrefixTree;
pub use error::{Error, Result};
pub use workload::{WorkloadConfig, WorkloadGenerator};
