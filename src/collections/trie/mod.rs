//! Character prefix tree (trie).
//!
//! Stores a set of strings, one node per character of each stored word.
//! Nodes live in a flat arena addressed by index, so dropping or cloning a
//! tree never recurses along a word. Deletion is logical: it clears a node's
//! terminal flag and never prunes nodes, so words sharing a prefix stay
//! structurally intact.

mod iter;
mod node;
mod set;

pub use iter::WordsWithPrefix;
pub use set::PrefixTree;
