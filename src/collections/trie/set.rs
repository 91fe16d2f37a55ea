use core::fmt;

use super::iter::WordsWithPrefix;
use super::node::{Node, NodeId, ROOT};

/// A prefix tree storing a set of strings.
///
/// Time Complexity (m = length of the word in characters):
/// - Insert: O(m log σ)
/// - Search / Starts With / Delete: O(m log σ)
/// - Prefix enumeration: O(p + size of the subtree below the prefix)
///
/// where σ is the number of distinct characters under a node.
#[derive(Clone)]
pub struct PrefixTree {
    /// Arena of nodes; the root sits at index 0 and represents the empty
    /// prefix.
    nodes: Vec<Node>,
    /// Number of terminal nodes.
    word_count: usize,
}

impl PrefixTree {
    /// Creates a new empty prefix tree.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new()],
            word_count: 0,
        }
    }

    /// Returns the number of stored words.
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Alias of [`len`](Self::len).
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Returns true if no word is stored.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Returns the number of allocated nodes, root included.
    ///
    /// Deleting words never lowers this count.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Drops every node and stored word.
    pub fn clear(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            words = self.word_count,
            nodes = self.nodes.len(),
            "clearing prefix tree"
        );
        self.nodes.truncate(1);
        self.nodes[ROOT] = Node::new();
        self.word_count = 0;
    }

    /// Walks the path spelled by `prefix`, if it exists.
    fn find_node(&self, prefix: &str) -> Option<NodeId> {
        prefix
            .chars()
            .try_fold(ROOT, |idx, ch| self.nodes[idx].get_child(ch))
    }

    /// Inserts a word, creating nodes for any missing path segment.
    ///
    /// Returns whether the word was newly added. The empty word marks the
    /// root itself.
    pub fn insert(&mut self, word: &str) -> bool {
        let mut curr = ROOT;
        for ch in word.chars() {
            curr = match self.nodes[curr].get_child(ch) {
                Some(next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(Node::new());
                    self.nodes[curr].children.insert(ch, next);
                    next
                }
            };
        }

        let node = &mut self.nodes[curr];
        if node.terminal {
            false
        } else {
            node.terminal = true;
            self.word_count += 1;
            true
        }
    }

    /// Returns true iff `word` was inserted and not deleted since.
    pub fn search(&self, word: &str) -> bool {
        self.find_node(word)
            .is_some_and(|idx| self.nodes[idx].is_terminal())
    }

    /// Alias of [`search`](Self::search).
    pub fn contains(&self, word: &str) -> bool {
        self.search(word)
    }

    /// Returns true if any path spells `prefix`, whether or not a stored word
    /// ends there. The empty prefix always matches.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.find_node(prefix).is_some()
    }

    /// Removes `word` from the set.
    ///
    /// Returns false if the path is absent or does not end at a stored word.
    /// Nodes are kept so that other words sharing the path stay reachable.
    pub fn delete(&mut self, word: &str) -> bool {
        match self.find_node(word) {
            Some(idx) if self.nodes[idx].terminal => {
                self.nodes[idx].terminal = false;
                self.word_count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Lazily yields every stored word that starts with `prefix`, in
    /// lexicographic order. Yields nothing if no path spells `prefix`.
    pub fn words_with_prefix<'a>(&'a self, prefix: &str) -> WordsWithPrefix<'a> {
        WordsWithPrefix::new(&self.nodes, self.find_node(prefix), prefix)
    }

    /// Collects every stored word that starts with `prefix`, in
    /// lexicographic order.
    pub fn get_all_words_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.words_with_prefix(prefix).collect()
    }

    /// Iterates over every stored word in lexicographic order.
    pub fn iter(&self) -> WordsWithPrefix<'_> {
        self.words_with_prefix("")
    }
}

impl Default for PrefixTree {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> Extend<S> for PrefixTree {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for PrefixTree {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

// Two trees are equal when they store the same words, whatever the
// insertion order or the nodes left behind by deletions.
impl PartialEq for PrefixTree {
    fn eq(&self, other: &Self) -> bool {
        self.word_count == other.word_count && self.iter().eq(other.iter())
    }
}

impl Eq for PrefixTree {}

impl fmt::Debug for PrefixTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a PrefixTree {
    type Item = String;
    type IntoIter = WordsWithPrefix<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
