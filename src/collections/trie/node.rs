use std::collections::BTreeMap;

/// Index of a node in the tree's arena.
pub(crate) type NodeId = usize;

/// The root always occupies the first arena slot.
pub(crate) const ROOT: NodeId = 0;

/// A node in the prefix tree.
///
/// Each node contains:
/// - Children keyed by the next character, stored as arena indices and kept
///   in ascending character order.
/// - A terminal flag, set iff the path from the root to this node spells a
///   stored word.
#[derive(Debug, Clone, Default)]
pub(crate) struct Node {
    pub(crate) children: BTreeMap<char, NodeId>,
    pub(crate) terminal: bool,
}

impl Node {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Finds the child for a given character.
    pub(crate) fn get_child(&self, ch: char) -> Option<NodeId> {
        self.children.get(&ch).copied()
    }
}
