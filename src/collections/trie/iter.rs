use std::collections::btree_map;

use super::node::{Node, NodeId};

/// Iterator over the stored words below a prefix node.
///
/// Words are produced depth-first, a node's own word before its children,
/// children in ascending character order. The resulting order is
/// lexicographic by `char`.
pub struct WordsWithPrefix<'a> {
    nodes: &'a [Node],
    // One child iterator per node on the current path; the bottom entry
    // belongs to the prefix node itself.
    stack: Vec<btree_map::Iter<'a, char, NodeId>>,
    // Current constructed word
    word_buf: String,
    // The prefix node's own word is pending
    pending_prefix: bool,
}

impl<'a> WordsWithPrefix<'a> {
    pub(crate) fn new(nodes: &'a [Node], start: Option<NodeId>, prefix: &str) -> Self {
        match start {
            Some(idx) => Self {
                nodes,
                stack: vec![nodes[idx].children.iter()],
                word_buf: prefix.to_owned(),
                pending_prefix: nodes[idx].terminal,
            },
            None => Self {
                nodes,
                stack: Vec::new(),
                word_buf: String::new(),
                pending_prefix: false,
            },
        }
    }
}

impl Iterator for WordsWithPrefix<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pending_prefix {
            self.pending_prefix = false;
            return Some(self.word_buf.clone());
        }

        let nodes = self.nodes;
        loop {
            let top = self.stack.last_mut()?;
            if let Some((&ch, &child)) = top.next() {
                // Descend to child
                let node = &nodes[child];
                self.word_buf.push(ch);
                self.stack.push(node.children.iter());
                if node.terminal {
                    return Some(self.word_buf.clone());
                }
            } else {
                // Done with this node. Only nodes above the prefix node
                // contributed a character to the buffer.
                self.stack.pop();
                if !self.stack.is_empty() {
                    self.word_buf.pop();
                }
            }
        }
    }
}
