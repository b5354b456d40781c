//! Tree traversal iterators

use crate::models::NodeKey;
use crate::tree::Tree;

/// Depth-first pre-order walk: a node, then each child subtree left to right.
///
/// Created by [`Tree::descendants`]. The starting node is yielded first.
pub struct PreOrder<'a> {
    tree: &'a Tree,
    stack: Vec<NodeKey>,
}

impl<'a> PreOrder<'a> {
    pub(crate) fn new(tree: &'a Tree, start: NodeKey) -> Self {
        Self {
            tree,
            stack: vec![start],
        }
    }
}

impl Iterator for PreOrder<'_> {
    type Item = NodeKey;

    fn next(&mut self) -> Option<NodeKey> {
        let key = self.stack.pop()?;
        // Reversed so the leftmost child is popped first
        self.stack.extend(self.tree[key].children().iter().rev().copied());
        Some(key)
    }
}

/// Walk up the parent chain, excluding the starting node.
///
/// Created by [`Tree::ancestors`].
pub struct Ancestors<'a> {
    tree: &'a Tree,
    next: Option<NodeKey>,
}

impl<'a> Ancestors<'a> {
    pub(crate) fn new(tree: &'a Tree, start: NodeKey) -> Self {
        Self {
            tree,
            next: tree[start].parent(),
        }
    }
}

impl Iterator for Ancestors<'_> {
    type Item = NodeKey;

    fn next(&mut self) -> Option<NodeKey> {
        let key = self.next?;
        self.next = self.tree[key].parent();
        Some(key)
    }
}
