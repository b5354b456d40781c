//! Node Hierarchy
//!
//! The arena-backed tree of climbing locations, routes and ascents.
//!
//! # Architecture
//!
//! - **Arena**: every node lives in `Tree::nodes`; [`NodeKey`] is its index
//! - **Edges**: a node's `children` list is the owning edge, `parent` the
//!   back-reference; [`Tree::set_parent`] is the only place that rewires them
//! - **Detach, don't free**: deleting a subtree unlinks it from the root but
//!   keeps the nodes in the arena, so they can be re-attached later
//!
//! # Examples
//!
//! ```rust
//! use rocdoc_core::models::{Location, Route};
//! use rocdoc_core::tree::Tree;
//!
//! let mut tree = Tree::new();
//! let crag = tree.add_location("Frankenjura", Some(tree.root()), Location::new())?;
//! let route = tree.add_route("Action Directe", Some(crag), Route::new().with_grade("9a"))?;
//!
//! assert_eq!(tree.depth(route), 2);
//! assert_eq!(tree.find_route("Action Directe")?, route);
//! # Ok::<(), rocdoc_core::tree::TreeError>(())
//! ```

mod error;
mod traversal;

pub use error::TreeError;
pub use traversal::{Ancestors, PreOrder};

use std::collections::HashMap;
use std::ops::Index;

use crate::models::{Ascent, Location, Node, NodeKey, NodeKind, NodeType, Route, ROOT_NAME};

/// Indentation per depth level in [`Tree::outline`]
const OUTLINE_INDENT: &str = "   ";

/// Hierarchy of nodes rooted at a generic container node.
///
/// Keys handed out by one tree must not be used with another; indexing with a
/// foreign key panics like any out-of-bounds slice access.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
    root: NodeKey,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<NodeKey> for Tree {
    type Output = Node;

    fn index(&self, key: NodeKey) -> &Node {
        &self.nodes[key.0]
    }
}

impl Tree {
    /// Create a tree holding only the container root named `"root"`
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(ROOT_NAME, NodeKind::Node)],
            root: NodeKey(0),
        }
    }

    /// Empty arena; the first inserted node becomes the root.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            root: NodeKey(0),
        }
    }

    /// Append a detached node to the arena
    pub(crate) fn insert(&mut self, node: Node) -> NodeKey {
        let key = NodeKey(self.nodes.len());
        self.nodes.push(node);
        key
    }

    pub(crate) fn node_mut(&mut self, key: NodeKey) -> &mut Node {
        &mut self.nodes[key.0]
    }

    pub fn root(&self) -> NodeKey {
        self.root
    }

    /// Look up a node, `None` if the key is not from this tree
    pub fn get(&self, key: NodeKey) -> Option<&Node> {
        self.nodes.get(key.0)
    }

    /// Number of nodes reachable from the root (detached nodes excluded)
    pub fn node_count(&self) -> usize {
        self.descendants(self.root).count()
    }

    /// Per-variant counts over the nodes reachable from the root
    pub fn count_by_type(&self) -> HashMap<NodeType, usize> {
        let mut counts = HashMap::new();
        for key in self.descendants(self.root) {
            *counts.entry(self[key].node_type()).or_insert(0) += 1;
        }
        counts
    }

    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Create a node and, if `parent` is given, link it immediately.
    ///
    /// # Errors
    ///
    /// Propagates the checks of [`Tree::set_parent`].
    pub fn create_node(
        &mut self,
        name: impl Into<String>,
        kind: impl Into<NodeKind>,
        parent: Option<NodeKey>,
    ) -> Result<NodeKey, TreeError> {
        let key = self.insert(Node::new(name, kind.into()));
        if parent.is_some() {
            self.set_parent(key, parent)?;
        }
        Ok(key)
    }

    /// Create a Location below `parent`.
    ///
    /// # Errors
    ///
    /// `TreeError::MissingParent` if `parent` is `None`; no node is created.
    pub fn add_location(
        &mut self,
        name: impl Into<String>,
        parent: Option<NodeKey>,
        location: Location,
    ) -> Result<NodeKey, TreeError> {
        let name = name.into();
        let parent = parent.ok_or_else(|| TreeError::missing_parent(name.as_str()))?;
        self.create_node(name, location, Some(parent))
    }

    /// Create a Route below `parent`.
    ///
    /// # Errors
    ///
    /// `TreeError::MissingParent` if `parent` is `None`; no node is created.
    pub fn add_route(
        &mut self,
        name: impl Into<String>,
        parent: Option<NodeKey>,
        route: Route,
    ) -> Result<NodeKey, TreeError> {
        let name = name.into();
        let parent = parent.ok_or_else(|| TreeError::missing_parent(name.as_str()))?;
        self.create_node(name, route, Some(parent))
    }

    /// Log an Ascent below the Route at `route`, with a generated name.
    ///
    /// # Errors
    ///
    /// `TreeError::TypeMismatch` if `route` is not a Route node.
    pub fn add_ascent(&mut self, route: NodeKey, ascent: Ascent) -> Result<NodeKey, TreeError> {
        self.expect_type(route, NodeType::Route)?;
        self.create_node(Ascent::generate_name(), ascent, Some(route))
    }

    /// Append a comment to the Route at `route`.
    pub fn add_comment(
        &mut self,
        route: NodeKey,
        comment: impl Into<String>,
    ) -> Result<(), TreeError> {
        self.route_mut(route)?.add_comment(comment);
        Ok(())
    }

    /// Append a beta to the Route at `route`.
    pub fn add_beta(&mut self, route: NodeKey, beta: impl Into<String>) -> Result<(), TreeError> {
        self.route_mut(route)?.add_beta(beta);
        Ok(())
    }

    fn route_mut(&mut self, key: NodeKey) -> Result<&mut Route, TreeError> {
        let node = &mut self.nodes[key.0];
        match &mut node.kind {
            NodeKind::Route(route) => Ok(route),
            other => Err(TreeError::type_mismatch(
                node.name.as_str(),
                NodeType::Route,
                other.node_type(),
            )),
        }
    }

    fn expect_type(&self, key: NodeKey, expected: NodeType) -> Result<(), TreeError> {
        let node = &self[key];
        if node.node_type() == expected {
            Ok(())
        } else {
            Err(TreeError::type_mismatch(
                node.name(),
                expected,
                node.node_type(),
            ))
        }
    }

    // ------------------------------------------------------------------
    // Structure
    // ------------------------------------------------------------------

    /// Move `node` under `new_parent`, or detach it with `None`.
    ///
    /// The node is removed from its old parent's children and appended to the
    /// new parent's children, so both directions of the edge stay consistent.
    ///
    /// # Errors
    ///
    /// - `TreeError::SelfParent` if `new_parent` is `node`
    /// - `TreeError::CircularReference` if `node` is already a child of
    ///   `new_parent`, or is an ancestor of it
    ///
    /// Nothing is mutated when an error is returned.
    pub fn set_parent(
        &mut self,
        node: NodeKey,
        new_parent: Option<NodeKey>,
    ) -> Result<(), TreeError> {
        if let Some(parent) = new_parent {
            if parent == node {
                return Err(TreeError::self_parent(self[node].id()));
            }
            if self[parent].children().contains(&node) || self.is_ancestor(node, parent) {
                return Err(TreeError::circular_reference(
                    self[node].id(),
                    self[parent].id(),
                ));
            }
        }

        if let Some(old_parent) = self.nodes[node.0].parent.take() {
            self.nodes[old_parent.0]
                .children
                .retain(|&child| child != node);
        }

        self.nodes[node.0].parent = new_parent;

        if let Some(parent) = new_parent {
            let children = &mut self.nodes[parent.0].children;
            if !children.contains(&node) {
                children.push(node);
            }
            tracing::debug!(
                "Linked '{}' under '{}'",
                self[node].name(),
                self[parent].name()
            );
        } else {
            tracing::debug!("Detached '{}'", self[node].name());
        }

        Ok(())
    }

    /// Whether `ancestor` is `key` itself or lies on its parent chain
    pub fn is_ancestor(&self, ancestor: NodeKey, key: NodeKey) -> bool {
        key == ancestor || self.ancestors(key).any(|k| k == ancestor)
    }

    /// Number of ancestors above `key`; the root has depth 0
    pub fn depth(&self, key: NodeKey) -> usize {
        self.ancestors(key).count()
    }

    pub fn parent(&self, key: NodeKey) -> Option<NodeKey> {
        self[key].parent()
    }

    pub fn children(&self, key: NodeKey) -> &[NodeKey] {
        self[key].children()
    }

    pub fn ancestors(&self, key: NodeKey) -> Ancestors<'_> {
        Ancestors::new(self, key)
    }

    /// Pre-order walk of the subtree rooted at `start`, `start` included
    pub fn descendants(&self, start: NodeKey) -> PreOrder<'_> {
        PreOrder::new(self, start)
    }

    /// Detach `key` from its parent and clear every link inside its subtree.
    ///
    /// The nodes remain in the arena; a deleted node can be re-attached with
    /// [`Tree::set_parent`].
    pub fn delete_subtree(&mut self, key: NodeKey) {
        if let Some(parent) = self.nodes[key.0].parent.take() {
            self.nodes[parent.0].children.retain(|&child| child != key);
        }
        tracing::debug!("Deleting subtree at '{}'", self[key].name());
        self.clear_links(key);
    }

    fn clear_links(&mut self, key: NodeKey) {
        let children = std::mem::take(&mut self.nodes[key.0].children);
        for child in children {
            self.nodes[child.0].parent = None;
            self.clear_links(child);
        }
    }

    /// Flip the UI expansion flag, returning the new state
    pub fn toggle_expanded(&mut self, key: NodeKey) -> bool {
        let node = self.node_mut(key);
        node.is_expanded = !node.is_expanded;
        node.is_expanded
    }

    pub fn rename(&mut self, key: NodeKey, name: impl Into<String>) {
        self.node_mut(key).name = name.into();
    }

    // ------------------------------------------------------------------
    // Lookup
    // ------------------------------------------------------------------

    /// First node named `name` in pre-order from the root
    pub fn find(&self, name: &str) -> Option<NodeKey> {
        self.find_from(self.root, |node| node.name() == name)
    }

    /// First node in pre-order from `start` matching `predicate`
    pub fn find_from<P>(&self, start: NodeKey, predicate: P) -> Option<NodeKey>
    where
        P: Fn(&Node) -> bool,
    {
        self.descendants(start).find(|&key| predicate(&self[key]))
    }

    /// Node carrying the given persisted id
    pub fn find_by_id(&self, id: &str) -> Option<NodeKey> {
        self.find_from(self.root, |node| node.id() == id)
    }

    /// Find a Route by name.
    ///
    /// # Errors
    ///
    /// `TreeError::NotFound` if no node has that name,
    /// `TreeError::TypeMismatch` if the first match is not a Route.
    pub fn find_route(&self, name: &str) -> Result<NodeKey, TreeError> {
        self.find_typed(name, NodeType::Route)
    }

    /// Find a Location by name. Errors as in [`Tree::find_route`].
    pub fn find_location(&self, name: &str) -> Result<NodeKey, TreeError> {
        self.find_typed(name, NodeType::Location)
    }

    fn find_typed(&self, name: &str, expected: NodeType) -> Result<NodeKey, TreeError> {
        let key = self.find(name).ok_or_else(|| TreeError::not_found(name))?;
        self.expect_type(key, expected)?;
        Ok(key)
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Indented outline of the whole tree, one line per node, root included
    pub fn outline(&self) -> String {
        let mut out = String::new();
        for key in self.descendants(self.root) {
            out.push_str(&OUTLINE_INDENT.repeat(self.depth(key)));
            out.push_str(self[key].name());
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tree_test;
