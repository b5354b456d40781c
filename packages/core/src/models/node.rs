//! Node Data Structures
//!
//! This module defines the `Node` struct stored in the hierarchy arena and the
//! closed set of node variants Rocdoc knows about.
//!
//! # Architecture
//!
//! - **Arena Storage**: Nodes live in a `Vec` owned by [`crate::tree::Tree`]
//! - **Key Edges**: `children` (owning edge) and `parent` (back-reference) hold
//!   [`NodeKey`] handles, never references
//! - **Closed Variants**: [`NodeKind`] is a tagged union; the persisted
//!   `node_type` tag maps one-to-one onto [`NodeType`]
//!
//! # Examples
//!
//! ```rust
//! use rocdoc_core::models::{NodeKind, NodeType, Route};
//!
//! let kind = NodeKind::Route(Route::new().with_grade("7a"));
//! assert_eq!(kind.node_type(), NodeType::Route);
//! assert_eq!(kind.node_type().to_string(), "Route");
//! ```

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use crate::models::{Ascent, Location, Route};

/// Reserved name of the container node at the top of every tree.
///
/// The UI never renders a node carrying this name.
pub const ROOT_NAME: &str = "root";

/// Handle to a node inside a [`crate::tree::Tree`].
///
/// Keys are only meaningful for the tree that issued them and stay valid for
/// the lifetime of that tree, including after the node is detached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey(pub(crate) usize);

impl NodeKey {
    /// Position of the node in the arena
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Variant tag persisted as `node_type`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    /// Generic container node (only expected for the root)
    Node,
    Location,
    Route,
    Ascent,
}

impl NodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Node => "Node",
            Self::Location => "Location",
            Self::Route => "Route",
            Self::Ascent => "Ascent",
        }
    }
}

impl FromStr for NodeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Node" => Ok(Self::Node),
            "Location" => Ok(Self::Location),
            "Route" => Ok(Self::Route),
            "Ascent" => Ok(Self::Ascent),
            _ => Err(format!("Invalid node type: {}", s)),
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Variant payload of a node
#[derive(Debug, Clone, PartialEq, Default)]
pub enum NodeKind {
    /// Generic node without extra fields
    #[default]
    Node,
    Location(Location),
    Route(Route),
    Ascent(Ascent),
}

impl NodeKind {
    /// Tag of this variant
    pub fn node_type(&self) -> NodeType {
        match self {
            Self::Node => NodeType::Node,
            Self::Location(_) => NodeType::Location,
            Self::Route(_) => NodeType::Route,
            Self::Ascent(_) => NodeType::Ascent,
        }
    }

    pub fn as_location(&self) -> Option<&Location> {
        match self {
            Self::Location(location) => Some(location),
            _ => None,
        }
    }

    pub fn as_route(&self) -> Option<&Route> {
        match self {
            Self::Route(route) => Some(route),
            _ => None,
        }
    }

    pub fn as_route_mut(&mut self) -> Option<&mut Route> {
        match self {
            Self::Route(route) => Some(route),
            _ => None,
        }
    }

    pub fn as_ascent(&self) -> Option<&Ascent> {
        match self {
            Self::Ascent(ascent) => Some(ascent),
            _ => None,
        }
    }
}

impl From<Location> for NodeKind {
    fn from(location: Location) -> Self {
        Self::Location(location)
    }
}

impl From<Route> for NodeKind {
    fn from(route: Route) -> Self {
        Self::Route(route)
    }
}

impl From<Ascent> for NodeKind {
    fn from(ascent: Ascent) -> Self {
        Self::Ascent(ascent)
    }
}

/// A single entry in the hierarchy.
///
/// # Fields
///
/// - `id`: Unique identifier (UUID v4), fixed at construction
/// - `name`: Display label; [`ROOT_NAME`] marks the container root
/// - `kind`: Variant payload (generic, Location, Route, Ascent)
/// - `parent`: Back-reference to the owning node, if attached
/// - `children`: Owned children in display order
/// - `is_expanded`: UI state flag, `true` by default
///
/// Structural fields are only mutated through [`crate::tree::Tree`], which
/// keeps both directions of every edge consistent.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) kind: NodeKind,
    pub(crate) parent: Option<NodeKey>,
    pub(crate) children: Vec<NodeKey>,
    pub(crate) is_expanded: bool,
}

impl Node {
    /// Create a detached node with a freshly generated id
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            kind,
            parent: None,
            children: Vec::new(),
            is_expanded: true,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn node_type(&self) -> NodeType {
        self.kind.node_type()
    }

    pub fn parent(&self) -> Option<NodeKey> {
        self.parent
    }

    pub fn children(&self) -> &[NodeKey] {
        &self.children
    }

    pub fn is_expanded(&self) -> bool {
        self.is_expanded
    }

    /// Whether this is the container root that the UI skips
    pub fn is_root_container(&self) -> bool {
        self.name == ROOT_NAME
    }

    /// Overwrite the generated id with a persisted one
    pub(crate) fn assign_id(&mut self, id: String) {
        self.id = id;
    }
}
