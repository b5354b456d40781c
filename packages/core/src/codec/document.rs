//! Persisted document shape
//!
//! One `NodeDocument` per node, nested through `children`:
//!
//! ```json
//! {
//!   "name": "Crimpy",
//!   "id": "5d0c...",
//!   "parent_id": "9a1e...",
//!   "node_type": "Route",
//!   "betas": [],
//!   "comments": [],
//!   "grade": "7a",
//!   "type": null,
//!   "children": []
//! }
//! ```
//!
//! Variant-specific keys sit next to the structural ones and are collected
//! into `fields` on the way in.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key whose values must be ISO calendar dates on decode
pub const DATE_KEY: &str = "date";

/// Wire format of the calendar dates
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Deepest level below the top node that a document may hold.
///
/// Every level nests two JSON values (the node object and its `children`
/// array); this keeps the deepest leaf, payload included, under the 128-level
/// recursion limit of `serde_json` readers.
pub const MAX_DOCUMENT_DEPTH: usize = 60;

/// A node and its subtree as stored in the JSON document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDocument {
    pub name: String,

    pub id: String,

    /// Informational; the nesting decides the real parent on decode
    #[serde(default)]
    pub parent_id: Option<String>,

    /// Variant tag (`Node`, `Location`, `Route`, `Ascent`)
    pub node_type: String,

    /// Variant-specific fields
    #[serde(flatten)]
    pub fields: Map<String, Value>,

    #[serde(default)]
    pub children: Vec<NodeDocument>,
}

impl NodeDocument {
    /// Number of nodes in this subtree, this one included
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(NodeDocument::count).sum::<usize>()
    }
}
