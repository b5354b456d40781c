//! Tree → document

use serde::Serialize;
use serde_json::{Map, Value};

use crate::codec::document::MAX_DOCUMENT_DEPTH;
use crate::codec::{CodecError, NodeDocument};
use crate::models::{NodeKey, NodeKind};
use crate::tree::Tree;

/// Encode the whole tree, starting at its root
pub fn encode(tree: &Tree) -> Result<NodeDocument, CodecError> {
    encode_subtree(tree, tree.root())
}

/// Encode the subtree rooted at `key`.
///
/// Children are emitted in children-list order; `parent_id` is the id of the
/// node's current parent, or `null` for the top of a detached subtree.
///
/// # Errors
///
/// `CodecError::TooDeep` if a node lies more than [`MAX_DOCUMENT_DEPTH`]
/// levels below `key`.
pub fn encode_subtree(tree: &Tree, key: NodeKey) -> Result<NodeDocument, CodecError> {
    encode_node(tree, key, 0)
}

fn encode_node(tree: &Tree, key: NodeKey, depth: usize) -> Result<NodeDocument, CodecError> {
    let node = &tree[key];
    if depth > MAX_DOCUMENT_DEPTH {
        return Err(CodecError::too_deep(node.id(), MAX_DOCUMENT_DEPTH));
    }

    let children = node
        .children()
        .iter()
        .map(|&child| encode_node(tree, child, depth + 1))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(NodeDocument {
        name: node.name().to_string(),
        id: node.id().to_string(),
        parent_id: node.parent().map(|parent| tree[parent].id().to_string()),
        node_type: node.node_type().to_string(),
        fields: encode_fields(node.kind())?,
        children,
    })
}

/// Pretty-printed JSON text of the whole tree
pub fn to_json_string(tree: &Tree) -> Result<String, CodecError> {
    let document = encode(tree)?;
    Ok(serde_json::to_string_pretty(&document)?)
}

fn encode_fields(kind: &NodeKind) -> Result<Map<String, Value>, CodecError> {
    match kind {
        NodeKind::Node => Ok(Map::new()),
        NodeKind::Location(location) => to_object(location),
        NodeKind::Route(route) => to_object(route),
        NodeKind::Ascent(ascent) => to_object(ascent),
    }
}

fn to_object<T: Serialize>(payload: &T) -> Result<Map<String, Value>, CodecError> {
    match serde_json::to_value(payload)? {
        Value::Object(map) => Ok(map),
        _ => Ok(Map::new()),
    }
}
