//! Document → tree
//!
//! Depth-first rebuild of a [`Tree`] from a [`NodeDocument`]. Each node keeps
//! its persisted id; children are relinked through [`Tree::set_parent`], so
//! the hierarchy invariants are checked again on the way in.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::codec::document::{DATE_KEY, ISO_DATE_FORMAT, MAX_DOCUMENT_DEPTH};
use crate::codec::{CodecError, NodeDocument};
use crate::models::{Node, NodeKey, NodeKind, NodeType, ROOT_NAME};
use crate::tree::Tree;

/// Ids registered during a single decode
type IdRegistry = HashMap<String, NodeKey>;

/// Rebuild a tree from a parsed document.
///
/// The top-level node becomes the root of the returned tree.
///
/// # Errors
///
/// - `CodecError::DuplicateId` if two nodes share an id
/// - `CodecError::InvalidDate` if a `date` field is not `YYYY-MM-DD`
/// - `CodecError::InvalidFields` if a variant's fields have the wrong shape
/// - `CodecError::TooDeep` if nodes nest deeper than [`MAX_DOCUMENT_DEPTH`]
pub fn decode(document: NodeDocument) -> Result<Tree, CodecError> {
    if document.name != ROOT_NAME || document.node_type != NodeType::Node.as_str() {
        tracing::warn!(
            "Document root is '{}' ({}), expected a generic '{}' container",
            document.name,
            document.node_type,
            ROOT_NAME
        );
    }
    if let Some(parent_id) = &document.parent_id {
        tracing::warn!("Document root claims parent {}, ignoring", parent_id);
    }

    let mut tree = Tree::with_capacity(document.count());
    let mut registry = IdRegistry::new();
    decode_node(&mut tree, &mut registry, document, 0)?;

    tracing::debug!("Decoded {} nodes", registry.len());
    Ok(tree)
}

/// Parse JSON text and rebuild the tree
pub fn from_json_str(json: &str) -> Result<Tree, CodecError> {
    let document: NodeDocument = serde_json::from_str(json)?;
    decode(document)
}

/// Rebuild the tree from an already parsed JSON value
pub fn from_json_value(value: Value) -> Result<Tree, CodecError> {
    let document: NodeDocument = serde_json::from_value(value)?;
    decode(document)
}

fn decode_node(
    tree: &mut Tree,
    registry: &mut IdRegistry,
    document: NodeDocument,
    depth: usize,
) -> Result<NodeKey, CodecError> {
    let NodeDocument {
        name,
        id,
        node_type,
        fields,
        children,
        ..
    } = document;

    if depth > MAX_DOCUMENT_DEPTH {
        return Err(CodecError::too_deep(id, MAX_DOCUMENT_DEPTH));
    }
    if registry.contains_key(&id) {
        return Err(CodecError::duplicate_id(id, name));
    }

    check_dates(&fields)?;
    let kind = decode_kind(&id, &node_type, fields)?;

    let mut node = Node::new(name, kind);
    node.assign_id(id.clone());
    let key = tree.insert(node);
    registry.insert(id, key);

    for child_document in children {
        if let Some(claimed) = child_document.parent_id.as_deref() {
            if claimed != tree[key].id() {
                tracing::warn!(
                    "Node {} claims parent {} but is nested under {}",
                    child_document.id,
                    claimed,
                    tree[key].id()
                );
            }
        }

        let child = decode_node(tree, registry, child_document, depth + 1)?;
        tree.set_parent(child, Some(key))?;

        if tree[child].node_type() == NodeType::Ascent
            && tree[key].node_type() != NodeType::Route
        {
            tracing::warn!(
                "Ascent {} is nested under {} '{}', expected a Route",
                tree[child].id(),
                tree[key].node_type(),
                tree[key].name()
            );
        }
    }

    Ok(key)
}

fn decode_kind(
    id: &str,
    node_type: &str,
    fields: Map<String, Value>,
) -> Result<NodeKind, CodecError> {
    let kind = match node_type.parse::<NodeType>() {
        Ok(NodeType::Node) => NodeKind::Node,
        Ok(NodeType::Location) => NodeKind::Location(typed_fields(id, fields)?),
        Ok(NodeType::Route) => NodeKind::Route(typed_fields(id, fields)?),
        Ok(NodeType::Ascent) => NodeKind::Ascent(typed_fields(id, fields)?),
        Err(_) => {
            tracing::warn!(
                "Unknown node_type '{}' for node {}, loading as generic node",
                node_type,
                id
            );
            NodeKind::Node
        }
    };
    Ok(kind)
}

fn typed_fields<T: DeserializeOwned>(
    id: &str,
    fields: Map<String, Value>,
) -> Result<T, CodecError> {
    serde_json::from_value(Value::Object(fields)).map_err(|source| CodecError::InvalidFields {
        id: id.to_string(),
        source,
    })
}

/// Check that every `date` key (at any nesting level) holds a zero-padded
/// `YYYY-MM-DD` calendar date.
pub(crate) fn check_dates(fields: &Map<String, Value>) -> Result<(), CodecError> {
    for (key, value) in fields {
        if key == DATE_KEY {
            parse_iso_date(value)?;
        } else {
            check_value(value)?;
        }
    }
    Ok(())
}

fn check_value(value: &Value) -> Result<(), CodecError> {
    match value {
        Value::Object(map) => check_dates(map),
        Value::Array(items) => items.iter().try_for_each(check_value),
        _ => Ok(()),
    }
}

fn parse_iso_date(value: &Value) -> Result<NaiveDate, CodecError> {
    let raw = value.as_str().ok_or_else(|| {
        CodecError::invalid_date(value.to_string(), "expected a YYYY-MM-DD string")
    })?;
    let date = NaiveDate::parse_from_str(raw, ISO_DATE_FORMAT)
        .map_err(|e| CodecError::invalid_date(raw, e.to_string()))?;

    // chrono accepts unpadded fields such as "2024-3-5"
    if date.format(ISO_DATE_FORMAT).to_string() != raw {
        return Err(CodecError::invalid_date(
            raw,
            "expected a zero-padded YYYY-MM-DD date",
        ));
    }
    Ok(date)
}
