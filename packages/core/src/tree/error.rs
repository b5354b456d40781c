//! Hierarchy Error Types
//!
//! Errors raised by structural and typed operations on a [`super::Tree`].
//! Every check runs before any mutation, so a failed call leaves the tree
//! untouched.

use crate::models::NodeType;
use thiserror::Error;

/// Hierarchy operation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TreeError {
    /// Node was offered itself as parent
    #[error("Node cannot be its own parent: {id}")]
    SelfParent { id: String },

    /// Parent assignment would create a cycle
    #[error("Circular reference detected: {child_id} -> {parent_id}")]
    CircularReference { child_id: String, parent_id: String },

    /// Typed lookup or mutation hit the wrong variant
    #[error("Node '{name}' is not a {expected} (found {found})")]
    TypeMismatch {
        name: String,
        expected: NodeType,
        found: NodeType,
    },

    /// Convenience constructor called without a parent
    #[error("Parent node not found for '{name}'")]
    MissingParent { name: String },

    /// Typed lookup found nothing with that name
    #[error("Node not found: {name}")]
    NotFound { name: String },
}

impl TreeError {
    /// Create a self-parent error
    pub fn self_parent(id: impl Into<String>) -> Self {
        Self::SelfParent { id: id.into() }
    }

    /// Create a circular reference error
    pub fn circular_reference(child_id: impl Into<String>, parent_id: impl Into<String>) -> Self {
        Self::CircularReference {
            child_id: child_id.into(),
            parent_id: parent_id.into(),
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch(name: impl Into<String>, expected: NodeType, found: NodeType) -> Self {
        Self::TypeMismatch {
            name: name.into(),
            expected,
            found,
        }
    }

    /// Create a missing parent error
    pub fn missing_parent(name: impl Into<String>) -> Self {
        Self::MissingParent { name: name.into() }
    }

    /// Create a not found error
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }
}
