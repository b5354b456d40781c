//! Persistence Codec Error Types

use std::path::PathBuf;

use crate::tree::TreeError;
use thiserror::Error;

/// Document encode/decode errors
///
/// Any error aborts the whole decode; no partial tree is returned.
#[derive(Error, Debug)]
pub enum CodecError {
    /// Two nodes in one document share an id
    #[error("Duplicate node ID: {id} ({name})")]
    DuplicateId { id: String, name: String },

    /// A `date` field is not an ISO-8601 calendar date string
    #[error("Invalid date '{value}': {reason}")]
    InvalidDate { value: String, reason: String },

    /// Extra fields do not fit the variant named by `node_type`
    #[error("Invalid fields for node {id}: {source}")]
    InvalidFields {
        id: String,
        #[source]
        source: serde_json::Error,
    },

    /// The hierarchy nests deeper than a document can hold
    #[error("Node {id} is nested deeper than {max_depth} levels")]
    TooDeep { id: String, max_depth: usize },

    /// Relinking a decoded node violated a hierarchy invariant
    #[error("Hierarchy error: {0}")]
    Tree(#[from] TreeError),

    /// Malformed JSON or document shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading or writing the document file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CodecError {
    /// Create a duplicate id error
    pub fn duplicate_id(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DuplicateId {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Create an invalid date error
    pub fn invalid_date(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDate {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a too-deep error for the node at `id`
    pub fn too_deep(id: impl Into<String>, max_depth: usize) -> Self {
        Self::TooDeep {
            id: id.into(),
            max_depth,
        }
    }

    /// Create an I/O error carrying the offending path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
