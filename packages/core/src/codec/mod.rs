//! Persistence Codec
//!
//! Converts a [`Tree`] to and from its nested JSON document.
//!
//! # Guarantees
//!
//! Encoding and decoding a tree reproduces the same ids, names, variant tags,
//! field values and children order at every node. `is_expanded` is UI state
//! and is not persisted. Hierarchies deeper than [`MAX_DOCUMENT_DEPTH`] are
//! refused by both directions with `CodecError::TooDeep`, so anything that
//! saves also loads.
//!
//! # Examples
//!
//! ```rust
//! use rocdoc_core::codec::{from_json_str, to_json_string};
//! use rocdoc_core::models::{Location, Route};
//! use rocdoc_core::tree::Tree;
//!
//! let mut tree = Tree::new();
//! let crag = tree.add_location("Ceüse", Some(tree.root()), Location::new())?;
//! tree.add_route("Biographie", Some(crag), Route::new().with_grade("9a+"))?;
//!
//! let json = to_json_string(&tree)?;
//! let loaded = from_json_str(&json)?;
//! assert_eq!(loaded.find_route("Biographie")?, loaded.find("Biographie").unwrap());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod decode;
mod document;
mod encode;
mod error;

pub use decode::{decode, from_json_str, from_json_value};
pub use document::{NodeDocument, DATE_KEY, ISO_DATE_FORMAT, MAX_DOCUMENT_DEPTH};
pub use encode::{encode, encode_subtree, to_json_string};
pub use error::CodecError;

use std::fs;
use std::path::{Path, PathBuf};

use crate::tree::Tree;

/// Read and decode the whole document at `path`
pub fn load_tree(path: &Path) -> Result<Tree, CodecError> {
    let json = fs::read_to_string(path).map_err(|e| CodecError::io(path, e))?;
    let tree = from_json_str(&json)?;
    tracing::info!("Loaded {} nodes from {}", tree.node_count(), path.display());
    Ok(tree)
}

/// Encode the whole tree and write it to `path`.
///
/// The document goes to a sibling temporary file first and is renamed into
/// place, so readers never observe a half-written file.
pub fn save_tree(tree: &Tree, path: &Path) -> Result<(), CodecError> {
    let json = to_json_string(tree)?;
    let staging = staging_path(path);

    fs::write(&staging, json).map_err(|e| CodecError::io(&staging, e))?;
    if let Err(e) = fs::rename(&staging, path) {
        if let Err(cleanup) = fs::remove_file(&staging) {
            tracing::warn!(
                "Failed to remove staging file {}: {}",
                staging.display(),
                cleanup
            );
        }
        return Err(CodecError::io(path, e));
    }

    tracing::info!("Saved {} nodes to {}", tree.node_count(), path.display());
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

impl Tree {
    /// Build a tree from the document at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CodecError> {
        load_tree(path.as_ref())
    }

    /// Write this tree as a document to `path`
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), CodecError> {
        save_tree(self, path.as_ref())
    }
}
