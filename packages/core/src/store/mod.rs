//! Document Stores
//!
//! Whole-document persistence of a [`Tree`]. A store loads the complete
//! hierarchy in one read and writes it back in one write; there is no partial
//! or streaming access.
//!
//! - [`JsonFileStore`] - the JSON document on disk
//! - [`MemoryStore`] - keeps the last saved document in memory (tests, tooling)

mod config;
mod error;

pub use config::{StoreConfig, DATA_PATH_ENV, DEFAULT_FILE_NAME};
pub use error::{Result, StoreError};

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::codec;
use crate::tree::Tree;

/// Whole-document persistence of a tree
pub trait TreeStore {
    /// Load the complete tree
    fn load(&self) -> Result<Tree>;

    /// Replace the stored document with `tree`
    fn save(&self, tree: &Tree) -> Result<()>;
}

/// Store backed by a JSON document file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    create_if_missing: bool,
}

impl JsonFileStore {
    /// Create a store from configuration, resolving the document path
    pub fn new(config: StoreConfig) -> Result<Self> {
        config.validate().map_err(StoreError::Config)?;
        let path = config.resolve_data_path()?;

        tracing::debug!("Using document store at {}", path.display());
        Ok(Self {
            path,
            create_if_missing: config.create_if_missing,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TreeStore for JsonFileStore {
    fn load(&self) -> Result<Tree> {
        if !self.path.exists() {
            if self.create_if_missing {
                tracing::info!(
                    "No document at {}, starting with an empty tree",
                    self.path.display()
                );
                return Ok(Tree::new());
            }
            return Err(StoreError::NotFound(self.path.display().to_string()));
        }

        Ok(codec::load_tree(&self.path)?)
    }

    fn save(&self, tree: &Tree) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)?;
            }
        }
        Ok(codec::save_tree(tree, &self.path)?)
    }
}

/// In-memory store holding the last saved document text
#[derive(Debug, Default)]
pub struct MemoryStore {
    document: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with a document
    pub fn with_document(json: impl Into<String>) -> Self {
        Self {
            document: RefCell::new(Some(json.into())),
        }
    }

    /// The stored document text, if any
    pub fn document(&self) -> Option<String> {
        self.document.borrow().clone()
    }
}

impl TreeStore for MemoryStore {
    /// An empty store loads as a fresh tree
    fn load(&self) -> Result<Tree> {
        match self.document.borrow().as_deref() {
            Some(json) => Ok(codec::from_json_str(json)?),
            None => Ok(Tree::new()),
        }
    }

    fn save(&self, tree: &Tree) -> Result<()> {
        let json = codec::to_json_string(tree)?;
        *self.document.borrow_mut() = Some(json);
        Ok(())
    }
}
