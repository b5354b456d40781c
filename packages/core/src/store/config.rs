//! Configuration for the document store

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable naming the document when no `data_path` is configured
pub const DATA_PATH_ENV: &str = "ROCDOC_DATA_PATH";

/// File name of the document inside the data directory
pub const DEFAULT_FILE_NAME: &str = "tree.json";

/// Configuration for [`super::JsonFileStore`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Explicit document path; `None` uses `~/.rocdoc/tree.json`
    pub data_path: Option<PathBuf>,

    /// Start from an empty tree when the document does not exist yet
    pub create_if_missing: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            create_if_missing: true,
        }
    }
}

impl StoreConfig {
    /// Config pointing at a specific document
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: Some(path.into()),
            ..Self::default()
        }
    }

    /// Get the document path
    ///
    /// Resolution order:
    /// - `data_path`
    /// - `ROCDOC_DATA_PATH` environment variable
    /// - `~/.rocdoc/tree.json` (macOS/Linux), `%USERPROFILE%\.rocdoc\tree.json` (Windows)
    pub fn resolve_data_path(&self) -> Result<PathBuf, std::io::Error> {
        if let Some(path) = &self.data_path {
            return Ok(path.clone());
        }

        if let Some(path) = std::env::var_os(DATA_PATH_ENV) {
            if !path.is_empty() {
                return Ok(PathBuf::from(path));
            }
        }

        let home_dir = dirs::home_dir().ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Cannot determine home directory",
            )
        })?;

        Ok(home_dir.join(".rocdoc").join(DEFAULT_FILE_NAME))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if let Some(path) = &self.data_path {
            if path.as_os_str().is_empty() {
                return Err("data_path cannot be empty".to_string());
            }
            if path.file_name().is_none() {
                return Err(format!("data_path {:?} does not name a file", path));
            }
        }
        Ok(())
    }
}
