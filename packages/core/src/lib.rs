//! Rocdoc Core
//!
//! This crate provides the hierarchy of climbing locations, routes and logged
//! ascents behind Rocdoc, together with its JSON document format.
//!
//! # Architecture
//!
//! - **Arena Tree**: nodes stored in a table, edges held as [`NodeKey`] handles
//! - **Closed Variants**: generic Node, Location, Route and Ascent as one enum
//! - **Nested JSON Document**: root-first document preserving ids, variant
//!   tags and children order
//!
//! # Modules
//!
//! - [`models`] - Node, variants and their payloads
//! - [`tree`] - Hierarchy operations (linking, lookup, mutation)
//! - [`codec`] - Document encode/decode and whole-file load/save
//! - [`store`] - Document stores and their configuration

pub mod codec;
pub mod models;
pub mod store;
pub mod tree;

// Re-export commonly used types
pub use codec::{CodecError, NodeDocument};
pub use models::*;
pub use store::{JsonFileStore, MemoryStore, StoreConfig, StoreError, TreeStore};
pub use tree::{Tree, TreeError};
