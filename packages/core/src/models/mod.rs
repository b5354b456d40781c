//! Data Models
//!
//! This module contains the data structures that make up a Rocdoc hierarchy:
//!
//! - `Node` - Arena entry shared by every node variant
//! - `NodeKind` / `NodeType` - Closed set of variants and their persisted tags
//! - Variant payloads (`Location`, `Route`, `Ascent`) carrying the
//!   variant-specific fields

mod ascent_node;
mod location_node;
mod node;
mod route_node;

pub use ascent_node::{Ascent, ASCENT_NAME_PREFIX, FLASH};
pub use location_node::{Coordinates, Location};
pub use node::{Node, NodeKey, NodeKind, NodeType, ROOT_NAME};
pub use route_node::{Route, UNKNOWN_GRADE};
