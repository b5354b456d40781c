//! Document Outline Binary
//!
//! Loads a Rocdoc document and prints its indented outline followed by a
//! per-variant node count. Useful to eyeball a document after hand edits.
//!
//! # Usage
//!
//! ```bash
//! # Default document (~/.rocdoc/tree.json)
//! cargo run --bin rocdoc-outline
//!
//! # Explicit document
//! cargo run --bin rocdoc-outline -- data/tree.json
//! ```
//!
//! # Environment Variables
//!
//! - `ROCDOC_DATA_PATH`: Document path when no argument is given
//! - `RUST_LOG`: Logging level (e.g., "info", "debug", "trace")

use std::env;

use rocdoc_core::{JsonFileStore, NodeType, StoreConfig, TreeStore};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = StoreConfig {
        data_path: env::args_os().nth(1).map(Into::into),
        create_if_missing: false,
    };
    let store = JsonFileStore::new(config)?;
    tracing::info!("Document: {}", store.path().display());

    let tree = store
        .load()
        .map_err(|e| anyhow::anyhow!("Failed to load {}: {}", store.path().display(), e))?;

    print!("{}", tree.outline());
    println!();

    let counts = tree.count_by_type();
    for node_type in [
        NodeType::Location,
        NodeType::Route,
        NodeType::Ascent,
        NodeType::Node,
    ] {
        println!(
            "{:<9} {}",
            node_type.as_str(),
            counts.get(&node_type).copied().unwrap_or(0)
        );
    }

    if counts.get(&NodeType::Node).copied().unwrap_or(0) > 1 {
        tracing::warn!("Document contains generic nodes besides the root");
    }

    Ok(())
}
