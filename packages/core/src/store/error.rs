use crate::codec::CodecError;
use thiserror::Error;

/// Store operation errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Document not found: {0}")]
    NotFound(String),

    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
