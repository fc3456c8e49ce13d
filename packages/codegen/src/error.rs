//! Error Types
//!
//! The generator's single failure mode: the raw metadata text handed in
//! by the caller was not valid JSON. Everything past the parse boundary
//! degrades instead of failing.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("invalid block metadata: {0}")]
    InvalidMetadata(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CodegenError>;
