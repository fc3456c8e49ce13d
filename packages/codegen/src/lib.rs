//! Block Metadata Declaration Generator
//!
//! Turns a block's metadata document into structurally-typed interface
//! declarations for the code that renders the block. The crate boundary
//! is text-in/text-out: metadata JSON in, declaration text out; file
//! handling stays with the consuming build tool.

#![deny(clippy::all)]

#[cfg(feature = "napi-bindings")]
use napi_derive::napi;

// Core modules
pub mod error;
pub mod generator;
pub mod interfaces;
pub mod metadata;
pub mod supports;
pub mod type_resolver;
pub mod util;
mod version;

// Output model and emitter
pub mod output;

// Re-exports
pub use error::{CodegenError, Result};
pub use generator::{generate_from_json, generate_type_declaration};
pub use metadata::{AttributeMap, AttributeSchema, BlockMetadata, SchemaType, SupportsMap};
pub use util::Version;
pub use version::VERSION;

/// Generate declaration text for a raw metadata JSON document.
#[cfg(feature = "napi-bindings")]
#[napi]
pub fn generate_declaration(metadata_json: String) -> napi::Result<String> {
    generator::generate_from_json(&metadata_json)
        .map_err(|err| napi::Error::from_reason(err.to_string()))
}

/// Generator version.
#[cfg(feature = "napi-bindings")]
#[napi]
pub fn generator_version() -> String {
    VERSION.full.clone()
}
