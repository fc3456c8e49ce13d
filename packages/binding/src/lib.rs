#![deny(clippy::all)]

use napi_derive::napi;

use block_codegen::generator;

/// Generate declaration text for one raw metadata JSON document.
///
/// The caller owns all file handling: it reads the metadata document,
/// passes the text here, and writes the returned declaration text
/// wherever its build wants it.
#[napi]
pub fn generate_declaration(metadata_json: String) -> napi::Result<String> {
    generator::generate_from_json(&metadata_json)
        .map_err(|err| napi::Error::from_reason(err.to_string()))
}

/// Version of the generator crate.
#[napi]
pub fn version() -> String {
    block_codegen::VERSION.full.clone()
}
