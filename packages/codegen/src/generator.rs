//! Declaration Generation
//!
//! Drives a metadata document through expansion, interface construction,
//! and printing, producing the final declaration text.

use crate::error::Result;
use crate::interfaces::{
    build_attributes_interface, build_block_interface, build_context_interface,
    BlockInterfaceNames,
};
use crate::metadata::BlockMetadata;
use crate::output::dts_emitter::print_type_declaration;
use crate::supports::expand_attributes;
use crate::util::dash_case_to_pascal_case;

/// Generates the declaration text for one metadata document: the
/// attributes interface, the context interface, and the props interface,
/// in that order, separated by blank lines.
pub fn generate_type_declaration(metadata: &BlockMetadata) -> String {
    let namespace_name = dash_case_to_pascal_case(&metadata.name.replace('/', "-"));
    let attributes_interface_name = format!("{}Attributes", namespace_name);
    let context_interface_name = format!("{}Context", namespace_name);
    let props_interface_name = format!("{}Props", namespace_name);

    let expanded = expand_attributes(metadata);
    let attributes_interface = build_attributes_interface(&expanded, &attributes_interface_name);
    let context_interface = build_context_interface(metadata, &context_interface_name);
    let block_interface = build_block_interface(
        metadata,
        &props_interface_name,
        &BlockInterfaceNames {
            attributes_interface_name,
            context_interface_name,
        },
    );

    [
        print_type_declaration(&attributes_interface),
        print_type_declaration(&context_interface),
        print_type_declaration(&block_interface),
    ]
    .join("\n\n")
}

/// Parses a raw metadata JSON document and generates its declaration
/// text.
///
/// This is the only fallible entry point; it fails exactly when the
/// input is not syntactically valid JSON for the metadata shape.
pub fn generate_from_json(metadata_json: &str) -> Result<String> {
    let metadata: BlockMetadata = serde_json::from_str(metadata_json)?;
    Ok(generate_type_declaration(&metadata))
}
