//! Interface Construction
//!
//! Builds the three interface models generated for a block: its
//! attributes, the context it consumes, and the props handle its
//! rendering code receives.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::metadata::{AttributeMap, BlockMetadata};
use crate::output::dts_ast::{
    any_array_type, any_type, bool_type, number_type, partial_type, reference_type,
    string_record_type, string_type, undefined_type, void_type, FnParam, IndexSignature,
    InterfaceModel, Member, MethodSignature, PropertySignature, Type,
};
use crate::type_resolver::resolve_attribute_type;

/// Names of the companion interfaces a props interface refers to.
pub struct BlockInterfaceNames {
    pub attributes_interface_name: String,
    pub context_interface_name: String,
}

struct ContextFieldSpec {
    type_factory: fn() -> Type,
    optional: bool,
}

lazy_static! {
    /// Externally fixed types of the well-known context keys.
    static ref KNOWN_CONTEXT_TYPES: HashMap<&'static str, ContextFieldSpec> = {
        let mut m = HashMap::new();
        m.insert(
            "postType",
            ContextFieldSpec { type_factory: string_type, optional: false },
        );
        m.insert(
            "postId",
            ContextFieldSpec { type_factory: number_type, optional: false },
        );
        m.insert(
            "queryId",
            ContextFieldSpec { type_factory: number_type, optional: true },
        );
        m.insert(
            "query",
            ContextFieldSpec { type_factory: string_record_type, optional: true },
        );
        m
    };
}

fn readonly_property(name: &str, type_: Type, optional: bool) -> Member {
    Member::Property(PropertySignature {
        name: name.to_string(),
        type_,
        optional,
        readonly: true,
    })
}

fn method(name: &str, params: Vec<FnParam>, return_type: Type) -> Member {
    Member::Method(MethodSignature {
        name: name.to_string(),
        params,
        return_type,
    })
}

fn param(name: &str, type_: Type) -> FnParam {
    FnParam {
        name: name.to_string(),
        type_,
    }
}

/// One readonly field per expanded attribute, in map order. A field is
/// required exactly when its schema carries a default; `style` and
/// `align` stay optional regardless.
pub fn build_attributes_interface(
    attributes: &AttributeMap,
    interface_name: &str,
) -> InterfaceModel {
    let members = attributes
        .iter()
        .map(|(attribute_name, schema)| {
            let always_optional = attribute_name == "style" || attribute_name == "align";
            let optional = always_optional || schema.default.is_none();
            readonly_property(attribute_name, resolve_attribute_type(schema), optional)
        })
        .collect();

    InterfaceModel {
        name: interface_name.to_string(),
        members,
    }
}

/// One readonly field per consumed context key, in listed order. Types
/// come from the fixed lookup table; unknown keys are `any`, required.
pub fn build_context_interface(metadata: &BlockMetadata, interface_name: &str) -> InterfaceModel {
    let members = metadata
        .uses_context
        .iter()
        .map(|key| match KNOWN_CONTEXT_TYPES.get(key.as_str()) {
            Some(spec) => readonly_property(key, (spec.type_factory)(), spec.optional),
            None => readonly_property(key, any_type(), false),
        })
        .collect();

    InterfaceModel {
        name: interface_name.to_string(),
        members,
    }
}

/// The runtime handle handed to block rendering code. Member order is
/// fixed and part of the printed output contract.
pub fn build_block_interface(
    metadata: &BlockMetadata,
    interface_name: &str,
    names: &BlockInterfaceNames,
) -> InterfaceModel {
    let context_type = if metadata.uses_context.is_empty() {
        undefined_type()
    } else {
        reference_type(&names.context_interface_name)
    };

    let members = vec![
        readonly_property("name", string_type(), false),
        readonly_property("isSelected", bool_type(), false),
        readonly_property("isSelectionEnabled", bool_type(), false),
        readonly_property("clientId", string_type(), false),
        readonly_property(
            "attributes",
            reference_type(&names.attributes_interface_name),
            false,
        ),
        readonly_property("context", context_type, true),
        method(
            "setAttributes",
            vec![param(
                "attributes",
                partial_type(&names.attributes_interface_name),
            )],
            void_type(),
        ),
        method(
            "insertBlocksAfter",
            vec![param("blocks", any_type())],
            void_type(),
        ),
        method(
            "mergeBlocks",
            vec![param("blocks", any_array_type())],
            void_type(),
        ),
        method("onRemove", vec![param("value", any_type())], void_type()),
        method("onReplace", vec![param("value", any_type())], void_type()),
        method("toggleSelection", Vec::new(), void_type()),
        // Blocks routinely receive extension props that are not part of
        // the declared surface.
        Member::StringIndex(IndexSignature {
            value_type: any_type(),
        }),
    ];

    InterfaceModel {
        name: interface_name.to_string(),
        members,
    }
}
