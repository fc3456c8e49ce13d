//! Supports Expansion
//!
//! Computes the complete attribute map for a block: the declared
//! attributes plus the core fields every block carries and the
//! attributes implied by its `supports` flags.

use serde_json::{json, Value};

use crate::metadata::{AttributeMap, AttributeSchema, BlockMetadata};

const DEFAULT_ALIGNMENTS: [&str; 5] = ["left", "center", "right", "wide", "full"];
const WIDE_ALIGNMENTS: [&str; 2] = ["wide", "full"];

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map_or(false, |n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Whether the block declares truthy support for `feature`.
pub fn has_block_support(metadata: &BlockMetadata, feature: &str) -> bool {
    metadata
        .supports
        .as_ref()
        .and_then(|supports| supports.get(feature))
        .map_or(false, is_truthy)
}

/// Core attributes present on every block unless the block declares its
/// own: `style`, `lock` (with its standard default), and `className`.
fn add_default_core_attributes(metadata: &BlockMetadata) -> AttributeMap {
    let mut attributes = metadata.attributes.clone();

    if !attributes.contains_key("style") {
        attributes.insert("style".to_string(), AttributeSchema::of_type("object"));
    }

    if !attributes.contains_key("lock") {
        let mut lock = AttributeSchema::of_type("object");
        lock.default = Some(json!({ "move": false, "remove": false }));
        attributes.insert("lock".to_string(), lock);
    }

    if !attributes.contains_key("className") {
        attributes.insert("className".to_string(), AttributeSchema::of_type("string"));
    }

    attributes
}

/// Expands the declared attributes with the core fields and every
/// attribute implied by the block's supports flags.
///
/// The input metadata is left untouched. Declared attributes are never
/// overwritten, and the suppression flags run last so they win over
/// injection.
pub fn expand_attributes(metadata: &BlockMetadata) -> AttributeMap {
    let mut attributes = add_default_core_attributes(metadata);

    let supports = match &metadata.supports {
        Some(supports) => supports,
        None => return attributes,
    };

    let has_align_support =
        has_block_support(metadata, "align") || has_block_support(metadata, "alignWide");
    if has_align_support && !attributes.contains_key("align") {
        let mut allowed_aligns: Vec<Value> = match supports.get("align") {
            Some(Value::Bool(true)) => DEFAULT_ALIGNMENTS.iter().map(|a| json!(a)).collect(),
            Some(Value::Array(values)) => values.clone(),
            _ => {
                if has_block_support(metadata, "alignWide") {
                    WIDE_ALIGNMENTS.iter().map(|a| json!(a)).collect()
                } else {
                    Vec::new()
                }
            }
        };
        // The empty string stands for "no alignment".
        allowed_aligns.push(json!(""));

        let mut align = AttributeSchema::of_type("string");
        align.enum_values = Some(allowed_aligns);
        attributes.insert("align".to_string(), align);
    }

    if has_block_support(metadata, "anchor") && !attributes.contains_key("anchor") {
        attributes.insert("anchor".to_string(), AttributeSchema::of_type("string"));
    }

    if has_block_support(metadata, "ariaLabel") && !attributes.contains_key("ariaLabel") {
        attributes.insert("ariaLabel".to_string(), AttributeSchema::of_type("string"));
    }

    if has_block_support(metadata, "color") {
        let color_support = supports.get("color");
        let color_flag = |name: &str| -> bool {
            color_support
                .and_then(|color| color.get(name))
                .map_or(false, is_truthy)
        };

        if color_flag("backgroundColor") && !attributes.contains_key("backgroundColor") {
            attributes.insert(
                "backgroundColor".to_string(),
                AttributeSchema::of_type("string"),
            );
        }
        if color_flag("textColor") && !attributes.contains_key("textColor") {
            attributes.insert("textColor".to_string(), AttributeSchema::of_type("string"));
        }
        if color_flag("gradient") && !attributes.contains_key("gradient") {
            attributes.insert("gradient".to_string(), AttributeSchema::of_type("string"));
        }
    }

    // Exact `false` only; other falsy values leave the attribute alone.
    if supports.get("customClassName") == Some(&Value::Bool(false)) {
        attributes.shift_remove("className");
    }
    if supports.get("lock") == Some(&Value::Bool(false)) {
        attributes.shift_remove("lock");
    }

    attributes
}
