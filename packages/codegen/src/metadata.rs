//! Block Metadata Model
//!
//! Typed view of a block's metadata document: declared attributes,
//! feature supports flags, and the context keys the block consumes.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Opaque value (can be anything)
pub type OpaqueValue = serde_json::Value;

/// Attribute schemas keyed by attribute name, in declaration order.
pub type AttributeMap = IndexMap<String, AttributeSchema>;

/// Supports flags keyed by feature name. Depending on the feature the
/// value is a plain boolean, an option object, or an array.
pub type SupportsMap = IndexMap<String, OpaqueValue>;

/// A single block metadata document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlockMetadata {
    /// Namespaced block name, e.g. `my-plugin/my-block`.
    pub name: String,
    pub attributes: AttributeMap,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports: Option<SupportsMap>,
    pub uses_context: Vec<String>,
}

/// Schema of a single declared attribute.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeSchema {
    /// Schema primitive name, or an ordered union of names.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<SchemaType>,
    /// Default value. Presence makes the generated field required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<OpaqueValue>,
    /// Enumeration of allowed literal values. Wins over `type`.
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<OpaqueValue>>,
}

impl AttributeSchema {
    /// Schema carrying only a primitive type name.
    pub fn of_type(name: &str) -> Self {
        AttributeSchema {
            schema_type: Some(SchemaType::Single(name.to_string())),
            ..Default::default()
        }
    }
}

/// The `type` field of an attribute schema. Values outside the schema
/// language land in `Other` and resolve to `any` instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaType {
    Single(String),
    Union(Vec<String>),
    Other(OpaqueValue),
}
