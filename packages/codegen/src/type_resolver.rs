//! Attribute Type Resolution
//!
//! Maps an attribute schema's runtime type description onto the
//! declaration type model. Resolution never fails; anything the schema
//! language does not cover degrades to `any`.

use serde_json::Value;

use crate::metadata::{AttributeSchema, SchemaType};
use crate::output::dts_ast::{
    any_array_type, any_type, bool_type, null_type, number_type, string_record_type, string_type,
    LiteralUnionType, LiteralValue, Type, UnionType,
};

/// Declaration type for a schema primitive name. Unrecognized names
/// degrade to `any`.
fn primitive_type(name: &str) -> Type {
    match name {
        "string" => string_type(),
        "number" | "integer" => number_type(),
        "boolean" => bool_type(),
        "array" => any_array_type(),
        "object" => string_record_type(),
        "null" => null_type(),
        _ => any_type(),
    }
}

/// Literal-union member for a single enum value. Values that are not
/// strings, numbers, or booleans have no literal form and widen to `any`.
fn literal_member(value: &Value) -> LiteralValue {
    match value {
        Value::String(text) => LiteralValue::Str(text.clone()),
        Value::Number(number) => LiteralValue::Num(number.clone()),
        Value::Bool(flag) => LiteralValue::Bool(*flag),
        _ => LiteralValue::Any,
    }
}

/// Resolves an attribute schema to its declaration type.
///
/// A non-empty `enum` wins over `type`; an array-valued `type` becomes a
/// union over its members in declared order, without deduplication.
pub fn resolve_attribute_type(schema: &AttributeSchema) -> Type {
    if let Some(values) = &schema.enum_values {
        if !values.is_empty() {
            return Type::LiteralUnion(LiteralUnionType {
                values: values.iter().map(literal_member).collect(),
            });
        }
    }

    match &schema.schema_type {
        Some(SchemaType::Single(name)) => primitive_type(name),
        Some(SchemaType::Union(names)) => Type::Union(UnionType {
            members: names.iter().map(|name| primitive_type(name)).collect(),
        }),
        Some(SchemaType::Other(_)) | None => any_type(),
    }
}
