//! Declaration AST
//!
//! Declarative model of a generated interface: the types its members can
//! carry and the member signatures to render. Built once per metadata
//! document and handed straight to the emitter.

use serde_json::Number;

//// Types

/// Builtin (keyword) type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinTypeName {
    String,
    Number,
    Bool,
    Null,
    Undefined,
    Void,
    Any,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BuiltinType {
    pub name: BuiltinTypeName,
}

/// `Array<T>`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayType {
    pub of: Box<Type>,
}

/// `Record<string, V>`. A missing value type renders as `any`.
#[derive(Debug, Clone, PartialEq)]
pub struct MapType {
    pub value_type: Option<Box<Type>>,
}

/// Reference to a named interface or generic, e.g. `Partial<T>`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceType {
    pub name: String,
    pub type_params: Vec<Type>,
}

/// Union over type expressions, in declared order.
#[derive(Debug, Clone, PartialEq)]
pub struct UnionType {
    pub members: Vec<Type>,
}

/// Union over literal values, e.g. `"wide" | "full" | ""`.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralUnionType {
    pub values: Vec<LiteralValue>,
}

/// A single literal-union member. `Any` is the widening member used for
/// enum values that have no literal form.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Str(String),
    Num(Number),
    Bool(bool),
    Any,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Builtin(BuiltinType),
    Array(ArrayType),
    Map(MapType),
    Reference(ReferenceType),
    Union(UnionType),
    LiteralUnion(LiteralUnionType),
}

// Predefined types
pub fn any_type() -> Type {
    Type::Builtin(BuiltinType {
        name: BuiltinTypeName::Any,
    })
}

pub fn string_type() -> Type {
    Type::Builtin(BuiltinType {
        name: BuiltinTypeName::String,
    })
}

pub fn number_type() -> Type {
    Type::Builtin(BuiltinType {
        name: BuiltinTypeName::Number,
    })
}

pub fn bool_type() -> Type {
    Type::Builtin(BuiltinType {
        name: BuiltinTypeName::Bool,
    })
}

pub fn null_type() -> Type {
    Type::Builtin(BuiltinType {
        name: BuiltinTypeName::Null,
    })
}

pub fn undefined_type() -> Type {
    Type::Builtin(BuiltinType {
        name: BuiltinTypeName::Undefined,
    })
}

pub fn void_type() -> Type {
    Type::Builtin(BuiltinType {
        name: BuiltinTypeName::Void,
    })
}

/// `Array<any>`.
pub fn any_array_type() -> Type {
    Type::Array(ArrayType {
        of: Box::new(any_type()),
    })
}

/// `Record<string, any>`.
pub fn string_record_type() -> Type {
    Type::Map(MapType { value_type: None })
}

/// Reference to a named interface.
pub fn reference_type(name: &str) -> Type {
    Type::Reference(ReferenceType {
        name: name.to_string(),
        type_params: Vec::new(),
    })
}

/// `Partial<Name>`.
pub fn partial_type(name: &str) -> Type {
    Type::Reference(ReferenceType {
        name: "Partial".to_string(),
        type_params: vec![reference_type(name)],
    })
}

//// Interface model

/// A named interface declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceModel {
    pub name: String,
    pub members: Vec<Member>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    Property(PropertySignature),
    Method(MethodSignature),
    StringIndex(IndexSignature),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertySignature {
    pub name: String,
    pub type_: Type,
    pub optional: bool,
    pub readonly: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodSignature {
    pub name: String,
    pub params: Vec<FnParam>,
    pub return_type: Type,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FnParam {
    pub name: String,
    pub type_: Type,
}

/// `[key: string]: V` index signature.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexSignature {
    pub value_type: Type,
}
