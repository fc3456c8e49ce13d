//! Declaration Emitter Tests

use block_codegen::output::dts_ast::{
    any_array_type, any_type, bool_type, null_type, number_type, partial_type, reference_type,
    string_record_type, string_type, undefined_type, void_type, FnParam, IndexSignature,
    InterfaceModel, LiteralUnionType, LiteralValue, Member, MethodSignature, PropertySignature,
    Type, UnionType,
};
use block_codegen::output::dts_emitter::{print_type_declaration, type_to_string};

fn readonly_property(name: &str, type_: Type, optional: bool) -> Member {
    Member::Property(PropertySignature {
        name: name.to_string(),
        type_,
        optional,
        readonly: true,
    })
}

#[test]
fn should_print_empty_interface() {
    let model = InterfaceModel {
        name: "TestContext".to_string(),
        members: Vec::new(),
    };

    assert_eq!(print_type_declaration(&model), "interface TestContext {\n}");
}

#[test]
fn should_print_readonly_optional_property() {
    let model = InterfaceModel {
        name: "TestAttributes".to_string(),
        members: vec![readonly_property("content", string_type(), true)],
    };

    assert_eq!(
        print_type_declaration(&model),
        "interface TestAttributes {\n  readonly content?: string;\n}"
    );
}

#[test]
fn should_print_plain_required_property() {
    let model = InterfaceModel {
        name: "Test".to_string(),
        members: vec![Member::Property(PropertySignature {
            name: "value".to_string(),
            type_: number_type(),
            optional: false,
            readonly: false,
        })],
    };

    assert_eq!(
        print_type_declaration(&model),
        "interface Test {\n  value: number;\n}"
    );
}

#[test]
fn should_print_method_signature() {
    let model = InterfaceModel {
        name: "Test".to_string(),
        members: vec![Member::Method(MethodSignature {
            name: "setAttributes".to_string(),
            params: vec![FnParam {
                name: "attributes".to_string(),
                type_: partial_type("TestAttributes"),
            }],
            return_type: void_type(),
        })],
    };

    assert_eq!(
        print_type_declaration(&model),
        "interface Test {\n  setAttributes(attributes: Partial<TestAttributes>): void;\n}"
    );
}

#[test]
fn should_print_parameterless_method() {
    let model = InterfaceModel {
        name: "Test".to_string(),
        members: vec![Member::Method(MethodSignature {
            name: "toggleSelection".to_string(),
            params: Vec::new(),
            return_type: void_type(),
        })],
    };

    assert_eq!(
        print_type_declaration(&model),
        "interface Test {\n  toggleSelection(): void;\n}"
    );
}

#[test]
fn should_print_index_signature() {
    let model = InterfaceModel {
        name: "Test".to_string(),
        members: vec![Member::StringIndex(IndexSignature {
            value_type: any_type(),
        })],
    };

    assert_eq!(
        print_type_declaration(&model),
        "interface Test {\n  [key: string]: any;\n}"
    );
}

#[test]
fn should_render_builtin_types() {
    assert_eq!(type_to_string(&string_type()), "string");
    assert_eq!(type_to_string(&number_type()), "number");
    assert_eq!(type_to_string(&bool_type()), "boolean");
    assert_eq!(type_to_string(&null_type()), "null");
    assert_eq!(type_to_string(&undefined_type()), "undefined");
    assert_eq!(type_to_string(&void_type()), "void");
    assert_eq!(type_to_string(&any_type()), "any");
}

#[test]
fn should_render_composite_types() {
    assert_eq!(type_to_string(&any_array_type()), "Array<any>");
    assert_eq!(type_to_string(&string_record_type()), "Record<string, any>");
    assert_eq!(type_to_string(&reference_type("MyProps")), "MyProps");
    assert_eq!(
        type_to_string(&partial_type("MyAttributes")),
        "Partial<MyAttributes>"
    );
}

#[test]
fn should_render_unions_in_member_order() {
    let union = Type::Union(UnionType {
        members: vec![string_type(), number_type(), null_type()],
    });

    assert_eq!(type_to_string(&union), "string | number | null");
}

#[test]
fn should_render_literal_unions() {
    let union = Type::LiteralUnion(LiteralUnionType {
        values: vec![
            LiteralValue::Str("wide".to_string()),
            LiteralValue::Num(serde_json::Number::from(3)),
            LiteralValue::Bool(true),
            LiteralValue::Any,
        ],
    });

    assert_eq!(type_to_string(&union), "\"wide\" | 3 | true | any");
}

#[test]
fn should_render_fractional_number_literals() {
    let union = Type::LiteralUnion(LiteralUnionType {
        values: vec![LiteralValue::Num(
            serde_json::Number::from_f64(2.5).unwrap(),
        )],
    });

    assert_eq!(type_to_string(&union), "2.5");
}

#[test]
fn should_escape_string_literal_values() {
    let union = Type::LiteralUnion(LiteralUnionType {
        values: vec![LiteralValue::Str("a\"b\\c".to_string())],
    });

    assert_eq!(type_to_string(&union), "\"a\\\"b\\\\c\"");
}

#[test]
fn should_print_members_in_model_order() {
    let model = InterfaceModel {
        name: "Test".to_string(),
        members: vec![
            readonly_property("first", string_type(), false),
            readonly_property("second", number_type(), true),
        ],
    };

    assert_eq!(
        print_type_declaration(&model),
        "interface Test {\n  readonly first: string;\n  readonly second?: number;\n}"
    );
}

#[test]
fn should_print_deterministically() {
    let model = InterfaceModel {
        name: "Test".to_string(),
        members: vec![
            readonly_property("a", string_type(), true),
            readonly_property("b", any_array_type(), false),
        ],
    };

    assert_eq!(print_type_declaration(&model), print_type_declaration(&model));
}
