//! Declaration Emitter
//!
//! Serializes an `InterfaceModel` into declaration text. Emission is a
//! pure function of the model: equal models print byte-identical text.

use crate::output::dts_ast::{
    BuiltinTypeName, IndexSignature, InterfaceModel, LiteralValue, Member, MethodSignature,
    PropertySignature, Type,
};

const INDENT_WITH: &str = "  ";

#[derive(Debug, Clone)]
struct EmittedLine {
    parts: Vec<String>,
    indent: usize,
}

impl EmittedLine {
    fn new(indent: usize) -> Self {
        EmittedLine {
            parts: Vec::new(),
            indent,
        }
    }
}

/// Line-oriented output buffer with indentation tracking.
pub struct EmitterContext {
    lines: Vec<EmittedLine>,
    indent: usize,
}

impl EmitterContext {
    pub fn create_root() -> Self {
        EmitterContext::new(0)
    }

    pub fn new(indent: usize) -> Self {
        EmitterContext {
            lines: vec![EmittedLine::new(indent)],
            indent,
        }
    }

    // Invariant: `lines` always holds at least one line.
    fn current_line_mut(&mut self) -> &mut EmittedLine {
        self.lines.last_mut().unwrap()
    }

    fn line_is_empty(&self) -> bool {
        self.lines.last().map_or(true, |line| line.parts.is_empty())
    }

    pub fn println(&mut self, last_part: &str) {
        self.print(last_part, true);
    }

    pub fn print(&mut self, part: &str, new_line: bool) {
        if !part.is_empty() {
            self.current_line_mut().parts.push(part.to_string());
        }
        if new_line {
            self.lines.push(EmittedLine::new(self.indent));
        }
    }

    pub fn inc_indent(&mut self) {
        self.indent += 1;
        if self.line_is_empty() {
            let indent = self.indent;
            self.current_line_mut().indent = indent;
        }
    }

    pub fn dec_indent(&mut self) {
        self.indent -= 1;
        if self.line_is_empty() {
            let indent = self.indent;
            self.current_line_mut().indent = indent;
        }
    }

    pub fn to_source(&self) -> String {
        self.lines
            .iter()
            .map(|line| {
                if line.parts.is_empty() {
                    String::new()
                } else {
                    format!("{}{}", INDENT_WITH.repeat(line.indent), line.parts.join(""))
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Prints a single interface declaration.
pub fn print_type_declaration(model: &InterfaceModel) -> String {
    let mut ctx = EmitterContext::create_root();
    emit_interface(model, &mut ctx);
    ctx.to_source()
}

fn emit_interface(model: &InterfaceModel, ctx: &mut EmitterContext) {
    ctx.println(&format!("interface {} {{", model.name));
    ctx.inc_indent();
    for member in &model.members {
        emit_member(member, ctx);
    }
    ctx.dec_indent();
    ctx.print("}", false);
}

fn emit_member(member: &Member, ctx: &mut EmitterContext) {
    match member {
        Member::Property(property) => emit_property(property, ctx),
        Member::Method(method) => emit_method(method, ctx),
        Member::StringIndex(index) => emit_string_index(index, ctx),
    }
}

fn emit_property(property: &PropertySignature, ctx: &mut EmitterContext) {
    if property.readonly {
        ctx.print("readonly ", false);
    }
    ctx.print(&property.name, false);
    if property.optional {
        ctx.print("?", false);
    }
    ctx.print(": ", false);
    ctx.print(&type_to_string(&property.type_), false);
    ctx.println(";");
}

fn emit_method(method: &MethodSignature, ctx: &mut EmitterContext) {
    ctx.print(&method.name, false);
    ctx.print("(", false);
    for (i, param) in method.params.iter().enumerate() {
        if i > 0 {
            ctx.print(", ", false);
        }
        ctx.print(&param.name, false);
        ctx.print(": ", false);
        ctx.print(&type_to_string(&param.type_), false);
    }
    ctx.print("): ", false);
    ctx.print(&type_to_string(&method.return_type), false);
    ctx.println(";");
}

fn emit_string_index(index: &IndexSignature, ctx: &mut EmitterContext) {
    ctx.print("[key: string]: ", false);
    ctx.print(&type_to_string(&index.value_type), false);
    ctx.println(";");
}

/// Renders a type expression as declaration syntax.
pub fn type_to_string(type_: &Type) -> String {
    match type_ {
        Type::Builtin(builtin) => builtin_name(builtin.name).to_string(),
        Type::Array(array) => format!("Array<{}>", type_to_string(&array.of)),
        Type::Map(map) => {
            let value_type = map
                .value_type
                .as_ref()
                .map_or_else(|| "any".to_string(), |value| type_to_string(value));
            format!("Record<string, {}>", value_type)
        }
        Type::Reference(reference) => {
            if reference.type_params.is_empty() {
                reference.name.clone()
            } else {
                let params = reference
                    .type_params
                    .iter()
                    .map(type_to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{}<{}>", reference.name, params)
            }
        }
        Type::Union(union) => union
            .members
            .iter()
            .map(type_to_string)
            .collect::<Vec<_>>()
            .join(" | "),
        Type::LiteralUnion(union) => union
            .values
            .iter()
            .map(literal_to_string)
            .collect::<Vec<_>>()
            .join(" | "),
    }
}

fn builtin_name(name: BuiltinTypeName) -> &'static str {
    match name {
        BuiltinTypeName::String => "string",
        BuiltinTypeName::Number => "number",
        BuiltinTypeName::Bool => "boolean",
        BuiltinTypeName::Null => "null",
        BuiltinTypeName::Undefined => "undefined",
        BuiltinTypeName::Void => "void",
        BuiltinTypeName::Any => "any",
    }
}

fn literal_to_string(value: &LiteralValue) -> String {
    match value {
        LiteralValue::Str(text) => escape_string_literal(text),
        LiteralValue::Num(number) => number.to_string(),
        LiteralValue::Bool(flag) => flag.to_string(),
        LiteralValue::Any => "any".to_string(),
    }
}

/// Double-quoted string literal with backslash escaping.
fn escape_string_literal(input: &str) -> String {
    let mut escaped = input.replace('\\', "\\\\");
    escaped = escaped.replace('"', "\\\"");
    escaped = escaped.replace('\n', "\\n");
    escaped = escaped.replace('\r', "\\r");
    format!("\"{}\"", escaped)
}
