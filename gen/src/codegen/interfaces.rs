//! Interface emission for named struct shapes.
//!
//! Every distinct named struct referenced by a route becomes one exported
//! `interface` declaration. The field emission policy here is shared with
//! inline anonymous literals (see [`super::types`]):
//!
//! - embedded fields are skipped (flattening is not attempted)
//! - fields excluded from serialization (`json_skip`) are omitted entirely
//! - the property name is the JSON override if present, the declared name
//!   otherwise
//! - omit-empty fields are widened with `| undefined`
//! - declaration order is preserved, never sorted

use quill_define::{Field, Service, StructShape, TypeShape};

use super::types::type_expr;
use crate::builder::{CodeBuilder, INDENT};

/// Renders the property lines of a struct body, fully indented at `level`.
///
/// Returns an empty string when no field survives the emission policy.
pub fn struct_body(fields: &[Field], level: usize) -> String {
    let mut lines = Vec::new();
    for field in fields {
        if field.embedded || field.json_skip {
            continue;
        }
        let mut line = format!(
            "{}{}: {}",
            INDENT.repeat(level),
            field.property_name(),
            type_expr(&field.shape, level)
        );
        if field.omit_empty {
            line.push_str(" | undefined");
        }
        lines.push(line);
    }
    lines.join("\n")
}

/// Emits an exported interface declaration for a named struct shape.
///
/// Anonymous shapes are skipped entirely; they only ever appear inline.
///
/// ## Examples
///
/// ```
/// use quill_define::{Field, StructShape, TypeShape};
/// use quill_gen::builder::CodeBuilder;
/// use quill_gen::codegen::emit_interface;
///
/// let mut b = CodeBuilder::new();
/// let shape = StructShape::named("User", vec![Field::new("id", TypeShape::Int)]);
/// emit_interface(&mut b, &shape);
/// assert_eq!(b.finish(), "export interface User {\n  id: number\n}\n");
/// ```
pub fn emit_interface(builder: &mut CodeBuilder, shape: &StructShape) {
    let Some(name) = &shape.name else {
        return;
    };

    builder.line(&format!("export interface {} {{", name));
    let body = struct_body(&shape.fields, builder.level() + 1);
    if !body.is_empty() {
        builder.raw(&body);
        builder.raw("\n");
    }
    builder.line("}");
}

/// Collects the distinct named structs a generated module must declare.
///
/// Roots are, per route in order: the shapes of bound request fields (the
/// ones that appear in function signatures, the body payload included),
/// then the response shape. The walk is transitive through nullable, list,
/// and field layers so that every name referenced anywhere in the emitted
/// module has a declaration; each name is collected once, at its first
/// reference. Fields the emission policy drops (embedded, `json_skip`) are
/// not walked.
pub fn collect_interfaces(service: &Service) -> Vec<&StructShape> {
    let mut found: Vec<&StructShape> = Vec::new();
    for route in &service.routes {
        if let Some(request) = &route.request {
            for field in request.bound_fields() {
                walk(&field.shape, &mut found);
            }
        }
        if let Some(response) = &route.response {
            walk(response, &mut found);
        }
    }
    found
}

fn walk<'a>(shape: &'a TypeShape, found: &mut Vec<&'a StructShape>) {
    match shape {
        TypeShape::Nullable(inner) | TypeShape::List(inner) => walk(inner, found),
        TypeShape::Struct(s) => {
            if s.name.is_some() {
                if found.iter().any(|seen| seen.name == s.name) {
                    // Already collected; stopping here also terminates
                    // self-referential named shapes.
                    return;
                }
                found.push(s);
            }
            for field in &s.fields {
                if field.embedded || field.json_skip {
                    continue;
                }
                walk(&field.shape, found);
            }
        }
        _ => {}
    }
}
