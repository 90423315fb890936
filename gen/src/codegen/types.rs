//! Mapping from structural shapes to TypeScript type expressions.
//!
//! [`type_expr`] is a pure function over the descriptor tree. Recursion
//! terminates because every nullable/list step strips one layer and struct
//! fields are rendered as a body rather than re-entered through the
//! top-level struct branch; only a cyclic *anonymous* shape graph would
//! recurse without bound, and such graphs are outside the input contract.

use quill_define::{StructShape, TypeShape};

use super::interfaces::struct_body;
use crate::builder::INDENT;

/// Renders a shape as a TypeScript type expression.
///
/// `level` is the indentation level (in units) of the line the expression
/// appears on; it only matters for anonymous structs, which render as
/// multi-line inline literals aligned with their surroundings.
///
/// | Shape | Expression |
/// |---|---|
/// | `String` | `string` |
/// | `Bool` | `boolean` |
/// | `Int`, `Float` | `number` |
/// | `Nullable(T)` | `<T> \| null` |
/// | `List(T)` | `Array<<T>>` |
/// | named struct | the struct's name |
/// | anonymous struct | inline `{ ... }` literal |
/// | `Opaque` | `any` |
///
/// ## Examples
///
/// ```
/// use quill_define::TypeShape;
/// use quill_gen::codegen::type_expr;
///
/// assert_eq!(type_expr(&TypeShape::String, 0), "string");
/// assert_eq!(
///     type_expr(&TypeShape::list(TypeShape::nullable(TypeShape::Int)), 0),
///     "Array<number | null>"
/// );
/// ```
pub fn type_expr(shape: &TypeShape, level: usize) -> String {
    match shape {
        TypeShape::String => "string".to_string(),
        TypeShape::Bool => "boolean".to_string(),
        TypeShape::Int | TypeShape::Float => "number".to_string(),
        TypeShape::Nullable(inner) => format!("{} | null", type_expr(inner, level)),
        TypeShape::List(element) => format!("Array<{}>", type_expr(element, level)),
        TypeShape::Struct(s) => match &s.name {
            Some(name) => name.clone(),
            None => inline_literal(s, level),
        },
        TypeShape::Opaque => "any".to_string(),
    }
}

/// Renders the response type of a route: the mapped shape, or `void` when
/// the route declares no response.
pub fn response_expr(response: Option<&TypeShape>, level: usize) -> String {
    match response {
        Some(shape) => type_expr(shape, level),
        None => "void".to_string(),
    }
}

/// Renders an anonymous struct as an inline structural literal.
///
/// Re-enters the interface body logic at the current indentation context;
/// there is no enclosing declaration.
fn inline_literal(shape: &StructShape, level: usize) -> String {
    let body = struct_body(&shape.fields, level + 1);
    if body.is_empty() {
        return "{}".to_string();
    }
    format!("{{\n{}\n{}}}", body, INDENT.repeat(level))
}
