//! Route function emission.
//!
//! Every route becomes one exported async function. The signature carries
//! the bound request fields; the body builds the URL (path substitution,
//! query string), assembles the `RequestInit` config, and delegates to the
//! shared `fetchJson` helper with the mapped response type.

use quill_define::{Binding, Field, Route};

use super::types::{response_expr, type_expr};
use crate::builder::CodeBuilder;
use crate::config::GenConfig;
use crate::naming::function_name;

/// Emits the exported async function for one route.
///
/// A route without a request shape is emitted with zero parameters and a
/// static URL; the request descriptor is never dereferenced when absent.
///
/// ## Examples
///
/// ```
/// use quill_define::{Field, HttpMethod, Route, StructShape, TypeShape};
/// use quill_gen::builder::CodeBuilder;
/// use quill_gen::codegen::emit_route_function;
/// use quill_gen::config::GenConfig;
///
/// let route = Route::new(HttpMethod::Get, "/users/:id")
///     .request(StructShape::anonymous(vec![
///         Field::new("id", TypeShape::Int).path("id"),
///     ]));
///
/// let mut b = CodeBuilder::new();
/// emit_route_function(&mut b, &route, &GenConfig::default());
/// let code = b.finish();
/// assert!(code.starts_with("export async function get_users_id(id: number): Promise<void> {"));
/// assert!(code.contains("url.replace(':id', encodeURIComponent(String(id)))"));
/// ```
pub fn emit_route_function(builder: &mut CodeBuilder, route: &Route, config: &GenConfig) {
    let name = function_name(route.method, &route.path, config.omit_url_prefix.as_deref());
    let response = response_expr(route.response.as_ref(), builder.level());

    let params = route
        .request
        .iter()
        .flat_map(|request| request.bound_fields())
        .map(|field| format!("{}: {}", field.name, type_expr(&field.shape, builder.level())))
        .collect::<Vec<_>>()
        .join(", ");

    builder.line(&format!(
        "export async function {}({}): Promise<{}> {{",
        name, params, response
    ));
    builder.indent();

    builder.line(&format!("let url = `{}`", route.path));
    if let Some(request) = &route.request {
        emit_path_substitutions(builder, &request.fields);
        emit_query_appends(builder, &request.fields);
    }

    builder.line("const config: RequestInit = {");
    builder.indent();
    builder.line(&format!("method: '{}',", route.method));
    if let Some(request) = &route.request {
        emit_header_entries(builder, &request.fields);
        if route.method.allows_body() {
            if let Some(body) = request.body_field() {
                builder.line(&format!("body: JSON.stringify({}),", body.name));
            }
        }
    }
    builder.dedent();
    builder.line("}");

    builder.line(&format!("return fetchJson<{}>(url, config)", response));
    builder.dedent();
    builder.line("}");
}

/// Emits one `url.replace` statement per path-bound field, URL-escaping the
/// runtime value.
fn emit_path_substitutions(builder: &mut CodeBuilder, fields: &[Field]) {
    for field in fields.iter().filter(|f| !f.embedded) {
        if let Binding::Path(tag) = &field.binding {
            builder.line(&format!(
                "url = url.replace(':{}', encodeURIComponent(String({})))",
                tag, field.name
            ));
        }
    }
}

/// Emits one `url +=` append per query-bound field.
///
/// The first pair is prefixed with `?`, every subsequent one with `&`, so
/// the constructed query string contains exactly one `?` regardless of how
/// many query fields the route has.
fn emit_query_appends(builder: &mut CodeBuilder, fields: &[Field]) {
    let mut first = true;
    for field in fields.iter().filter(|f| !f.embedded) {
        if let Binding::Query(key) = &field.binding {
            let sep = if first { '?' } else { '&' };
            first = false;
            builder.line(&format!(
                "url += `{}{}=${{encodeURIComponent(String({}))}}`",
                sep, key, field.name
            ));
        }
    }
}

/// Emits the `headers` entry of the config when header-bound fields exist.
fn emit_header_entries(builder: &mut CodeBuilder, fields: &[Field]) {
    let headers: Vec<&Field> = fields
        .iter()
        .filter(|f| !f.embedded && matches!(f.binding, Binding::Header(_)))
        .collect();
    if headers.is_empty() {
        return;
    }

    builder.line("headers: {");
    builder.indent();
    for field in headers {
        if let Binding::Header(header_name) = &field.binding {
            builder.line(&format!("'{}': String({}),", header_name, field.name));
        }
    }
    builder.dedent();
    builder.line("},");
}
