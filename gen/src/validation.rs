//! Validation of service definitions.
//!
//! This module provides pre-generation validation so that malformed input
//! fails loudly before any output is produced, instead of silently emitting
//! broken client code.
//!
//! ## Validation Checks
//!
//! - **Path pairing**: every `:placeholder` in a path template has a
//!   path-bound request field, and every path-bound field has a matching
//!   placeholder
//! - **Body arity**: at most one body-bound field per route; body-carrying
//!   methods with a non-empty request shape must designate exactly one
//! - **Login path**: authenticated services must configure one
//! - **Function names**: derived route-function names must be unique
//! - **Interface names**: structurally different shapes may not share one
//!
//! ## Examples
//!
//! ```
//! use quill_definitions::taskhub::define_taskhub_service;
//! use quill_gen::config::GenConfig;
//! use quill_gen::validation::validate_service;
//!
//! let service = define_taskhub_service();
//! assert!(validate_service(&service, &GenConfig::default()).is_ok());
//! ```

use quill_define::{Binding, Service, StructShape, TypeShape};

use crate::config::GenConfig;
use crate::errors::GeneratorError;
use crate::naming::function_name;
use crate::parser::extract_path_params;

/// Validates a service definition before code generation.
///
/// Returns the first violation found; generation aborts without producing
/// any output.
///
/// ## Errors
///
/// See [`GeneratorError`] for the individual variants. Typical failures:
///
/// - a route path has a `:id` placeholder but no field bound with
///   `.path("id")` (including routes with no request shape at all)
/// - a POST/PUT/PATCH route has request fields but none bound with
///   `.body()`
/// - two routes sanitize to the same function name
pub fn validate_service(service: &Service, config: &GenConfig) -> Result<(), GeneratorError> {
    if service.auth.scheme.requires_credentials() && service.auth.login_path.is_none() {
        return Err(GeneratorError::MissingLoginPath {
            scheme: service.auth.scheme.to_string(),
        });
    }

    let mut names: Vec<(String, String)> = Vec::new();
    for route in &service.routes {
        let placeholders = extract_path_params(&route.path);
        // Embedded fields are invisible to every emitter, so they cannot
        // satisfy or violate any binding rule.
        let fields: Vec<_> = route
            .request
            .iter()
            .flat_map(|request| request.fields.iter())
            .filter(|f| !f.embedded)
            .collect();

        for param in &placeholders {
            let bound = fields
                .iter()
                .any(|f| matches!(&f.binding, Binding::Path(tag) if tag == param));
            if !bound {
                return Err(GeneratorError::UnboundPathParam {
                    method: route.method.to_string(),
                    path: route.path.clone(),
                    param: (*param).to_string(),
                });
            }
        }

        for field in &fields {
            if let Binding::Path(tag) = &field.binding {
                if !placeholders.contains(&tag.as_str()) {
                    return Err(GeneratorError::UnknownPathParam {
                        method: route.method.to_string(),
                        path: route.path.clone(),
                        field: field.name.clone(),
                        param: tag.clone(),
                    });
                }
            }
        }

        let body_count = fields
            .iter()
            .filter(|f| f.binding == Binding::Body)
            .count();
        if body_count > 1 {
            return Err(GeneratorError::DuplicateBodyField {
                method: route.method.to_string(),
                path: route.path.clone(),
            });
        }
        if route.method.allows_body() && !fields.is_empty() && body_count == 0 {
            return Err(GeneratorError::MissingBodyField {
                method: route.method.to_string(),
                path: route.path.clone(),
            });
        }

        let name = function_name(route.method, &route.path, config.omit_url_prefix.as_deref());
        let descriptor = format!("{} {}", route.method, route.path);
        if let Some((_, first)) = names.iter().find(|(n, _)| *n == name) {
            return Err(GeneratorError::FunctionNameCollision {
                name,
                first: first.clone(),
                second: descriptor,
            });
        }
        names.push((name, descriptor));
    }

    check_interface_names(service)?;

    Ok(())
}

/// Walks every shape reachable from the routes and rejects two structurally
/// different named structs sharing a name; the generated module would
/// declare one interface and silently mistype the other references.
fn check_interface_names(service: &Service) -> Result<(), GeneratorError> {
    let mut seen: Vec<&StructShape> = Vec::new();
    for route in &service.routes {
        if let Some(request) = &route.request {
            for field in request.bound_fields() {
                check_shape(&field.shape, &mut seen)?;
            }
        }
        if let Some(response) = &route.response {
            check_shape(response, &mut seen)?;
        }
    }
    Ok(())
}

fn check_shape<'a>(
    shape: &'a TypeShape,
    seen: &mut Vec<&'a StructShape>,
) -> Result<(), GeneratorError> {
    match shape {
        TypeShape::Nullable(inner) | TypeShape::List(inner) => check_shape(inner, seen),
        TypeShape::Struct(s) => {
            if let Some(name) = &s.name {
                if let Some(previous) = seen.iter().find(|p| p.name == s.name) {
                    if *previous != s {
                        return Err(GeneratorError::ConflictingInterface { name: name.clone() });
                    }
                    return Ok(());
                }
                seen.push(s);
            }
            for field in &s.fields {
                if field.embedded || field.json_skip {
                    continue;
                }
                check_shape(&field.shape, seen)?;
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_define::{Authentication, Field, HttpMethod, Route};

    fn make_service(routes: Vec<Route>) -> Service {
        Service {
            name: "Test".to_string(),
            auth: Authentication::none(),
            routes,
        }
    }

    #[test]
    fn valid_service_passes() {
        let service = make_service(vec![
            Route::new(HttpMethod::Get, "/tasks/:id").request(StructShape::anonymous(vec![
                Field::new("id", TypeShape::Int).path("id"),
            ])),
            Route::new(HttpMethod::Post, "/tasks").request(StructShape::anonymous(vec![
                Field::new("task", TypeShape::Opaque).body(),
            ])),
        ]);
        assert!(validate_service(&service, &GenConfig::default()).is_ok());
    }

    #[test]
    fn placeholder_without_bound_field_is_rejected() {
        let service = make_service(vec![
            Route::new(HttpMethod::Get, "/tasks/:id").request(StructShape::anonymous(vec![
                Field::new("limit", TypeShape::Int).query("limit"),
            ])),
        ]);
        match validate_service(&service, &GenConfig::default()) {
            Err(GeneratorError::UnboundPathParam { param, .. }) => assert_eq!(param, "id"),
            other => panic!("Expected UnboundPathParam, got: {:?}", other),
        }
    }

    #[test]
    fn placeholder_on_requestless_route_is_rejected() {
        let service = make_service(vec![Route::new(HttpMethod::Get, "/tasks/:id")]);
        match validate_service(&service, &GenConfig::default()) {
            Err(GeneratorError::UnboundPathParam { param, .. }) => assert_eq!(param, "id"),
            other => panic!("Expected UnboundPathParam, got: {:?}", other),
        }
    }

    #[test]
    fn stray_path_binding_is_rejected() {
        let service = make_service(vec![
            Route::new(HttpMethod::Get, "/tasks").request(StructShape::anonymous(vec![
                Field::new("id", TypeShape::Int).path("id"),
            ])),
        ]);
        match validate_service(&service, &GenConfig::default()) {
            Err(GeneratorError::UnknownPathParam { field, param, .. }) => {
                assert_eq!(field, "id");
                assert_eq!(param, "id");
            }
            other => panic!("Expected UnknownPathParam, got: {:?}", other),
        }
    }

    #[test]
    fn body_verb_without_body_field_is_rejected() {
        let service = make_service(vec![
            Route::new(HttpMethod::Post, "/tasks").request(StructShape::anonymous(vec![
                Field::new("limit", TypeShape::Int).query("limit"),
            ])),
        ]);
        match validate_service(&service, &GenConfig::default()) {
            Err(GeneratorError::MissingBodyField { method, path }) => {
                assert_eq!(method, "POST");
                assert_eq!(path, "/tasks");
            }
            other => panic!("Expected MissingBodyField, got: {:?}", other),
        }
    }

    #[test]
    fn body_verb_with_empty_request_passes() {
        let service = make_service(vec![
            Route::new(HttpMethod::Post, "/ping").request(StructShape::anonymous(vec![])),
        ]);
        assert!(validate_service(&service, &GenConfig::default()).is_ok());
    }

    #[test]
    fn no_body_verb_without_body_field_passes() {
        let service = make_service(vec![
            Route::new(HttpMethod::Delete, "/tasks/:id").request(StructShape::anonymous(vec![
                Field::new("id", TypeShape::Int).path("id"),
            ])),
        ]);
        assert!(validate_service(&service, &GenConfig::default()).is_ok());
    }

    #[test]
    fn duplicate_body_fields_are_rejected() {
        let service = make_service(vec![
            Route::new(HttpMethod::Post, "/tasks").request(StructShape::anonymous(vec![
                Field::new("a", TypeShape::Opaque).body(),
                Field::new("b", TypeShape::Opaque).body(),
            ])),
        ]);
        assert!(matches!(
            validate_service(&service, &GenConfig::default()),
            Err(GeneratorError::DuplicateBodyField { .. })
        ));
    }

    #[test]
    fn auth_without_login_path_is_rejected() {
        let mut service = make_service(vec![]);
        service.auth = Authentication {
            scheme: quill_define::AuthScheme::Bearer,
            login_path: None,
        };
        match validate_service(&service, &GenConfig::default()) {
            Err(GeneratorError::MissingLoginPath { scheme }) => assert_eq!(scheme, "BEARER"),
            other => panic!("Expected MissingLoginPath, got: {:?}", other),
        }
    }

    #[test]
    fn function_name_collision_is_detected() {
        // "/tasks.json" and "/tasks_json" both sanitize to get_tasks_json
        let service = make_service(vec![
            Route::new(HttpMethod::Get, "/tasks.json"),
            Route::new(HttpMethod::Get, "/tasks_json"),
        ]);
        match validate_service(&service, &GenConfig::default()) {
            Err(GeneratorError::FunctionNameCollision { name, first, second }) => {
                assert_eq!(name, "get_tasks_json");
                assert_eq!(first, "GET /tasks.json");
                assert_eq!(second, "GET /tasks_json");
            }
            other => panic!("Expected FunctionNameCollision, got: {:?}", other),
        }
    }

    #[test]
    fn same_path_different_methods_do_not_collide() {
        let service = make_service(vec![
            Route::new(HttpMethod::Get, "/tasks"),
            Route::new(HttpMethod::Post, "/tasks").request(StructShape::anonymous(vec![
                Field::new("task", TypeShape::Opaque).body(),
            ])),
        ]);
        assert!(validate_service(&service, &GenConfig::default()).is_ok());
    }

    #[test]
    fn omit_prefix_can_introduce_collisions() {
        let service = make_service(vec![
            Route::new(HttpMethod::Get, "/api/tasks"),
            Route::new(HttpMethod::Get, "/tasks"),
        ]);
        assert!(validate_service(&service, &GenConfig::default()).is_ok());
        assert!(matches!(
            validate_service(&service, &GenConfig::new().omit_prefix("/api")),
            Err(GeneratorError::FunctionNameCollision { .. })
        ));
    }

    #[test]
    fn conflicting_interface_names_are_rejected() {
        let a = StructShape::named("Task", vec![Field::new("id", TypeShape::Int)]);
        let b = StructShape::named("Task", vec![Field::new("id", TypeShape::String)]);
        let service = make_service(vec![
            Route::new(HttpMethod::Get, "/a").response(TypeShape::Struct(a)),
            Route::new(HttpMethod::Get, "/b").response(TypeShape::Struct(b)),
        ]);
        match validate_service(&service, &GenConfig::default()) {
            Err(GeneratorError::ConflictingInterface { name }) => assert_eq!(name, "Task"),
            other => panic!("Expected ConflictingInterface, got: {:?}", other),
        }
    }

    #[test]
    fn identical_shared_shapes_are_fine() {
        let task = StructShape::named("Task", vec![Field::new("id", TypeShape::Int)]);
        let service = make_service(vec![
            Route::new(HttpMethod::Get, "/a").response(TypeShape::Struct(task.clone())),
            Route::new(HttpMethod::Get, "/b").response(TypeShape::Struct(task)),
        ]);
        assert!(validate_service(&service, &GenConfig::default()).is_ok());
    }

    #[test]
    fn error_display_is_actionable() {
        let service = make_service(vec![
            Route::new(HttpMethod::Post, "/tasks").request(StructShape::anonymous(vec![
                Field::new("limit", TypeShape::Int).query("limit"),
            ])),
        ]);
        let err = validate_service(&service, &GenConfig::default()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("POST"));
        assert!(msg.contains("/tasks"));
        assert!(msg.contains(".body()"));
    }
}
