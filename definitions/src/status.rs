//! Status service definition.
//!
//! A minimal unauthenticated surface. Exists mainly to exercise the
//! no-auth generation path: the emitted module must contain no credential
//! headers and no `login` export.

use quill_define::{
    Authentication, Field, HttpMethod, Route, Service, StructShape, TypeShape,
};

/// Creates the Status service definition.
///
/// ## Examples
///
/// ```
/// use quill_definitions::status::define_status_service;
///
/// let service = define_status_service();
/// assert_eq!(service.name, "Status");
/// assert!(!service.auth.scheme.requires_credentials());
/// ```
pub fn define_status_service() -> Service {
    Service {
        name: "Status".to_string(),
        auth: Authentication::none(),
        routes: vec![
            Route::new(HttpMethod::Get, "/healthz").response(TypeShape::Struct(
                StructShape::named(
                    "Health",
                    vec![
                        Field::new("status", TypeShape::String).json("status"),
                        Field::new("uptime", TypeShape::Float).json("uptime_seconds"),
                    ],
                ),
            )),
            Route::new(HttpMethod::Get, "/metrics/:name")
                .request(StructShape::anonymous(vec![
                    Field::new("name", TypeShape::String).path("name"),
                ]))
                .response(TypeShape::Opaque),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_define::AuthScheme;

    #[test]
    fn status_is_unauthenticated() {
        let service = define_status_service();
        assert_eq!(service.auth.scheme, AuthScheme::None);
        assert!(service.auth.login_path.is_none());
    }

    #[test]
    fn healthz_route_has_no_request_shape() {
        let service = define_status_service();
        let healthz = &service.routes[0];
        assert!(healthz.request.is_none());
        assert!(healthz.response.is_some());
    }
}
