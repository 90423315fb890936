//! Core types for route surfaces.
//!
//! This module provides the fundamental types the generator consumes:
//!
//! - [`Service`] - The top-level service surface
//! - [`Route`] - Individual route descriptors
//! - [`HttpMethod`] - HTTP method enumeration

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::auth::Authentication;
use crate::shape::{StructShape, TypeShape};

/// HTTP methods supported by route descriptors.
///
/// ## Examples
///
/// Parse from string:
///
/// ```
/// use std::str::FromStr;
/// use quill_define::HttpMethod;
///
/// let method = HttpMethod::from_str("GET").unwrap();
/// assert_eq!(method, HttpMethod::Get);
/// ```
///
/// Display as uppercase:
///
/// ```
/// use quill_define::HttpMethod;
///
/// assert_eq!(HttpMethod::Post.to_string(), "POST");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpMethod {
    /// HTTP GET - Retrieve a resource
    Get,
    /// HTTP POST - Create a new resource
    Post,
    /// HTTP PUT - Replace a resource entirely
    Put,
    /// HTTP PATCH - Partially update a resource
    Patch,
    /// HTTP DELETE - Remove a resource
    Delete,
    /// HTTP HEAD - Get headers only (no body)
    Head,
    /// HTTP OPTIONS - Get allowed methods for a resource
    Options,
}

impl HttpMethod {
    /// Returns true if requests with this method carry a body.
    ///
    /// GET, HEAD, DELETE, and OPTIONS are the no-body verbs; generated
    /// functions for them never set a request body.
    ///
    /// ## Examples
    ///
    /// ```
    /// use quill_define::HttpMethod;
    ///
    /// assert!(HttpMethod::Post.allows_body());
    /// assert!(!HttpMethod::Get.allows_body());
    /// assert!(!HttpMethod::Delete.allows_body());
    /// ```
    pub fn allows_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }
}

/// A single route descriptor.
///
/// Binds an HTTP method and a path template to the structural shapes of its
/// request and response. Path templates use `:name` placeholders that must
/// pair one-to-one with path-bound request fields.
///
/// Routes are immutable once constructed; the generator consumes them
/// read-only.
///
/// ## Examples
///
/// A GET route with a path parameter:
///
/// ```
/// use quill_define::{Field, HttpMethod, Route, StructShape, TypeShape};
///
/// let route = Route::new(HttpMethod::Get, "/users/:id")
///     .request(StructShape::anonymous(vec![
///         Field::new("id", TypeShape::Int).path("id"),
///     ]))
///     .response(TypeShape::Struct(StructShape::named(
///         "User",
///         vec![Field::new("name", TypeShape::String)],
///     )));
///
/// assert!(route.path.contains(":id"));
/// assert!(route.request.is_some());
/// ```
///
/// A fire-and-forget route with neither shape:
///
/// ```
/// use quill_define::{HttpMethod, Route};
///
/// let route = Route::new(HttpMethod::Get, "/healthz");
/// assert!(route.request.is_none());
/// assert!(route.response.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// HTTP method for this route.
    pub method: HttpMethod,
    /// Path template (e.g. `/tasks/:id`).
    pub path: String,
    /// Request shape, or None for routes taking no input.
    ///
    /// Bound fields on this shape become the generated function's
    /// parameters; the body-bound field (if any) becomes the payload.
    pub request: Option<StructShape>,
    /// Response shape, or None for routes with no meaningful body.
    pub response: Option<TypeShape>,
}

impl Route {
    /// Creates a route with no request or response shape.
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            request: None,
            response: None,
        }
    }

    /// Sets the request shape.
    pub fn request(mut self, shape: StructShape) -> Self {
        self.request = Some(shape);
        self
    }

    /// Sets the response shape.
    pub fn response(mut self, shape: TypeShape) -> Self {
        self.response = Some(shape);
        self
    }
}

/// A complete service surface.
///
/// Captures everything needed to generate a typed client module: the
/// service name, its authentication descriptor, and the ordered route set.
///
/// ## Examples
///
/// ```
/// use quill_define::{Authentication, HttpMethod, Route, Service};
///
/// let service = Service {
///     name: "Status".to_string(),
///     auth: Authentication::none(),
///     routes: vec![Route::new(HttpMethod::Get, "/healthz")],
/// };
///
/// assert_eq!(service.routes.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// Human-readable service name; appears in the generated module header.
    pub name: String,
    /// Authentication descriptor consumed by the preamble emitter.
    pub auth: Authentication,
    /// Routes in declaration order. Generation preserves this order.
    pub routes: Vec<Route>,
}
