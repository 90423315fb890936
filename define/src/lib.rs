//! Quill Descriptor Library
//!
//! This crate provides types (primitives) for describing HTTP route surfaces
//! in a declarative way. These descriptors are consumed by the `quill-gen`
//! binary to generate a typed TypeScript client module.
//!
//! ## Core Types
//!
//! ### Route Types
//!
//! - [`Service`] - A complete service surface: name, authentication, routes
//! - [`Route`] - A single route with method, path template, and shapes
//! - [`HttpMethod`] - HTTP methods (GET, POST, PUT, etc.)
//! - [`Authentication`] - Authentication descriptor (scheme + login path)
//! - [`AuthScheme`] - Supported schemes (Bearer, Basic, ApiKey, None)
//!
//! ### Shape Types
//!
//! - [`TypeShape`] - Recursive structural type descriptor
//! - [`StructShape`] - Named or anonymous struct shape with ordered fields
//! - [`Field`] - A struct field with its binding and JSON directives
//! - [`Binding`] - Where a field's value flows: path, query, header, or body
//!
//! ## Examples
//!
//! Describe a small authenticated service:
//!
//! ```
//! use quill_define::{
//!     Authentication, Field, HttpMethod, Route, Service, StructShape, TypeShape,
//! };
//!
//! let service = Service {
//!     name: "Notes".to_string(),
//!     auth: Authentication::bearer("/auth/login"),
//!     routes: vec![
//!         Route::new(HttpMethod::Get, "/notes/:id")
//!             .request(StructShape::anonymous(vec![
//!                 Field::new("id", TypeShape::Int).path("id"),
//!             ]))
//!             .response(TypeShape::Struct(StructShape::named(
//!                 "Note",
//!                 vec![
//!                     Field::new("id", TypeShape::Int),
//!                     Field::new("text", TypeShape::String),
//!                 ],
//!             ))),
//!     ],
//! };
//!
//! assert_eq!(service.name, "Notes");
//! assert_eq!(service.routes.len(), 1);
//! ```
//!
//! ## Service Definitions
//!
//! Actual service definitions are in the separate `quill-definitions` crate,
//! which uses these primitives to describe real route surfaces.

pub mod auth;
pub mod prelude;
pub mod route;
pub mod shape;

// Re-export main types at crate root
pub use auth::{AuthScheme, Authentication};
pub use route::{HttpMethod, Route, Service};
pub use shape::{Binding, Field, StructShape, TypeShape};
