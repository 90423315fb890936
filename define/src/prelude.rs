//! Convenient re-exports for working with quill descriptors.
//!
//! This prelude provides all the core types needed to describe a service
//! surface.
//!
//! ## Examples
//!
//! ```
//! use quill_define::prelude::*;
//!
//! let service = Service {
//!     name: "Tasks".to_string(),
//!     auth: Authentication::bearer("/auth/login"),
//!     routes: vec![
//!         Route::new(HttpMethod::Get, "/tasks/:id")
//!             .request(StructShape::anonymous(vec![
//!                 Field::new("id", TypeShape::Int).path("id"),
//!             ])),
//!     ],
//! };
//!
//! assert_eq!(service.routes.len(), 1);
//! ```

pub use crate::auth::{AuthScheme, Authentication};
pub use crate::route::{HttpMethod, Route, Service};
pub use crate::shape::{Binding, Field, StructShape, TypeShape};
