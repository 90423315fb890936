//! Service definitions for quill client generation.
//!
//! This crate contains hand-written [`Service`](quill_define::Service)
//! literals built from `quill-define` primitives. Each module defines one
//! service surface and exposes a `define_*_service()` constructor consumed
//! by the `quill-gen` binary and its tests.
//!
//! ## Services
//!
//! - [`taskhub`] - Task tracker backend (bearer auth, the full tag
//!   vocabulary: path, query, header, body, json renames, omit-empty)
//! - [`status`] - Unauthenticated health/metrics surface
//!
//! ## Examples
//!
//! ```
//! use quill_definitions::taskhub::define_taskhub_service;
//!
//! let service = define_taskhub_service();
//! assert_eq!(service.name, "TaskHub");
//! assert!(service.routes.len() >= 6);
//! ```

pub mod prelude;
pub mod status;
pub mod taskhub;

pub use status::define_status_service;
pub use taskhub::define_taskhub_service;
