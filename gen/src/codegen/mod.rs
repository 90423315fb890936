//! Code generation modules for quill.
//!
//! This module contains the emitters that produce TypeScript source text
//! from service definitions. Each submodule handles a specific component of
//! the generated client module.
//!
//! ## Submodules
//!
//! - [`preamble`] - Module state, auth headers, `ApiError`, `fetchJson`,
//!   and the `login` helper
//! - [`interfaces`] - Exported interfaces for named struct shapes
//! - [`routes`] - One exported async function per route
//! - [`types`] - Mapping from structural shapes to TypeScript type
//!   expressions
//!
//! ## Code Generation Flow
//!
//! 1. The preamble is emitted once via [`emit_preamble`]
//! 2. Every distinct named struct collected by [`collect_interfaces`] is
//!    emitted via [`emit_interface`]
//! 3. Each route is emitted via [`emit_route_function`], which maps types
//!    through [`type_expr`]
//!
//! All emitters write into a shared [`CodeBuilder`](crate::builder::CodeBuilder);
//! see [`crate::output`] for the assembly and file writing logic.

pub mod interfaces;
pub mod preamble;
pub mod routes;
pub mod types;

pub use interfaces::{collect_interfaces, emit_interface};
pub use preamble::emit_preamble;
pub use routes::emit_route_function;
pub use types::{response_expr, type_expr};
