//! Quill code generator library.
//!
//! This crate generates a typed TypeScript client module from service
//! definitions created with `quill-define`. The generated module includes:
//!
//! - Module state (`baseUrl`, unauthorized hook) with setter functions
//! - An `ApiError` class and a shared `fetchJson<T>` helper
//! - One exported interface per distinct named struct shape
//! - One exported async function per route
//! - A `login(username, password)` helper when authentication is configured
//!
//! ## Modules
//!
//! - [`builder`] - Indentation-aware text accumulator shared by all emitters
//! - [`codegen`] - Emitters for individual components (preamble, interfaces,
//!   route functions, type expressions)
//! - [`config`] - Generation options (URL prefix stripping)
//! - [`naming`] - Route-function name derivation
//! - [`output`] - Final assembly and file writing
//! - [`parser`] - Path placeholder extraction
//! - [`validation`] - Pre-generation validation of service definitions
//! - [`errors`] - Error types for the generator
//!
//! ## Example Usage
//!
//! ```
//! use quill_definitions::taskhub::define_taskhub_service;
//! use quill_gen::config::GenConfig;
//! use quill_gen::output::generate;
//!
//! let service = define_taskhub_service();
//! let code = generate(&service, &GenConfig::default()).unwrap();
//! assert!(code.contains("export async function get_api_tasks"));
//! ```
//!
//! ## Generated Module Structure
//!
//! For a service with a `GET /api/tasks/:id` route returning a `Task`:
//!
//! ```text
//! // Module preamble: baseUrl, hooks, ApiError, fetchJson, login
//! export function setBaseUrl(url: string) { ... }
//!
//! // One interface per named struct
//! export interface Task { ... }
//!
//! // One function per route
//! export async function get_api_tasks_id(id: number): Promise<Task> { ... }
//! ```

pub mod builder;
pub mod codegen;
pub mod config;
pub mod errors;
pub mod naming;
pub mod output;
pub mod parser;
pub mod validation;
