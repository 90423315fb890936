//! Output assembly and file writing for generated modules.
//!
//! This module handles the final phase of generation: validating the input,
//! assembling all emitted pieces into one TypeScript module, and writing it
//! to disk atomically.
//!
//! ## Module Layout
//!
//! ```text
//! // preamble: header, state, setters, ApiError, getBaseConfig, fetchJson, login
//! // interfaces: one per distinct named struct, first-reference order
//! // route functions: one per route, declaration order
//! // trailer
//! ```
//!
//! ## Safety Guarantees
//!
//! - **Validation first**: malformed definitions abort before any output
//!   exists (see [`crate::validation`])
//! - **Atomic writes**: temp file + rename, so the output path never holds
//!   a partially-written module
//! - **Determinism**: generation is a pure function of the service
//!   definition and the configuration; identical inputs produce
//!   byte-identical output

use std::fs;
use std::path::Path;

use quill_define::Service;

use crate::builder::CodeBuilder;
use crate::codegen::{collect_interfaces, emit_interface, emit_preamble, emit_route_function};
use crate::config::GenConfig;
use crate::errors::GeneratorError;
use crate::validation::validate_service;

/// Generates the complete TypeScript client module for a service.
///
/// ## Errors
///
/// Returns the first validation failure; no partial output is produced.
///
/// ## Examples
///
/// ```
/// use quill_definitions::status::define_status_service;
/// use quill_gen::config::GenConfig;
/// use quill_gen::output::generate;
///
/// let code = generate(&define_status_service(), &GenConfig::default()).unwrap();
/// assert!(code.contains("export async function get_healthz"));
/// ```
pub fn generate(service: &Service, config: &GenConfig) -> Result<String, GeneratorError> {
    validate_service(service, config)?;

    let mut builder = CodeBuilder::new();
    emit_preamble(&mut builder, service);

    for shape in collect_interfaces(service) {
        emit_interface(&mut builder, shape);
        builder.blank();
    }

    for route in &service.routes {
        emit_route_function(&mut builder, route, config);
        builder.blank();
    }

    builder.line("// end of generated code");
    Ok(builder.finish())
}

/// Writes content to a file atomically using temp file + rename.
///
/// The file is never left in a partially-written state: other processes see
/// either the old or the new content, never a mix.
///
/// ## Errors
///
/// Returns [`GeneratorError::WriteError`] if parent directories cannot be
/// created, the temp file cannot be written, or the rename fails.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), GeneratorError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| GeneratorError::WriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).map_err(|e| GeneratorError::WriteError {
        path: temp_path.display().to_string(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| GeneratorError::WriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// Generates the client module and writes it to the given path.
///
/// The output file is overwritten on every run; there are no
/// incremental/merge semantics. In dry-run mode the module is printed to
/// stdout instead of written.
///
/// ## Returns
///
/// The generated module text (useful for dry-run mode and tests).
///
/// ## Errors
///
/// Returns an error if validation fails or the file cannot be written.
pub fn generate_and_write(
    service: &Service,
    config: &GenConfig,
    path: &Path,
    dry_run: bool,
) -> Result<String, GeneratorError> {
    let code = generate(service, config)?;

    if dry_run {
        println!("{}", code);
    } else {
        write_atomic(path, &code)?;
    }

    Ok(code)
}
