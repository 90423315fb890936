//! Error types for the quill generator.

use thiserror::Error;

/// Errors that can occur during client generation.
///
/// All validation variants are raised before any output is produced;
/// generation either emits a complete module or nothing.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// A path template placeholder has no path-bound request field.
    #[error(
        "route {method} {path} has a ':{param}' placeholder but no field bound to path parameter '{param}'"
    )]
    UnboundPathParam {
        /// HTTP method of the offending route.
        method: String,
        /// Path template of the offending route.
        path: String,
        /// The unmatched placeholder name.
        param: String,
    },

    /// A path-bound field references a placeholder absent from the template.
    #[error(
        "route {method} {path} binds field '{field}' to path parameter '{param}', which does not appear in the path template"
    )]
    UnknownPathParam {
        /// HTTP method of the offending route.
        method: String,
        /// Path template of the offending route.
        path: String,
        /// The field carrying the stray binding.
        field: String,
        /// The placeholder name the field was bound to.
        param: String,
    },

    /// A body-carrying method has request fields but none bound as the body.
    #[error(
        "route {method} {path} carries a request body but no field is bound as the body. Suggestion: mark the payload field with .body()"
    )]
    MissingBodyField {
        /// HTTP method of the offending route.
        method: String,
        /// Path template of the offending route.
        path: String,
    },

    /// More than one field is bound as the request body.
    #[error("route {method} {path} binds more than one field as the request body")]
    DuplicateBodyField {
        /// HTTP method of the offending route.
        method: String,
        /// Path template of the offending route.
        path: String,
    },

    /// An authenticated service has no login path for the login helper.
    #[error("authentication scheme {scheme} requires a login path")]
    MissingLoginPath {
        /// The declared scheme.
        scheme: String,
    },

    /// Two routes derive the same generated function name.
    #[error(
        "routes '{first}' and '{second}' both generate the function name '{name}'"
    )]
    FunctionNameCollision {
        /// The colliding derived name.
        name: String,
        /// The route that claimed the name first.
        first: String,
        /// The route that collided with it.
        second: String,
    },

    /// Two structurally different struct shapes share an interface name.
    #[error(
        "two structurally different shapes both declare the interface name '{name}'"
    )]
    ConflictingInterface {
        /// The contested interface name.
        name: String,
    },

    /// Invalid generator configuration.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Failed to write the output file.
    #[error("Failed to write output file '{path}': {source}")]
    WriteError {
        /// The path that could not be written.
        path: String,
        #[source]
        source: std::io::Error,
    },
}
