//! Path parameter extraction from route templates.
//!
//! Extracts parameter names from URL path templates that use `:param`
//! segment syntax.

/// Extracts parameter names from a path template.
///
/// A parameter is a path segment starting with `:`. Order follows the
/// template left to right.
///
/// ## Examples
///
/// ```
/// use quill_gen::parser::extract_path_params;
///
/// assert_eq!(extract_path_params("/tasks"), vec![] as Vec<&str>);
/// assert_eq!(extract_path_params("/tasks/:id"), vec!["id"]);
/// assert_eq!(
///     extract_path_params("/users/:user_id/tasks/:task_id"),
///     vec!["user_id", "task_id"]
/// );
/// ```
pub fn extract_path_params(path: &str) -> Vec<&str> {
    path.split('/')
        .filter_map(|segment| segment.strip_prefix(':'))
        .filter(|param| !param.is_empty())
        .collect()
}
