//! Function-name derivation for generated route functions.
//!
//! Every route gets one exported TypeScript function whose name is derived
//! from the HTTP method and the path template:
//!
//! 1. The configured omit-prefix (if any) is removed from the path, first
//!    occurrence only.
//! 2. The lower-cased method is prepended.
//! 3. `/` becomes `_`, `:` and `@` are dropped, and any other character
//!    outside `[A-Za-z0-9_]` collapses to `_`.
//!
//! The derivation is pure; the prefix comes in as a parameter rather than
//! being read from the process environment mid-algorithm.

use quill_define::HttpMethod;

/// Derives the generated function name for a route.
///
/// ## Examples
///
/// ```
/// use quill_define::HttpMethod;
/// use quill_gen::naming::function_name;
///
/// assert_eq!(
///     function_name(HttpMethod::Get, "/users/:id", None),
///     "get_users_id"
/// );
/// assert_eq!(
///     function_name(HttpMethod::Post, "/api/v1/tasks", Some("/api/v1")),
///     "post_tasks"
/// );
/// ```
pub fn function_name(method: HttpMethod, path: &str, omit_prefix: Option<&str>) -> String {
    let path = match omit_prefix {
        Some(prefix) if !prefix.is_empty() => path.replacen(prefix, "", 1),
        _ => path.to_string(),
    };

    let mut name = method.to_string().to_lowercase();
    for c in path.chars() {
        match c {
            '/' => name.push('_'),
            ':' | '@' => {}
            c if c.is_ascii_alphanumeric() || c == '_' => name.push(c),
            _ => name.push('_'),
        }
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_get_route() {
        assert_eq!(function_name(HttpMethod::Get, "/tasks", None), "get_tasks");
    }

    #[test]
    fn path_param_colon_is_dropped() {
        assert_eq!(
            function_name(HttpMethod::Get, "/users/:id", None),
            "get_users_id"
        );
        assert_eq!(
            function_name(HttpMethod::Put, "/api/tasks/:id", None),
            "put_api_tasks_id"
        );
    }

    #[test]
    fn method_is_lowercased() {
        assert_eq!(
            function_name(HttpMethod::Delete, "/tasks/:id", None),
            "delete_tasks_id"
        );
    }

    #[test]
    fn at_sign_is_dropped() {
        assert_eq!(
            function_name(HttpMethod::Get, "/users/@me", None),
            "get_users_me"
        );
    }

    #[test]
    fn other_punctuation_collapses_to_underscore() {
        assert_eq!(
            function_name(HttpMethod::Get, "/tasks.json", None),
            "get_tasks_json"
        );
        assert_eq!(
            function_name(HttpMethod::Get, "/a-b", None),
            "get_a_b"
        );
    }

    #[test]
    fn omit_prefix_strips_first_occurrence_only() {
        assert_eq!(
            function_name(HttpMethod::Get, "/api/tasks", Some("/api")),
            "get_tasks"
        );
        // The second occurrence survives
        assert_eq!(
            function_name(HttpMethod::Get, "/api/proxy/api/tasks", Some("/api")),
            "get_proxy_api_tasks"
        );
    }

    #[test]
    fn absent_or_empty_prefix_strips_nothing() {
        assert_eq!(
            function_name(HttpMethod::Get, "/api/tasks", None),
            "get_api_tasks"
        );
        assert_eq!(
            function_name(HttpMethod::Get, "/api/tasks", Some("")),
            "get_api_tasks"
        );
    }

    #[test]
    fn derivation_is_deterministic() {
        let a = function_name(HttpMethod::Post, "/api/tasks/:id/@notes", Some("/api"));
        let b = function_name(HttpMethod::Post, "/api/tasks/:id/@notes", Some("/api"));
        assert_eq!(a, b);
        assert_eq!(a, "post_tasks_id_notes");
    }
}
