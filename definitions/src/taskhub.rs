//! TaskHub service definition.
//!
//! A task-tracker backend used as the primary generation target. The route
//! set deliberately covers the whole binding vocabulary:
//!
//! - `GET /api/tasks` - query-bound filtering (two query fields)
//! - `GET /api/tasks/:id` - path-bound lookup
//! - `POST /api/tasks` - JSON body plus a header-bound request id
//! - `PUT /api/tasks/:id` - path and body on the same route
//! - `DELETE /api/tasks/:id` - no-body verb, void response
//! - `GET /api/users/:id/tasks` - path and query combined, array response
//!
//! The shapes exercise JSON renames, omit-empty widening, `json:"-"`
//! exclusion, embedded-field skipping, nullable references, and an inline
//! anonymous struct.
//!
//! ## Examples
//!
//! ```
//! use quill_definitions::taskhub::define_taskhub_service;
//!
//! let service = define_taskhub_service();
//! assert_eq!(service.name, "TaskHub");
//! assert!(service.auth.scheme.requires_credentials());
//! ```

use quill_define::{
    Authentication, Field, HttpMethod, Route, Service, StructShape, TypeShape,
};

/// The `User` shape referenced from tasks.
fn user_shape() -> StructShape {
    StructShape::named(
        "User",
        vec![
            Field::new("id", TypeShape::Int).json("id"),
            Field::new("login", TypeShape::String).json("login"),
            Field::new("email", TypeShape::nullable(TypeShape::String)).json("email"),
        ],
    )
}

/// The central `Task` shape.
fn task_shape() -> StructShape {
    StructShape::named(
        "Task",
        vec![
            Field::new("id", TypeShape::Int).json("id"),
            Field::new("title", TypeShape::String).json("title"),
            Field::new("done", TypeShape::Bool).json("completed"),
            Field::new("tags", TypeShape::list(TypeShape::String))
                .json("tags")
                .omit_empty(),
            Field::new("assignee", TypeShape::nullable(TypeShape::Struct(user_shape())))
                .json("assignee"),
            Field::new(
                "meta",
                TypeShape::Struct(StructShape::anonymous(vec![
                    Field::new("created", TypeShape::String).json("created"),
                    Field::new("updated", TypeShape::String).json("updated"),
                ])),
            )
            .json("meta")
            .omit_empty(),
            // Server-side revision counter, never serialized to clients
            Field::new("revision", TypeShape::Int).json_skip(),
            // Promoted audit mixin; invisible to the generated client
            Field::new("AuditMeta", TypeShape::Opaque).embedded(),
        ],
    )
}

/// Paged task listing returned by the collection route.
fn task_page_shape() -> StructShape {
    StructShape::named(
        "TaskPage",
        vec![
            Field::new("tasks", TypeShape::list(TypeShape::Struct(task_shape()))).json("tasks"),
            Field::new("total", TypeShape::Int).json("total"),
            Field::new("next_cursor", TypeShape::String)
                .json("next_cursor")
                .omit_empty(),
        ],
    )
}

/// Creation payload for `POST /api/tasks`.
fn create_task_shape() -> StructShape {
    StructShape::named(
        "CreateTask",
        vec![
            Field::new("title", TypeShape::String).json("title"),
            Field::new("tags", TypeShape::list(TypeShape::String))
                .json("tags")
                .omit_empty(),
            Field::new("assignee_id", TypeShape::nullable(TypeShape::Int)).json("assignee_id"),
        ],
    )
}

/// Partial-update payload for `PUT /api/tasks/:id`.
fn update_task_shape() -> StructShape {
    StructShape::named(
        "UpdateTask",
        vec![
            Field::new("title", TypeShape::String).json("title").omit_empty(),
            Field::new("done", TypeShape::Bool).json("completed").omit_empty(),
        ],
    )
}

/// Creates the TaskHub service definition.
///
/// Bearer-token authentication with a `/auth/login` endpoint, six routes
/// covering every binding kind.
///
/// ## Examples
///
/// ```
/// use quill_definitions::taskhub::define_taskhub_service;
///
/// let service = define_taskhub_service();
/// assert_eq!(service.routes.len(), 6);
/// assert_eq!(service.auth.login_path.as_deref(), Some("/auth/login"));
/// ```
pub fn define_taskhub_service() -> Service {
    Service {
        name: "TaskHub".to_string(),
        auth: Authentication::bearer("/auth/login"),
        routes: vec![
            // =================================================================
            // Task collection
            // =================================================================
            Route::new(HttpMethod::Get, "/api/tasks")
                .request(StructShape::anonymous(vec![
                    Field::new("status", TypeShape::String).query("status"),
                    Field::new("limit", TypeShape::Int).query("limit"),
                ]))
                .response(TypeShape::Struct(task_page_shape())),
            Route::new(HttpMethod::Post, "/api/tasks")
                .request(StructShape::anonymous(vec![
                    Field::new("task", TypeShape::Struct(create_task_shape())).body(),
                    Field::new("requestId", TypeShape::String).header("X-Request-Id"),
                ]))
                .response(TypeShape::Struct(task_shape())),
            // =================================================================
            // Single task
            // =================================================================
            Route::new(HttpMethod::Get, "/api/tasks/:id")
                .request(StructShape::anonymous(vec![
                    Field::new("id", TypeShape::Int).path("id"),
                ]))
                .response(TypeShape::Struct(task_shape())),
            Route::new(HttpMethod::Put, "/api/tasks/:id")
                .request(StructShape::anonymous(vec![
                    Field::new("id", TypeShape::Int).path("id"),
                    Field::new("patch", TypeShape::Struct(update_task_shape())).body(),
                ]))
                .response(TypeShape::Struct(task_shape())),
            Route::new(HttpMethod::Delete, "/api/tasks/:id").request(StructShape::anonymous(
                vec![Field::new("id", TypeShape::Int).path("id")],
            )),
            // =================================================================
            // Per-user views
            // =================================================================
            Route::new(HttpMethod::Get, "/api/users/:id/tasks")
                .request(StructShape::anonymous(vec![
                    Field::new("id", TypeShape::Int).path("id"),
                    Field::new("status", TypeShape::String).query("status"),
                ]))
                .response(TypeShape::list(TypeShape::Struct(task_shape()))),
        ],
    }
}
