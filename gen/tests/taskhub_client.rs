//! Integration tests over the generated TaskHub client module.
//!
//! These tests run the full pipeline (definition → validation → emission)
//! and assert on the emitted TypeScript text: function surface, URL
//! construction, interface bodies, and authentication plumbing.

use quill_definitions::taskhub::define_taskhub_service;
use quill_gen::config::GenConfig;
use quill_gen::output::generate;

fn taskhub_module() -> String {
    generate(&define_taskhub_service(), &GenConfig::default()).expect("taskhub should generate")
}

// === module surface ===

#[test]
fn module_exports_one_function_per_route() {
    let code = taskhub_module();
    assert!(code.contains("export async function get_api_tasks(status: string, limit: number): Promise<TaskPage> {"));
    assert!(code.contains("export async function post_api_tasks(task: CreateTask, requestId: string): Promise<Task> {"));
    assert!(code.contains("export async function get_api_tasks_id(id: number): Promise<Task> {"));
    assert!(code.contains("export async function put_api_tasks_id(id: number, patch: UpdateTask): Promise<Task> {"));
    assert!(code.contains("export async function delete_api_tasks_id(id: number): Promise<void> {"));
    assert!(code.contains("export async function get_api_users_id_tasks(id: number, status: string): Promise<Array<Task>> {"));
    assert_eq!(code.matches("export async function ").count(), 7); // 6 routes + login
}

#[test]
fn module_exports_each_named_interface_once() {
    let code = taskhub_module();
    for name in ["TaskPage", "Task", "User", "CreateTask", "UpdateTask"] {
        assert_eq!(
            code.matches(&format!("export interface {} {{", name)).count(),
            1,
            "interface {name} should be declared exactly once"
        );
    }
}

#[test]
fn setters_and_error_class_are_exported() {
    let code = taskhub_module();
    assert!(code.contains("export function setBaseUrl(url: string) {"));
    assert!(code.contains("export function setUnauthorizedHandler(handler: () => void) {"));
    assert!(code.contains("export class ApiError extends Error {"));
}

// === URL construction ===

#[test]
fn path_params_are_replaced_and_escaped() {
    let code = taskhub_module();
    assert!(code.contains("let url = `/api/tasks/:id`"));
    assert!(code.contains("url = url.replace(':id', encodeURIComponent(String(id)))"));
}

#[test]
fn query_string_has_exactly_one_question_mark() {
    let code = taskhub_module();
    // Two query fields on GET /api/tasks: one `?`, one `&`, never `??`
    assert!(code.contains("url += `?status=${encodeURIComponent(String(status))}`"));
    assert!(code.contains("url += `&limit=${encodeURIComponent(String(limit))}`"));
    assert!(!code.contains("`?limit"));
}

#[test]
fn path_and_query_combine_on_one_route() {
    let code = taskhub_module();
    let function = code
        .split("export async function get_api_users_id_tasks")
        .nth(1)
        .expect("per-user route missing");
    let function = function.split("\n}\n").next().unwrap();
    assert!(function.contains("url = url.replace(':id', encodeURIComponent(String(id)))"));
    assert!(function.contains("url += `?status=${encodeURIComponent(String(status))}`"));
}

// === request config ===

#[test]
fn body_is_serialized_only_for_body_verbs() {
    let code = taskhub_module();
    assert!(code.contains("body: JSON.stringify(task),"));
    assert!(code.contains("body: JSON.stringify(patch),"));

    // The DELETE function must not carry a body
    let delete_fn = code
        .split("export async function delete_api_tasks_id")
        .nth(1)
        .unwrap()
        .split("\n}\n")
        .next()
        .unwrap();
    assert!(!delete_fn.contains("body:"));
}

#[test]
fn header_bound_fields_reach_the_config() {
    let code = taskhub_module();
    assert!(code.contains("'X-Request-Id': String(requestId),"));
}

#[test]
fn every_function_sets_its_method() {
    let code = taskhub_module();
    assert!(code.contains("method: 'GET',"));
    assert!(code.contains("method: 'POST',"));
    assert!(code.contains("method: 'PUT',"));
    assert!(code.contains("method: 'DELETE',"));
}

// === interfaces ===

#[test]
fn task_interface_applies_the_field_policy() {
    let code = taskhub_module();
    let interface = code
        .split("export interface Task {")
        .nth(1)
        .unwrap()
        .split("\n}\n")
        .next()
        .unwrap();

    // json renames
    assert!(interface.contains("completed: boolean"));
    assert!(!interface.contains("done:"));
    // omit-empty widening
    assert!(interface.contains("tags: Array<string> | undefined"));
    // nullable reference
    assert!(interface.contains("assignee: User | null"));
    // inline anonymous struct
    assert!(interface.contains("meta: {\n    created: string\n    updated: string\n  } | undefined"));
    // json:"-" and embedded fields are invisible
    assert!(!interface.contains("revision"));
    assert!(!interface.contains("AuditMeta"));
}

#[test]
fn interface_field_order_matches_declaration_order() {
    let code = taskhub_module();
    let interface = code
        .split("export interface User {")
        .nth(1)
        .unwrap()
        .split("\n}\n")
        .next()
        .unwrap();
    let id = interface.find("id: number").unwrap();
    let login = interface.find("login: string").unwrap();
    let email = interface.find("email: string | null").unwrap();
    assert!(id < login && login < email);
}

// === authentication ===

#[test]
fn bearer_auth_flows_into_base_config() {
    let code = taskhub_module();
    assert!(code.contains("'Authorization': `Bearer ${localStorage.getItem('token')}`,"));
}

#[test]
fn login_helper_targets_the_configured_path() {
    let code = taskhub_module();
    assert!(code.contains(
        "export async function login(username: string, password: string): Promise<string> {"
    ));
    assert!(code.contains("fetch(baseUrl + '/auth/login', {"));
    assert!(code.contains("localStorage.setItem('token', token)"));
}

// === whole-module properties ===

#[test]
fn generation_is_byte_identical_across_runs() {
    assert_eq!(taskhub_module(), taskhub_module());
}

#[test]
fn omit_prefix_renames_functions_without_touching_urls() {
    let config = GenConfig::new().omit_prefix("/api");
    let code = generate(&define_taskhub_service(), &config).expect("taskhub should generate");

    assert!(code.contains("export async function get_tasks("));
    assert!(code.contains("export async function get_users_id_tasks("));
    // Request URLs still carry the prefix
    assert!(code.contains("let url = `/api/tasks`"));
}

#[test]
fn module_ends_with_the_trailer() {
    assert!(taskhub_module().ends_with("// end of generated code\n"));
}
