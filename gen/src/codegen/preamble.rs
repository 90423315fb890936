//! Module preamble emission.
//!
//! Emitted once per generated module: the mutable module state (`baseUrl`,
//! unauthorized hook) with its setters, the `ApiError` class, the default
//! header derivation for the configured auth scheme, the shared
//! `fetchJson<T>` helper, and the `login` helper when authentication is
//! configured.

use quill_define::{AuthScheme, Service};

use crate::builder::CodeBuilder;

/// Emits the module preamble for a service.
///
/// With [`AuthScheme::None`] the emitted module contains no credential
/// header derivation and no `login` export.
pub fn emit_preamble(builder: &mut CodeBuilder, service: &Service) {
    builder.lines(&[
        "// Code generated by quill-gen. Do not edit manually.",
        "//",
    ]);
    builder.line(&format!("// Typed client for the {} HTTP API.", service.name));
    builder.blank();

    builder.lines(&[
        "let baseUrl = window.location.origin",
        "let unauthorizedHandler: (() => void) | null = null",
        "",
        "export function setBaseUrl(url: string) {",
        "  baseUrl = url",
        "}",
        "",
        "export function setUnauthorizedHandler(handler: () => void) {",
        "  unauthorizedHandler = handler",
        "}",
        "",
        "export class ApiError extends Error {",
        "  url: string",
        "  status: number",
        "  statusText: string",
        "",
        "  constructor(url: string, status: number, statusText: string) {",
        "    super(`Request to ${url} failed: ${status} ${statusText}`)",
        "    this.name = 'ApiError'",
        "    this.url = url",
        "    this.status = status",
        "    this.statusText = statusText",
        "  }",
        "}",
        "",
    ]);

    emit_base_config(builder, service.auth.scheme);

    builder.lines(&[
        "async function fetchJson<T>(url: string, init?: RequestInit): Promise<T> {",
        "  const headers: Record<string, string> = {",
        "    ...getBaseConfig().headers,",
        "    ...(init?.headers as Record<string, string> | undefined),",
        "  }",
        "  if (!headers['Content-Type']) {",
        "    headers['Content-Type'] = 'application/json'",
        "  }",
        "  if (!headers['Accept']) {",
        "    headers['Accept'] = 'application/json'",
        "  }",
        "  const response = await fetch(baseUrl + url, { ...init, headers })",
        "  if (response.status === 401 && unauthorizedHandler) {",
        "    unauthorizedHandler()",
        "  }",
        "  if (!response.ok) {",
        "    throw new ApiError(url, response.status, response.statusText)",
        "  }",
        "  if (response.status === 204) {",
        "    return undefined as unknown as T",
        "  }",
        "  return await response.json() as T",
        "}",
        "",
    ]);

    if service.auth.scheme.requires_credentials() {
        if let Some(login_path) = &service.auth.login_path {
            emit_login(builder, login_path);
        }
    }
}

/// Emits `getBaseConfig()`, deriving default headers from the auth scheme.
fn emit_base_config(builder: &mut CodeBuilder, scheme: AuthScheme) {
    builder.lines(&[
        "function getBaseConfig(): { headers: Record<string, string> } {",
        "  return {",
    ]);

    match scheme {
        AuthScheme::None => {
            builder.line("    headers: {},");
        }
        AuthScheme::Bearer | AuthScheme::BearerOauth2 => {
            builder.lines(&[
                "    headers: {",
                "      'Authorization': `Bearer ${localStorage.getItem('token')}`,",
                "    },",
            ]);
        }
        AuthScheme::Basic => {
            builder.lines(&[
                "    headers: {",
                "      'Authorization': `Basic ${btoa(`${localStorage.getItem('username')}:${localStorage.getItem('password')}`)}`,",
                "    },",
            ]);
        }
        AuthScheme::ApiKey => {
            builder.lines(&[
                "    headers: {",
                "      'X-API-Key': localStorage.getItem('apiKey') ?? '',",
                "    },",
            ]);
        }
    }

    builder.lines(&["  }", "}", ""]);
}

/// Emits the `login` helper posting URL-encoded credentials to the login
/// path and persisting the returned token.
fn emit_login(builder: &mut CodeBuilder, login_path: &str) {
    builder.lines(&[
        "export async function login(username: string, password: string): Promise<string> {",
    ]);
    builder.line(&format!(
        "  const response = await fetch(baseUrl + '{}', {{",
        login_path
    ));
    builder.lines(&[
        "    method: 'POST',",
        "    headers: { 'Content-Type': 'application/x-www-form-urlencoded' },",
        "    body: new URLSearchParams({ username, password }),",
        "  })",
        "  if (!response.ok) {",
    ]);
    builder.line(&format!(
        "    throw new ApiError('{}', response.status, response.statusText)",
        login_path
    ));
    builder.lines(&[
        "  }",
        "  const token = await response.text()",
        "  localStorage.setItem('token', token)",
        "  return token",
        "}",
        "",
    ]);
}
