//! Authentication descriptors for generated clients.
//!
//! This module describes how the *generated* client authenticates against
//! its server. The generator only reads the declared scheme and the login
//! endpoint path; the server-side authentication subsystem itself is out of
//! scope.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Authentication scheme declared for a service.
///
/// The scheme determines which default header the generated client derives
/// from browser storage on every request.
///
/// ## Examples
///
/// ```
/// use quill_define::AuthScheme;
///
/// assert_eq!(AuthScheme::default(), AuthScheme::None);
/// assert_eq!(AuthScheme::Bearer.to_string(), "BEARER");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum AuthScheme {
    /// No authentication; the client sends no credential header.
    #[default]
    None,
    /// Bearer token in the Authorization header.
    Bearer,
    /// Bearer token obtained via an OAuth2 flow. Header-wise identical to
    /// [`AuthScheme::Bearer`].
    BearerOauth2,
    /// HTTP Basic authentication with base64-encoded credentials.
    Basic,
    /// API key in the `X-API-Key` header.
    ApiKey,
}

impl AuthScheme {
    /// Returns true if this scheme sends a credential header.
    pub fn requires_credentials(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Authentication descriptor for a service.
///
/// Combines the scheme with the path of the login endpoint the generated
/// `login()` helper posts credentials to. A login path is required for every
/// scheme except [`AuthScheme::None`]; the generator validates this.
///
/// ## Examples
///
/// ```
/// use quill_define::{AuthScheme, Authentication};
///
/// let auth = Authentication::bearer("/auth/login");
/// assert_eq!(auth.scheme, AuthScheme::Bearer);
/// assert_eq!(auth.login_path.as_deref(), Some("/auth/login"));
///
/// let open = Authentication::none();
/// assert!(!open.scheme.requires_credentials());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authentication {
    /// Declared scheme.
    pub scheme: AuthScheme,
    /// Path of the login endpoint (e.g. `/auth/login`).
    ///
    /// Consumed by the generated `login()` helper; unused when the scheme
    /// is [`AuthScheme::None`].
    pub login_path: Option<String>,
}

impl Authentication {
    /// Creates a descriptor with no authentication.
    pub fn none() -> Self {
        Self::default()
    }

    /// Creates a bearer-token descriptor with the given login path.
    pub fn bearer(login_path: impl Into<String>) -> Self {
        Self {
            scheme: AuthScheme::Bearer,
            login_path: Some(login_path.into()),
        }
    }

    /// Creates an OAuth2 bearer-token descriptor with the given login path.
    pub fn bearer_oauth2(login_path: impl Into<String>) -> Self {
        Self {
            scheme: AuthScheme::BearerOauth2,
            login_path: Some(login_path.into()),
        }
    }

    /// Creates a basic-auth descriptor with the given login path.
    pub fn basic(login_path: impl Into<String>) -> Self {
        Self {
            scheme: AuthScheme::Basic,
            login_path: Some(login_path.into()),
        }
    }

    /// Creates an API-key descriptor with the given login path.
    pub fn api_key(login_path: impl Into<String>) -> Self {
        Self {
            scheme: AuthScheme::ApiKey,
            login_path: Some(login_path.into()),
        }
    }
}
