//! Generation options.
//!
//! Everything the generator consults besides the service definition itself
//! lives here and is passed in explicitly at call time. In particular the
//! "URL prefix to omit" used during function naming is a configuration
//! value, not an ambient environment lookup.

/// Options controlling a single generation run.
///
/// ## Examples
///
/// ```
/// use quill_gen::config::GenConfig;
///
/// let config = GenConfig::default();
/// assert!(config.omit_url_prefix.is_none());
///
/// let stripped = GenConfig::new().omit_prefix("/api/v1");
/// assert_eq!(stripped.omit_url_prefix.as_deref(), Some("/api/v1"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct GenConfig {
    /// URL prefix removed from route paths before function-name derivation.
    ///
    /// Absent means no stripping occurs. Only the first occurrence in a
    /// path is removed.
    pub omit_url_prefix: Option<String>,
}

impl GenConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the URL prefix to omit from generated function names.
    pub fn omit_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.omit_url_prefix = Some(prefix.into());
        self
    }
}
