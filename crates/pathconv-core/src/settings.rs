//! Settings for pathconv.
//!
//! This module provides the [`Settings`] struct, which controls how the
//! default convertor registry is built and how logging is configured, and
//! [`LazySettings`], a globally-accessible, lazily-initialized settings instance.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{ConvertorError, ConvertorResult};

/// The complete set of convertor settings.
///
/// # Examples
///
/// ```
/// use pathconv_core::settings::Settings;
///
/// let settings = Settings::default();
/// assert!(settings.debug);
/// assert!(!settings.strict_float_pattern);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Whether debug mode is enabled. Selects human-readable log output.
    pub debug: bool,
    /// The log level filter (e.g. "info", "debug", "pathconv_http=trace").
    pub log_level: String,
    /// Escape the dot in the `float` pattern so it only matches a literal `.`.
    ///
    /// Off by default: the compatible pattern `[0-9]+(.[0-9]+)?` accepts any
    /// single character between the two digit runs.
    pub strict_float_pattern: bool,
    /// Names of opt-in convertors to add to the default registry (e.g. `"uuid"`).
    pub extra_convertors: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: true,
            log_level: "info".to_string(),
            strict_float_pattern: false,
            extra_convertors: Vec::new(),
        }
    }
}

/// A lazily-initialized, globally-accessible settings container.
///
/// Call [`configure`](LazySettings::configure) once at startup, then use
/// [`get`](LazySettings::get) to read the settings. Reading before
/// configuration yields the defaults.
pub struct LazySettings {
    inner: OnceLock<Settings>,
}

impl Default for LazySettings {
    fn default() -> Self {
        Self::new()
    }
}

impl LazySettings {
    /// Creates a new, unconfigured `LazySettings`.
    pub const fn new() -> Self {
        Self {
            inner: OnceLock::new(),
        }
    }

    /// Configures the settings. Only the first call succeeds.
    pub fn configure(&self, settings: Settings) -> ConvertorResult<()> {
        self.inner.set(settings).map_err(|_| {
            ConvertorError::ConfigurationError("Settings have already been configured".to_string())
        })
    }

    /// Returns the configured settings, initializing them to the defaults if
    /// [`configure`](LazySettings::configure) was never called.
    pub fn get(&self) -> &Settings {
        self.inner.get_or_init(Settings::default)
    }

    /// Returns `true` if settings have been configured or read.
    pub fn is_configured(&self) -> bool {
        self.inner.get().is_some()
    }
}

/// The global settings instance.
pub static SETTINGS: LazySettings = LazySettings::new();
