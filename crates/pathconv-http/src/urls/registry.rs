//! The convertor registry.
//!
//! A [`ConvertorRegistry`] maps the type names used in route templates
//! (`{id:int}`, `{rest:path}`) to [`Convertor`] instances. A router holds
//! one, usually behind an `Arc`, and consults it when compiling routes and
//! when generating URLs.
//!
//! Mutating a registry is visible to every router that shares it: a
//! convertor registered under `"int"` replaces the built-in for all routes
//! compiled afterwards. Each key is swapped atomically, so concurrent
//! readers see either the old or the new convertor, never a mix.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use pathconv_core::{ConvertorError, ConvertorResult, Settings};

use super::convertors::{
    self, Convertor, FloatConvertor, IntegerConvertor, PathConvertor, PathValue,
    StringConvertor, DEFAULT_NAMES,
};

type ConvertorMap = HashMap<String, Arc<dyn Convertor>>;

/// A thread-safe mapping from type name to [`Convertor`].
///
/// # Examples
///
/// ```
/// use pathconv_http::urls::convertors::PathValue;
/// use pathconv_http::urls::registry::ConvertorRegistry;
///
/// let registry = ConvertorRegistry::new();
/// let int = registry.lookup("int").unwrap();
///
/// assert_eq!(int.pattern(), "[0-9]+");
/// assert_eq!(int.parse("42").unwrap(), PathValue::Int(42));
/// assert_eq!(int.format(&PathValue::Int(42)).unwrap(), "42");
/// assert!(registry.lookup("unknown").is_err());
/// ```
pub struct ConvertorRegistry {
    convertors: RwLock<ConvertorMap>,
}

impl Default for ConvertorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConvertorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConvertorRegistry")
            .field("names", &self.names())
            .finish()
    }
}

impl ConvertorRegistry {
    /// Creates a registry with no convertors.
    pub fn empty() -> Self {
        Self {
            convertors: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a registry holding the built-in `str`, `path`, `int`, and
    /// `float` convertors.
    pub fn new() -> Self {
        Self::with_float(FloatConvertor::new())
    }

    /// Creates the default registry adjusted by `settings`.
    ///
    /// `strict_float_pattern` selects [`FloatConvertor::strict`], and every
    /// name in `extra_convertors` is added from the built-in set. Listing
    /// `"float"` there keeps the float convertor chosen by
    /// `strict_float_pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertorError::ConfigurationError`] if an extra convertor
    /// name is not a built-in.
    pub fn from_settings(settings: &Settings) -> ConvertorResult<Self> {
        let float = if settings.strict_float_pattern {
            FloatConvertor::strict()
        } else {
            FloatConvertor::new()
        };
        let registry = Self::with_float(float);

        for name in &settings.extra_convertors {
            let convertor: Arc<dyn Convertor> = if name == convertors::FLOAT {
                Arc::new(float)
            } else {
                convertors::get_convertor(name).map_err(|_| {
                    ConvertorError::ConfigurationError(format!(
                        "Unknown extra convertor '{name}' in settings"
                    ))
                })?
            };
            registry.register(name.clone(), convertor);
        }

        tracing::debug!(
            strict_float = settings.strict_float_pattern,
            names = ?registry.names(),
            "built convertor registry from settings"
        );
        Ok(registry)
    }

    fn with_float(float: FloatConvertor) -> Self {
        let mut map: ConvertorMap = HashMap::with_capacity(DEFAULT_NAMES.len());
        map.insert(convertors::STR.to_string(), Arc::new(StringConvertor));
        map.insert(convertors::PATH.to_string(), Arc::new(PathConvertor));
        map.insert(convertors::INT.to_string(), Arc::new(IntegerConvertor));
        map.insert(convertors::FLOAT.to_string(), Arc::new(float));
        Self {
            convertors: RwLock::new(map),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, ConvertorMap> {
        // Every write is a single insert or remove, so a poisoned map is
        // still consistent.
        self.convertors.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ConvertorMap> {
        self.convertors.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers `convertor` under `name`, replacing any existing entry.
    ///
    /// Returns the convertor previously registered under that name.
    pub fn register(
        &self,
        name: impl Into<String>,
        convertor: Arc<dyn Convertor>,
    ) -> Option<Arc<dyn Convertor>> {
        let name = name.into();
        let pattern = convertor.pattern().to_string();
        let previous = self.write().insert(name.clone(), convertor);

        if previous.is_some() && DEFAULT_NAMES.contains(&name.as_str()) {
            tracing::warn!(name = %name, pattern = %pattern, "replaced built-in path convertor");
        } else {
            tracing::debug!(name = %name, pattern = %pattern, "registered path convertor");
        }
        previous
    }

    /// Removes the convertor registered under `name`, returning it.
    pub fn unregister(&self, name: &str) -> Option<Arc<dyn Convertor>> {
        let removed = self.write().remove(name);
        if removed.is_some() {
            tracing::debug!(name, "unregistered path convertor");
        }
        removed
    }

    /// Returns the convertor registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertorError::NotFound`] if nothing is registered under `name`.
    pub fn lookup(&self, name: &str) -> ConvertorResult<Arc<dyn Convertor>> {
        self.read().get(name).cloned().ok_or_else(|| {
            ConvertorError::NotFound(format!("Unknown path convertor type: {name}"))
        })
    }

    /// Returns `true` if a convertor is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.read().contains_key(name)
    }

    /// Returns the registered type names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of registered convertors.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns `true` if no convertors are registered.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Returns a copy of the whole mapping taken under a single lock.
    ///
    /// A router compiling many routes at once can use the snapshot so that
    /// every route sees the same set of convertors.
    pub fn snapshot(&self) -> HashMap<String, Arc<dyn Convertor>> {
        self.read().clone()
    }

    /// Parses `raw` with the convertor registered under `name`.
    ///
    /// `raw` is expected to have matched the convertor's pattern already.
    pub fn parse(&self, name: &str, raw: &str) -> ConvertorResult<PathValue> {
        self.lookup(name)?.parse(raw).map_err(|e| {
            tracing::debug!(name, raw, error = %e, "path parameter parse failed");
            e
        })
    }

    /// Parses `raw` after checking that all of it matches the convertor's
    /// pattern.
    ///
    /// Built-in convertors reuse a regex compiled once per process. A custom
    /// convertor that does not override
    /// [`anchored_regex`](Convertor::anchored_regex) recompiles its pattern
    /// on every call.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertorError::ParseError`] if `raw` does not match the
    /// pattern, in addition to the errors of [`parse`](Self::parse).
    pub fn parse_checked(&self, name: &str, raw: &str) -> ConvertorResult<PathValue> {
        let convertor = self.lookup(name)?;
        if !convertor.anchored_regex()?.is_match(raw) {
            tracing::debug!(name, raw, pattern = convertor.pattern(), "path parameter rejected");
            return Err(ConvertorError::ParseError(format!(
                "'{raw}' does not match the {name} pattern '{}'",
                convertor.pattern()
            )));
        }
        convertor.parse(raw)
    }

    /// Formats `value` with the convertor registered under `name`.
    pub fn format(&self, name: &str, value: &PathValue) -> ConvertorResult<String> {
        self.lookup(name)?.format(value).map_err(|e| {
            tracing::debug!(name, value = %value, error = %e, "path parameter format failed");
            e
        })
    }
}
