//! Settings loading from configuration files.
//!
//! This module provides functions to load [`Settings`] from TOML files, JSON
//! files, and to apply environment variable overrides.
//!
//! ## Loading Order
//!
//! 1. Start with default settings.
//! 2. Load from a TOML or JSON file (overriding defaults).
//! 3. Apply environment variable overrides (highest priority).
//!
//! ## Environment Variable Mapping
//!
//! | Env Var | Setting |
//! |---|---|
//! | `PATHCONV_DEBUG` | `debug` |
//! | `PATHCONV_LOG_LEVEL` | `log_level` |
//! | `PATHCONV_STRICT_FLOAT_PATTERN` | `strict_float_pattern` |
//! | `PATHCONV_EXTRA_CONVERTORS` | `extra_convertors` (comma-separated) |
//!
//! ## Examples
//!
//! ```rust,no_run
//! use pathconv_core::settings_loader;
//!
//! let settings = settings_loader::from_toml_file_with_env("config/pathconv.toml").unwrap();
//! ```

use std::path::Path;

use crate::error::{ConvertorError, ConvertorResult};
use crate::settings::Settings;

/// Loads settings from a TOML string.
///
/// Any fields not present in the TOML keep their default values.
pub fn from_toml_str(toml_str: &str) -> ConvertorResult<Settings> {
    // Go through serde_json::Value so the file can be deep-merged over the
    // serialized defaults.
    let toml_value: toml::Value = toml::from_str(toml_str)
        .map_err(|e| ConvertorError::ConfigurationError(format!("Failed to parse TOML: {e}")))?;

    merge_over_defaults(toml_to_json(toml_value), "TOML")
}

/// Loads settings from a TOML file.
pub fn from_toml_file(path: impl AsRef<Path>) -> ConvertorResult<Settings> {
    from_toml_str(&read_file(path.as_ref(), "TOML")?)
}

/// Loads settings from a TOML file and then applies environment variable overrides.
pub fn from_toml_file_with_env(path: impl AsRef<Path>) -> ConvertorResult<Settings> {
    let mut settings = from_toml_file(path)?;
    apply_env_overrides(&mut settings);
    Ok(settings)
}

/// Loads settings from a JSON string.
pub fn from_json_str(json_str: &str) -> ConvertorResult<Settings> {
    let json_value: serde_json::Value = serde_json::from_str(json_str)
        .map_err(|e| ConvertorError::ConfigurationError(format!("Failed to parse JSON: {e}")))?;

    merge_over_defaults(json_value, "JSON")
}

/// Loads settings from a JSON file.
pub fn from_json_file(path: impl AsRef<Path>) -> ConvertorResult<Settings> {
    from_json_str(&read_file(path.as_ref(), "JSON")?)
}

/// Loads settings from a JSON file and then applies environment variable overrides.
pub fn from_json_file_with_env(path: impl AsRef<Path>) -> ConvertorResult<Settings> {
    let mut settings = from_json_file(path)?;
    apply_env_overrides(&mut settings);
    Ok(settings)
}

/// Loads settings from just environment variables (starting from defaults).
pub fn from_env() -> Settings {
    let mut settings = Settings::default();
    apply_env_overrides(&mut settings);
    settings
}

/// Applies `PATHCONV_*` environment variable overrides to a settings struct.
pub fn apply_env_overrides(settings: &mut Settings) {
    apply_overrides_from(settings, |key| std::env::var(key).ok());
}

/// Applies overrides read through `lookup`, which maps an environment
/// variable name to its value.
///
/// Boolean values accept "true"/"1"/"yes" (case-insensitive) as `true`;
/// anything else is `false`.
pub fn apply_overrides_from<F>(settings: &mut Settings, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup("PATHCONV_DEBUG") {
        settings.debug = parse_bool(&val);
    }

    if let Some(val) = lookup("PATHCONV_LOG_LEVEL") {
        settings.log_level = val;
    }

    if let Some(val) = lookup("PATHCONV_STRICT_FLOAT_PATTERN") {
        settings.strict_float_pattern = parse_bool(&val);
    }

    if let Some(val) = lookup("PATHCONV_EXTRA_CONVERTORS") {
        settings.extra_convertors = val
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
    }
}

// ============================================================
// Helpers
// ============================================================

fn parse_bool(val: &str) -> bool {
    matches!(val.to_lowercase().as_str(), "true" | "1" | "yes")
}

fn read_file(path: &Path, format: &str) -> ConvertorResult<String> {
    std::fs::read_to_string(path).map_err(|e| {
        ConvertorError::ConfigurationError(format!(
            "Failed to read {format} file '{}': {e}",
            path.display()
        ))
    })
}

fn merge_over_defaults(value: serde_json::Value, format: &str) -> ConvertorResult<Settings> {
    let default_json = serde_json::to_value(Settings::default()).map_err(|e| {
        ConvertorError::ConfigurationError(format!("Failed to serialize default settings: {e}"))
    })?;

    let merged = merge_json(default_json, value);
    serde_json::from_value(merged).map_err(|e| {
        ConvertorError::ConfigurationError(format!(
            "Failed to deserialize settings from {format}: {e}"
        ))
    })
}

/// Converts a TOML value to a `serde_json::Value`.
fn toml_to_json(value: toml::Value) -> serde_json::Value {
    match value {
        toml::Value::String(s) => serde_json::Value::String(s),
        toml::Value::Integer(i) => serde_json::json!(i),
        toml::Value::Float(f) => serde_json::json!(f),
        toml::Value::Boolean(b) => serde_json::Value::Bool(b),
        toml::Value::Datetime(dt) => serde_json::Value::String(dt.to_string()),
        toml::Value::Array(arr) => {
            serde_json::Value::Array(arr.into_iter().map(toml_to_json).collect())
        }
        toml::Value::Table(table) => serde_json::Value::Object(
            table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect(),
        ),
    }
}

/// Deep-merges two JSON values. The `override_val` takes precedence.
fn merge_json(base: serde_json::Value, override_val: serde_json::Value) -> serde_json::Value {
    match (base, override_val) {
        (serde_json::Value::Object(mut base_map), serde_json::Value::Object(override_map)) => {
            for (key, override_v) in override_map {
                let merged = if let Some(base_v) = base_map.remove(&key) {
                    merge_json(base_v, override_v)
                } else {
                    override_v
                };
                base_map.insert(key, merged);
            }
            serde_json::Value::Object(base_map)
        }
        (_, override_val) => override_val,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    // ── TOML loading ────────────────────────────────────────────────

    #[test]
    fn test_from_toml_str_basic() {
        let toml = r#"
            debug = false
            strict_float_pattern = true
        "#;

        let settings = from_toml_str(toml).unwrap();
        assert!(!settings.debug);
        assert!(settings.strict_float_pattern);
        // Defaults preserved
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_from_toml_str_extra_convertors() {
        let settings = from_toml_str(r#"extra_convertors = ["uuid"]"#).unwrap();
        assert_eq!(settings.extra_convertors, vec!["uuid".to_string()]);
    }

    #[test]
    fn test_from_toml_str_empty() {
        let settings = from_toml_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_from_toml_str_invalid() {
        let result = from_toml_str("[[invalid toml content");
        assert!(matches!(result, Err(ConvertorError::ConfigurationError(_))));
    }

    #[test]
    fn test_from_toml_str_wrong_type() {
        let err = from_toml_str(r#"debug = "sometimes""#).unwrap_err();
        assert!(err.to_string().contains("TOML"));
    }

    // ── JSON loading ────────────────────────────────────────────────

    #[test]
    fn test_from_json_str_basic() {
        let json = r#"{
            "debug": false,
            "log_level": "debug"
        }"#;

        let settings = from_json_str(json).unwrap();
        assert!(!settings.debug);
        assert_eq!(settings.log_level, "debug");
        assert!(!settings.strict_float_pattern);
    }

    #[test]
    fn test_from_json_str_empty_object() {
        let settings = from_json_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_from_json_str_invalid() {
        assert!(from_json_str("{not json").is_err());
    }

    // ── Files ───────────────────────────────────────────────────────

    #[test]
    fn test_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pathconv.toml");
        std::fs::write(&path, "log_level = \"warn\"\n").unwrap();

        let settings = from_toml_file(&path).unwrap();
        assert_eq!(settings.log_level, "warn");
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pathconv.json");
        std::fs::write(&path, r#"{"extra_convertors": ["uuid"]}"#).unwrap();

        let settings = from_json_file(&path).unwrap();
        assert_eq!(settings.extra_convertors, vec!["uuid".to_string()]);
    }

    #[test]
    fn test_from_toml_file_missing() {
        let err = from_toml_file("/nonexistent/pathconv.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read TOML file"));
    }

    #[test]
    fn test_from_json_file_missing() {
        let err = from_json_file("/nonexistent/pathconv.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read JSON file"));
    }

    // ── Overrides ───────────────────────────────────────────────────

    #[test]
    fn test_overrides_debug() {
        let mut settings = Settings::default();
        apply_overrides_from(&mut settings, lookup_in(&[("PATHCONV_DEBUG", "false")]));
        assert!(!settings.debug);

        apply_overrides_from(&mut settings, lookup_in(&[("PATHCONV_DEBUG", "1")]));
        assert!(settings.debug);

        apply_overrides_from(&mut settings, lookup_in(&[("PATHCONV_DEBUG", "YES")]));
        assert!(settings.debug);
    }

    #[test]
    fn test_overrides_log_level_and_strict_float() {
        let mut settings = Settings::default();
        apply_overrides_from(
            &mut settings,
            lookup_in(&[
                ("PATHCONV_LOG_LEVEL", "debug"),
                ("PATHCONV_STRICT_FLOAT_PATTERN", "true"),
            ]),
        );
        assert_eq!(settings.log_level, "debug");
        assert!(settings.strict_float_pattern);
    }

    #[test]
    fn test_overrides_extra_convertors() {
        let mut settings = Settings::default();
        apply_overrides_from(
            &mut settings,
            lookup_in(&[("PATHCONV_EXTRA_CONVERTORS", " uuid , ,")]),
        );
        assert_eq!(settings.extra_convertors, vec!["uuid".to_string()]);
    }

    #[test]
    fn test_overrides_absent_keep_values() {
        let mut settings = Settings {
            log_level: "trace".to_string(),
            ..Settings::default()
        };
        apply_overrides_from(&mut settings, lookup_in(&[]));
        assert_eq!(settings.log_level, "trace");
        assert!(settings.debug);
    }
}
