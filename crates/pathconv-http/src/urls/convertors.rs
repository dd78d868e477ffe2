//! Path convertors for URL pattern matching.
//!
//! This module provides the [`Convertor`] trait and the built-in convertors.
//! A convertor describes which raw text a path parameter accepts (as a regex
//! fragment), how that text becomes a typed [`PathValue`], and how a value is
//! rendered back into a URL.
//!
//! # Built-in convertors
//!
//! | Name    | Regex                                  | Value            |
//! |---------|----------------------------------------|------------------|
//! | `str`   | `[^/]+`                                | `PathValue::Str` |
//! | `path`  | `.*`                                   | `PathValue::Path`|
//! | `int`   | `[0-9]+`                               | `PathValue::Int` |
//! | `float` | `[0-9]+(.[0-9]+)?`                     | `PathValue::Float`|
//! | `uuid`  | `[0-9a-f]{8}-...-[0-9a-f]{12}`         | `PathValue::Uuid`|
//!
//! `uuid` is opt-in and is not part of the default registry.

use std::fmt;
use std::sync::{Arc, OnceLock};

use regex::Regex;

use pathconv_core::{ConvertorError, ConvertorResult};

/// Registry key of [`StringConvertor`].
pub const STR: &str = "str";
/// Registry key of [`PathConvertor`].
pub const PATH: &str = "path";
/// Registry key of [`IntegerConvertor`].
pub const INT: &str = "int";
/// Registry key of [`FloatConvertor`].
pub const FLOAT: &str = "float";
/// Registry key of [`UuidConvertor`].
pub const UUID: &str = "uuid";

/// The keys the default registry is populated with.
pub const DEFAULT_NAMES: [&str; 4] = [STR, PATH, INT, FLOAT];

const FLOAT_PATTERN: &str = "[0-9]+(.[0-9]+)?";
const STRICT_FLOAT_PATTERN: &str = r"[0-9]+(\.[0-9]+)?";

// 2^63: the smallest float that no longer fits in an i64.
const I64_UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;

// Anchored regexes of the built-in patterns, compiled on first use.
static STR_REGEX: OnceLock<Regex> = OnceLock::new();
static PATH_REGEX: OnceLock<Regex> = OnceLock::new();
static INT_REGEX: OnceLock<Regex> = OnceLock::new();
static FLOAT_REGEX: OnceLock<Regex> = OnceLock::new();
static STRICT_FLOAT_REGEX: OnceLock<Regex> = OnceLock::new();
static UUID_REGEX: OnceLock<Regex> = OnceLock::new();

/// A typed value extracted from, or rendered into, a URL path segment.
#[derive(Debug, Clone, PartialEq)]
pub enum PathValue {
    /// A single segment, produced by [`StringConvertor`].
    Str(String),
    /// A trailing path that may contain slashes, produced by [`PathConvertor`].
    Path(String),
    /// An integer, produced by [`IntegerConvertor`].
    Int(i64),
    /// A floating-point number, produced by [`FloatConvertor`].
    Float(f64),
    /// A UUID, produced by [`UuidConvertor`].
    Uuid(uuid::Uuid),
}

impl PathValue {
    /// Returns the text of a `Str` or `Path` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(v) | Self::Path(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the integer of an `Int` value.
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the number of a `Float` value.
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for PathValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(v) | Self::Path(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Uuid(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for PathValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for PathValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for PathValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for PathValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<uuid::Uuid> for PathValue {
    fn from(value: uuid::Uuid) -> Self {
        Self::Uuid(value)
    }
}

/// Trait for converting URL path segments to typed values and back.
///
/// A router uses [`pattern`](Convertor::pattern) when compiling a route,
/// [`parse`](Convertor::parse) on text it has already matched against that
/// pattern, and [`format`](Convertor::format) when generating URLs.
pub trait Convertor: Send + Sync + fmt::Debug {
    /// Returns the regex fragment that matches valid raw text for this convertor.
    fn pattern(&self) -> &str;

    /// Converts matched text into a typed [`PathValue`].
    ///
    /// The text is not re-validated against [`pattern`](Convertor::pattern).
    fn parse(&self, raw: &str) -> ConvertorResult<PathValue>;

    /// Converts a [`PathValue`] back into URL-safe text.
    fn format(&self, value: &PathValue) -> ConvertorResult<String>;

    /// Returns [`pattern`](Convertor::pattern) compiled and anchored at both ends.
    ///
    /// The default implementation compiles on every call. The built-in
    /// convertors compile once per process; custom convertors checked on a
    /// per-request path should override this and cache the regex.
    fn anchored_regex(&self) -> ConvertorResult<Regex> {
        compile_anchored(self.pattern())
    }

    /// Returns `true` if the whole of `raw` matches [`pattern`](Convertor::pattern).
    fn matches(&self, raw: &str) -> bool {
        self.anchored_regex().is_ok_and(|re| re.is_match(raw))
    }
}

fn compile_anchored(pattern: &str) -> ConvertorResult<Regex> {
    Regex::new(&format!("^(?:{pattern})$")).map_err(|e| {
        ConvertorError::ConfigurationError(format!("Invalid convertor pattern '{pattern}': {e}"))
    })
}

/// Returns the regex held in `cell`, compiling `pattern` into it first if
/// the cell is empty. `Regex` clones share the compiled program.
fn cached_anchored(cell: &'static OnceLock<Regex>, pattern: &str) -> ConvertorResult<Regex> {
    if let Some(re) = cell.get() {
        return Ok(re.clone());
    }
    let re = compile_anchored(pattern)?;
    Ok(cell.get_or_init(|| re).clone())
}

/// Convertor for a single path segment.
///
/// Matches any non-empty run of characters other than `/`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringConvertor;

impl Convertor for StringConvertor {
    fn pattern(&self) -> &str {
        "[^/]+"
    }

    fn anchored_regex(&self) -> ConvertorResult<Regex> {
        cached_anchored(&STR_REGEX, self.pattern())
    }

    fn parse(&self, raw: &str) -> ConvertorResult<PathValue> {
        Ok(PathValue::Str(raw.to_string()))
    }

    fn format(&self, value: &PathValue) -> ConvertorResult<String> {
        let text = value.to_string();
        if text.contains('/') {
            return Err(ConvertorError::FormatError(
                "path separator not allowed".to_string(),
            ));
        }
        if text.is_empty() {
            return Err(ConvertorError::FormatError(
                "empty value not allowed".to_string(),
            ));
        }
        Ok(text)
    }
}

/// Convertor for the remainder of a path, slashes included.
///
/// Used for catch-all trailing segments; matches anything, including the
/// empty string.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathConvertor;

impl Convertor for PathConvertor {
    fn pattern(&self) -> &str {
        ".*"
    }

    fn anchored_regex(&self) -> ConvertorResult<Regex> {
        cached_anchored(&PATH_REGEX, self.pattern())
    }

    fn parse(&self, raw: &str) -> ConvertorResult<PathValue> {
        Ok(PathValue::Path(raw.to_string()))
    }

    fn format(&self, value: &PathValue) -> ConvertorResult<String> {
        Ok(value.to_string())
    }
}

/// Convertor for unsigned decimal integers.
///
/// Matches one or more ASCII digits and parses them into an `i64`. Digit
/// runs above `i64::MAX` match the pattern but fail in
/// [`parse`](Convertor::parse) with [`ConvertorError::ParseError`].
///
/// [`format`](Convertor::format) truncates finite floats toward zero and
/// rejects those whose integer part does not fit in an `i64`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerConvertor;

impl IntegerConvertor {
    #[allow(clippy::cast_possible_truncation)]
    fn coerce(value: &PathValue) -> ConvertorResult<i64> {
        match value {
            PathValue::Int(v) => Ok(*v),
            PathValue::Float(v) if v.is_finite() => {
                let whole = v.trunc();
                if whole >= I64_UPPER_BOUND {
                    return Err(ConvertorError::FormatError(format!(
                        "integer value out of range: {v}"
                    )));
                }
                // Below i64::MIN the cast saturates to a negative value,
                // which format rejects as negative.
                Ok(whole as i64)
            }
            PathValue::Str(v) | PathValue::Path(v) => v.trim().parse::<i64>().map_err(|_| {
                ConvertorError::FormatError(format!("invalid integer value: {v}"))
            }),
            other => Err(ConvertorError::FormatError(format!(
                "cannot convert {other} to an integer"
            ))),
        }
    }
}

impl Convertor for IntegerConvertor {
    fn pattern(&self) -> &str {
        "[0-9]+"
    }

    fn anchored_regex(&self) -> ConvertorResult<Regex> {
        cached_anchored(&INT_REGEX, self.pattern())
    }

    fn parse(&self, raw: &str) -> ConvertorResult<PathValue> {
        raw.parse::<i64>()
            .map(PathValue::Int)
            .map_err(|e| ConvertorError::ParseError(format!("invalid integer '{raw}': {e}")))
    }

    fn format(&self, value: &PathValue) -> ConvertorResult<String> {
        let value = Self::coerce(value)?;
        if value < 0 {
            return Err(ConvertorError::FormatError(
                "negative integers not supported".to_string(),
            ));
        }
        Ok(value.to_string())
    }
}

/// Convertor for non-negative decimal numbers.
///
/// The default pattern leaves the dot unescaped, so it accepts any single
/// character between the two digit runs (`"1x5"` matches and then fails in
/// [`parse`](Convertor::parse)). [`FloatConvertor::strict`] escapes it.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatConvertor {
    strict: bool,
}

impl FloatConvertor {
    /// Creates a float convertor with the compatible pattern `[0-9]+(.[0-9]+)?`.
    pub const fn new() -> Self {
        Self { strict: false }
    }

    /// Creates a float convertor whose pattern only accepts a literal `.`.
    pub const fn strict() -> Self {
        Self { strict: true }
    }

    /// Returns `true` if the pattern escapes the decimal point.
    pub const fn is_strict(&self) -> bool {
        self.strict
    }

    #[allow(clippy::cast_precision_loss)]
    fn coerce(value: &PathValue) -> ConvertorResult<f64> {
        match value {
            PathValue::Float(v) => Ok(*v),
            PathValue::Int(v) => Ok(*v as f64),
            PathValue::Str(v) | PathValue::Path(v) => v.trim().parse::<f64>().map_err(|_| {
                ConvertorError::FormatError(format!("invalid float value: {v}"))
            }),
            PathValue::Uuid(v) => Err(ConvertorError::FormatError(format!(
                "cannot convert {v} to a float"
            ))),
        }
    }
}

impl Convertor for FloatConvertor {
    fn pattern(&self) -> &str {
        if self.strict {
            STRICT_FLOAT_PATTERN
        } else {
            FLOAT_PATTERN
        }
    }

    fn anchored_regex(&self) -> ConvertorResult<Regex> {
        let cell = if self.strict {
            &STRICT_FLOAT_REGEX
        } else {
            &FLOAT_REGEX
        };
        cached_anchored(cell, self.pattern())
    }

    fn parse(&self, raw: &str) -> ConvertorResult<PathValue> {
        raw.parse::<f64>()
            .map(PathValue::Float)
            .map_err(|e| ConvertorError::ParseError(format!("invalid float '{raw}': {e}")))
    }

    fn format(&self, value: &PathValue) -> ConvertorResult<String> {
        let value = Self::coerce(value)?;
        if value < 0.0 {
            return Err(ConvertorError::FormatError(
                "negative floats not supported".to_string(),
            ));
        }
        if value.is_nan() {
            return Err(ConvertorError::FormatError("NaN not supported".to_string()));
        }
        if value.is_infinite() {
            return Err(ConvertorError::FormatError(
                "infinite values not supported".to_string(),
            ));
        }
        Ok(format_fixed(value))
    }
}

/// Renders a finite, non-negative float with 20 fractional digits, then strips
/// trailing zeros and a dangling decimal point.
fn format_fixed(value: f64) -> String {
    // -0.0 passes the sign check; render it as 0.
    let rendered = format!("{:.20}", value.abs());
    rendered
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Convertor for hyphenated, lower-case UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidConvertor;

impl Convertor for UuidConvertor {
    fn pattern(&self) -> &str {
        "[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}"
    }

    fn anchored_regex(&self) -> ConvertorResult<Regex> {
        cached_anchored(&UUID_REGEX, self.pattern())
    }

    fn parse(&self, raw: &str) -> ConvertorResult<PathValue> {
        raw.parse::<uuid::Uuid>()
            .map(PathValue::Uuid)
            .map_err(|e| ConvertorError::ParseError(format!("invalid UUID '{raw}': {e}")))
    }

    fn format(&self, value: &PathValue) -> ConvertorResult<String> {
        match value {
            PathValue::Uuid(v) => Ok(v.hyphenated().to_string()),
            PathValue::Str(v) | PathValue::Path(v) => v
                .parse::<uuid::Uuid>()
                .map(|u| u.hyphenated().to_string())
                .map_err(|_| ConvertorError::FormatError(format!("invalid UUID value: {v}"))),
            other => Err(ConvertorError::FormatError(format!(
                "cannot convert {other} to a UUID"
            ))),
        }
    }
}

/// Creates a shared built-in convertor for the given type name.
///
/// # Supported types
///
/// - `"str"` -> [`StringConvertor`]
/// - `"path"` -> [`PathConvertor`]
/// - `"int"` -> [`IntegerConvertor`]
/// - `"float"` -> [`FloatConvertor::new`]
/// - `"uuid"` -> [`UuidConvertor`]
///
/// # Errors
///
/// Returns [`ConvertorError::NotFound`] if the type name is not a built-in.
pub fn get_convertor(type_name: &str) -> ConvertorResult<Arc<dyn Convertor>> {
    match type_name {
        STR => Ok(Arc::new(StringConvertor)),
        PATH => Ok(Arc::new(PathConvertor)),
        INT => Ok(Arc::new(IntegerConvertor)),
        FLOAT => Ok(Arc::new(FloatConvertor::new())),
        UUID => Ok(Arc::new(UuidConvertor)),
        _ => Err(ConvertorError::NotFound(format!(
            "Unknown path convertor type: {type_name}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format_err(conv: &dyn Convertor, value: impl Into<PathValue>) -> String {
        match conv.format(&value.into()) {
            Err(ConvertorError::FormatError(msg)) => msg,
            other => panic!("expected a format error, got {other:?}"),
        }
    }

    #[test]
    fn test_string_convertor_parse() {
        let conv = StringConvertor;
        assert_eq!(conv.parse("hello").unwrap(), PathValue::Str("hello".into()));
    }

    #[test]
    fn test_string_convertor_format() {
        let conv = StringConvertor;
        assert_eq!(conv.format(&"abc".into()).unwrap(), "abc");
        assert_eq!(conv.format(&PathValue::Int(7)).unwrap(), "7");
        assert_eq!(format_err(&conv, "a/b"), "path separator not allowed");
        assert_eq!(format_err(&conv, ""), "empty value not allowed");
    }

    #[test]
    fn test_string_convertor_regex() {
        let conv = StringConvertor;
        assert!(conv.matches("hello"));
        assert!(!conv.matches(""));
        assert!(!conv.matches("a/b"));
    }

    #[test]
    fn test_path_convertor_parse_and_format() {
        let conv = PathConvertor;
        assert_eq!(
            conv.parse("a/b/c").unwrap(),
            PathValue::Path("a/b/c".to_string())
        );
        assert_eq!(conv.format(&PathValue::Path("a/b".into())).unwrap(), "a/b");
        assert_eq!(conv.format(&PathValue::Str(String::new())).unwrap(), "");
    }

    #[test]
    fn test_path_convertor_regex() {
        let conv = PathConvertor;
        assert!(conv.matches("a/b/c"));
        assert!(conv.matches("single"));
        assert!(conv.matches(""));
    }

    #[test]
    fn test_integer_convertor_parse() {
        let conv = IntegerConvertor;
        assert_eq!(conv.parse("42").unwrap(), PathValue::Int(42));
        assert_eq!(conv.parse("007").unwrap(), PathValue::Int(7));
        assert!(matches!(
            conv.parse("abc"),
            Err(ConvertorError::ParseError(_))
        ));
        assert!(conv.parse("").is_err());
        assert!(conv.parse("99999999999999999999999").is_err());
    }

    #[test]
    fn test_integer_convertor_digits_above_i64_max() {
        let conv = IntegerConvertor;
        assert_eq!(
            conv.parse("9223372036854775807").unwrap(),
            PathValue::Int(i64::MAX)
        );
        assert!(conv.matches("9223372036854775808"));
        assert!(matches!(
            conv.parse("9223372036854775808"),
            Err(ConvertorError::ParseError(_))
        ));
    }

    #[test]
    fn test_integer_convertor_format() {
        let conv = IntegerConvertor;
        assert_eq!(conv.format(&PathValue::Int(0)).unwrap(), "0");
        assert_eq!(conv.format(&PathValue::Int(42)).unwrap(), "42");
        assert_eq!(format_err(&conv, -1_i64), "negative integers not supported");
    }

    #[test]
    fn test_integer_convertor_format_coerces() {
        let conv = IntegerConvertor;
        assert_eq!(conv.format(&PathValue::Float(3.9)).unwrap(), "3");
        assert_eq!(conv.format(&"0012".into()).unwrap(), "12");
        assert!(conv.format(&"twelve".into()).is_err());
        assert!(conv.format(&PathValue::Float(f64::NAN)).is_err());
        assert_eq!(format_err(&conv, -2.5), "negative integers not supported");
    }

    #[test]
    fn test_integer_convertor_format_out_of_range_floats() {
        let conv = IntegerConvertor;
        assert_eq!(
            format_err(&conv, 1e30),
            "integer value out of range: 1000000000000000000000000000000"
        );
        assert!(format_err(&conv, 9_223_372_036_854_775_808.0).contains("out of range"));
        assert_eq!(format_err(&conv, -1e30), "negative integers not supported");
        // The largest float below 2^63 still converts exactly.
        assert_eq!(
            conv.format(&PathValue::Float(9_223_372_036_854_774_784.0))
                .unwrap(),
            "9223372036854774784"
        );
    }

    #[test]
    fn test_integer_convertor_format_rejects_uuid() {
        let conv = IntegerConvertor;
        let id = "550e8400-e29b-41d4-a716-446655440000"
            .parse::<uuid::Uuid>()
            .unwrap();
        assert!(format_err(&conv, id).starts_with("cannot convert"));
    }

    #[test]
    fn test_integer_convertor_regex() {
        let conv = IntegerConvertor;
        assert!(conv.matches("123"));
        assert!(!conv.matches("-5"));
        assert!(!conv.matches("12a"));
    }

    #[test]
    fn test_float_convertor_parse() {
        let conv = FloatConvertor::new();
        assert_eq!(conv.parse("3.5").unwrap(), PathValue::Float(3.5));
        assert_eq!(conv.parse("4").unwrap(), PathValue::Float(4.0));
        assert!(matches!(
            conv.parse("1x5"),
            Err(ConvertorError::ParseError(_))
        ));
    }

    #[test]
    fn test_float_convertor_format() {
        let conv = FloatConvertor::new();
        assert_eq!(conv.format(&PathValue::Float(4.0)).unwrap(), "4");
        assert_eq!(conv.format(&PathValue::Float(3.5)).unwrap(), "3.5");
        assert_eq!(conv.format(&PathValue::Float(0.0)).unwrap(), "0");
        assert_eq!(conv.format(&PathValue::Float(-0.0)).unwrap(), "0");
        assert_eq!(conv.format(&PathValue::Float(10.0)).unwrap(), "10");
        assert_eq!(conv.format(&PathValue::Int(2)).unwrap(), "2");
        assert_eq!(conv.format(&"1.250".into()).unwrap(), "1.25");
    }

    #[test]
    fn test_float_convertor_format_rejects() {
        let conv = FloatConvertor::new();
        assert_eq!(format_err(&conv, -1.0), "negative floats not supported");
        assert_eq!(format_err(&conv, f64::NAN), "NaN not supported");
        assert_eq!(format_err(&conv, f64::INFINITY), "infinite values not supported");
        assert_eq!(
            format_err(&conv, f64::NEG_INFINITY),
            "negative floats not supported"
        );
    }

    #[test]
    fn test_float_convertor_twenty_digits() {
        let conv = FloatConvertor::new();
        assert_eq!(
            conv.format(&PathValue::Float(0.1)).unwrap(),
            "0.10000000000000000555"
        );
        assert_eq!(conv.format(&PathValue::Float(1e-25)).unwrap(), "0");
    }

    #[test]
    fn test_float_convertor_compatible_pattern() {
        let conv = FloatConvertor::new();
        assert_eq!(conv.pattern(), "[0-9]+(.[0-9]+)?");
        assert!(conv.matches("3.14"));
        assert!(conv.matches("3"));
        assert!(conv.matches("3x14"));
        assert!(!conv.matches("3."));
    }

    #[test]
    fn test_builtin_anchored_regex_is_compiled_once() {
        assert!(IntegerConvertor.matches("12"));
        assert!(INT_REGEX.get().is_some());
        assert!(FloatConvertor::strict().matches("1.5"));
        assert_eq!(
            STRICT_FLOAT_REGEX.get().map(Regex::as_str),
            Some(r"^(?:[0-9]+(\.[0-9]+)?)$")
        );
        let first = StringConvertor.anchored_regex().unwrap();
        let second = StringConvertor.anchored_regex().unwrap();
        assert_eq!(first.as_str(), second.as_str());
    }

    #[test]
    fn test_float_convertor_strict_pattern() {
        let conv = FloatConvertor::strict();
        assert!(conv.is_strict());
        assert!(conv.matches("3.14"));
        assert!(!conv.matches("3x14"));
    }

    #[test]
    fn test_uuid_convertor() {
        let conv = UuidConvertor;
        let raw = "550e8400-e29b-41d4-a716-446655440000";
        let value = conv.parse(raw).unwrap();
        assert_eq!(value, PathValue::Uuid(raw.parse::<uuid::Uuid>().unwrap()));
        assert_eq!(conv.format(&value).unwrap(), raw);
        assert_eq!(
            conv.format(&"550E8400-E29B-41D4-A716-446655440000".into())
                .unwrap(),
            raw
        );
        assert!(conv.parse("not-a-uuid").is_err());
        assert!(conv.format(&PathValue::Int(1)).is_err());
        assert!(conv.matches(raw));
        assert!(!conv.matches("550E8400-E29B-41D4-A716-446655440000"));
    }

    #[test]
    fn test_get_convertor_known_types() {
        for name in [STR, PATH, INT, FLOAT, UUID] {
            assert!(get_convertor(name).is_ok(), "{name} should be built in");
        }
        assert_eq!(get_convertor(INT).unwrap().pattern(), "[0-9]+");
    }

    #[test]
    fn test_get_convertor_unknown_type() {
        assert!(matches!(
            get_convertor("slug"),
            Err(ConvertorError::NotFound(_))
        ));
    }

    #[test]
    fn test_path_value_display_and_accessors() {
        assert_eq!(PathValue::Int(42).to_string(), "42");
        assert_eq!(PathValue::Float(3.5).to_string(), "3.5");
        assert_eq!(PathValue::Path("a/b".into()).to_string(), "a/b");
        assert_eq!(PathValue::Str("x".into()).as_str(), Some("x"));
        assert_eq!(PathValue::Int(1).as_int(), Some(1));
        assert_eq!(PathValue::Float(1.5).as_float(), Some(1.5));
        assert_eq!(PathValue::Int(1).as_str(), None);
    }

    #[test]
    fn test_anchored_regex_rejects_invalid_pattern() {
        #[derive(Debug)]
        struct Broken;

        impl Convertor for Broken {
            fn pattern(&self) -> &str {
                "[0-9"
            }
            fn parse(&self, raw: &str) -> ConvertorResult<PathValue> {
                Ok(raw.into())
            }
            fn format(&self, value: &PathValue) -> ConvertorResult<String> {
                Ok(value.to_string())
            }
        }

        assert!(matches!(
            Broken.anchored_regex(),
            Err(ConvertorError::ConfigurationError(_))
        ));
        assert!(!Broken.matches("1"));
    }
}
