//! Core error type for pathconv.
//!
//! This module provides [`ConvertorError`], the single error enum returned by
//! every fallible operation in the workspace: parsing raw path segments,
//! formatting values back into URLs, registry lookups, and settings loading.

use thiserror::Error;

/// The error type for path-parameter conversion.
///
/// Each variant maps to an HTTP status code via [`ConvertorError::status_code`]
/// so that a router can surface the failure as a response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertorError {
    /// The raw text is not a valid value of the convertor's type.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// A value failed validation while being rendered back into a URL.
    #[error("Format error: {0}")]
    FormatError(String),

    /// No convertor is registered under the requested type name.
    #[error("Convertor not found: {0}")]
    NotFound(String),

    // ── Configuration ────────────────────────────────────────────────

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl ConvertorError {
    /// Returns the HTTP status code associated with this error.
    ///
    /// - `ParseError` -> 400
    /// - Everything else -> 500
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::ParseError(_) => 400,
            Self::FormatError(_) | Self::NotFound(_) | Self::ConfigurationError(_) => 500,
        }
    }

    /// Returns the bare message carried by this error, without the
    /// category prefix added by `Display`.
    pub fn message(&self) -> &str {
        match self {
            Self::ParseError(msg)
            | Self::FormatError(msg)
            | Self::NotFound(msg)
            | Self::ConfigurationError(msg) => msg,
        }
    }
}

/// A convenience type alias for `Result<T, ConvertorError>`.
pub type ConvertorResult<T> = Result<T, ConvertorError>;
