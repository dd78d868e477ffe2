//! Path-parameter conversion for URL routing.
//!
//! This module provides:
//!
//! - [`convertors`]: the [`Convertor`](convertors::Convertor) trait, typed
//!   [`PathValue`](convertors::PathValue)s, and the built-in convertors
//!   (`str`, `path`, `int`, `float`, plus the opt-in `uuid`)
//! - [`registry`]: the shared [`ConvertorRegistry`](registry::ConvertorRegistry)
//!   routers use to resolve type names
//!
//! # Examples
//!
//! ```
//! use pathconv_http::urls::convertors::PathValue;
//! use pathconv_http::urls::registry::ConvertorRegistry;
//!
//! let registry = ConvertorRegistry::new();
//!
//! // Dispatch: the router matched "2024" against the `int` pattern.
//! let year = registry.parse("int", "2024").unwrap();
//! assert_eq!(year, PathValue::Int(2024));
//!
//! // URL generation.
//! assert_eq!(registry.format("float", &PathValue::Float(4.0)).unwrap(), "4");
//! assert!(registry.format("str", &PathValue::from("a/b")).is_err());
//! ```

pub mod convertors;
pub mod registry;
