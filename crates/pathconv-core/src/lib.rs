//! # pathconv-core
//!
//! Core types for pathconv: the shared error type, settings, and logging.
//! This crate has no routing dependencies and is the foundation for the
//! convertor crate.
//!
//! ## Modules
//!
//! - [`error`] - Error type and result alias
//! - [`settings`] - Convertor settings and the global settings container
//! - [`settings_loader`] - Loading settings from TOML, JSON, and the environment
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod logging;
pub mod settings;
pub mod settings_loader;

// Re-export the most commonly used types at the crate root.
pub use error::{ConvertorError, ConvertorResult};
pub use settings::{Settings, SETTINGS};
