//! # pathconv
//!
//! Typed path-parameter convertors for URL routers.
//!
//! This is the meta-crate that re-exports the sub-crates. Depend on
//! `pathconv` for everything, or on the individual crates for finer-grained
//! control.
//!
//! # Examples
//!
//! ```
//! use pathconv::prelude::*;
//!
//! let registry = pathconv::init(&Settings::default()).unwrap();
//! assert_eq!(registry.parse("int", "7").unwrap(), PathValue::Int(7));
//! ```

/// Error type, settings, and logging.
pub use pathconv_core as core;

/// Convertors and the convertor registry.
#[cfg(feature = "http")]
pub use pathconv_http as http;

/// Re-exported for user convenience.
pub use tracing;

#[cfg(feature = "http")]
use std::sync::Arc;

/// The most commonly used types.
pub mod prelude {
    pub use pathconv_core::{ConvertorError, ConvertorResult, Settings};

    #[cfg(feature = "http")]
    pub use pathconv_http::urls::convertors::{
        FloatConvertor, IntegerConvertor, PathConvertor, StringConvertor, UuidConvertor,
    };
    #[cfg(feature = "http")]
    pub use pathconv_http::{Convertor, ConvertorRegistry, PathValue};
}

/// Installs logging for `settings` and builds the registry it describes,
/// ready to be shared with a router.
#[cfg(feature = "http")]
pub fn init(
    settings: &pathconv_core::Settings,
) -> pathconv_core::ConvertorResult<Arc<pathconv_http::ConvertorRegistry>> {
    pathconv_core::logging::setup_logging(settings);
    let registry = pathconv_http::ConvertorRegistry::from_settings(settings)?;
    tracing::info!(convertors = registry.len(), "path convertors ready");
    Ok(Arc::new(registry))
}
