//! Logging integration for pathconv.
//!
//! Provides helpers for configuring [`tracing`]-based logging from
//! [`Settings`](crate::settings::Settings) and for grouping convertor calls
//! under a span.

use crate::settings::Settings;

/// Sets up the global tracing subscriber based on the given settings.
///
/// The filter is read from `settings.log_level`; an invalid filter falls back
/// to "info". In debug mode a pretty, human-readable format is used, otherwise
/// structured JSON. Installing a second subscriber is a no-op.
///
/// The convertor registry emits:
///
/// - `debug` when a convertor is registered or unregistered, and when a
///   registry is built from settings
/// - `warn` when a built-in name (`str`, `path`, `int`, `float`) is replaced
/// - `debug` when a parse or format routed through the registry fails, with
///   the convertor name, the input, and the error
///
/// Calls made directly on a convertor are not logged. Use
/// [`convertor_span`] to group them.
pub fn setup_logging(settings: &Settings) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if settings.debug {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }
}

/// Creates a tracing span for work done on behalf of one convertor.
///
/// # Examples
///
/// ```
/// use pathconv_core::logging::convertor_span;
///
/// let span = convertor_span("int");
/// let _guard = span.enter();
/// tracing::debug!("parsing path parameter");
/// ```
pub fn convertor_span(type_name: &str) -> tracing::Span {
    tracing::info_span!("convertor", name = type_name)
}
