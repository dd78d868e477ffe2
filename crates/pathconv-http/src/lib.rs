//! # pathconv-http
//!
//! Path-parameter convertors for URL routers: the regex fragment a route
//! compiler embeds for `{name:type}` placeholders, parsing of matched text
//! into typed values, and formatting of values for reverse URL generation.

pub mod urls;

pub use urls::convertors::{Convertor, PathValue};
pub use urls::registry::ConvertorRegistry;
