//! Envoy URL handling subsystem.
//!
//! An envoy URL points at a circumvention proxy and smuggles header
//! directives for it in its query string (`header_Name=value`). This
//! subsystem only decodes those directives; associating the URL with an
//! engine happens in the lifecycle, and injection happens in the
//! translator.

pub mod parser;

pub use parser::{is_envoy_url, proxy_headers};
