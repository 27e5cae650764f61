//! Transport shim routing outbound HTTP traffic through a circumvention
//! proxy ("envoy") by rewriting requests before they reach a pluggable
//! network engine.
//!
//! ```text
//! EngineConfig ──▶ EngineLifecycle ──build──▶ Engine (opaque capability)
//!                        │                        │
//!                        │ register               │
//!                        ▼                        ▼
//!              StreamHandlerRegistrar   translator::translate
//!                                           ▲
//!                        envoy URL ─────────┘ (header_* query directives)
//! ```
//!
//! The lifecycle owns the one live engine; the translator turns a caller's
//! [`crate::http::request::GenericRequest`] into an engine-native request,
//! injecting the proxy headers decoded from the envoy URL plus the
//! `Url-Orig`/`Host-Orig` destination headers the remote proxy needs to
//! forward correctly.

pub mod config;
pub mod engine;
pub mod envoy;
pub mod http;
pub mod observability;

pub use config::EngineConfig;
pub use engine::EngineLifecycle;
pub use crate::http::{ShimRequest, TranslateError};
