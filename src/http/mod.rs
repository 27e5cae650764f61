//! Outbound HTTP handling subsystem.
//!
//! # Data Flow
//! ```text
//! caller request (GenericRequest)
//!     → translator.rs (method/header copy, envoy header injection,
//!       Url-Orig/Host-Orig, body buffering)
//!     → engine-native request bound to the live engine
//!     → executor.rs serializes upload writes on one worker
//! ```

pub mod executor;
pub mod request;
pub mod translator;

pub use executor::{SerialExecutor, TransferExecutor};
pub use request::{BufferBody, GenericRequest, RequestBody, ShimRequest};
pub use translator::{translate, TranslateError, HOST_ORIG, URL_ORIG};
