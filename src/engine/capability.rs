//! Capability interfaces for the external network engine.
//!
//! # Responsibilities
//! - Define the seams to the real transport engine (construction, request
//!   building, stream-handler factory)
//! - Define the host-platform seam (cache root provisioning)
//!
//! # Design Decisions
//! - Everything external is a trait object; this crate never sees engine
//!   internals (QUIC/HTTP2/Brotli, cache layout)
//! - A build either yields a fully configured engine or an error, never a
//!   partially configured one

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::http::executor::TransferExecutor;

/// Platform services the shim cannot provide itself.
///
/// Stands in for whatever opaque context handle the host application owns.
pub trait HostContext: Send + Sync {
    /// Root directory under which per-engine cache folders are created.
    fn cache_root(&self) -> PathBuf;
}

/// Fully resolved build plan handed to an [`EngineProvider`].
///
/// Produced by `EngineLifecycle::build_engine` from an `EngineConfig`; the
/// cache directory has already been provisioned by the time the provider
/// sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSpec {
    /// Enable Brotli response decoding.
    pub brotli: bool,
    /// Enable HTTP/2.
    pub http2: bool,
    /// Enable QUIC.
    pub quic: bool,
    /// Disk cache location and budget, when caching is enabled.
    pub disk_cache: Option<DiskCacheSpec>,
    /// Envoy URL associated with the engine, used later for header injection.
    pub envoy_url: Option<String>,
    /// Strategy selector; only set when the configured value is > 0.
    pub strategy: Option<u32>,
}

/// Disk cache parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiskCacheSpec {
    /// Provisioned storage directory.
    pub path: PathBuf,
    /// Cache budget in bytes.
    pub max_bytes: u64,
}

/// Errors surfaced from engine construction.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The engine provider failed to produce an engine.
    #[error("engine provider failed: {0}")]
    Provider(String),

    /// A caller-supplied builder declined to produce an engine.
    #[error("custom engine builder returned no engine")]
    CustomBuilder,
}

/// Constructor seam for the real network engine.
pub trait EngineProvider: Send + Sync {
    /// Build an engine from a resolved spec. All-or-nothing.
    fn build(&self, spec: &EngineSpec) -> Result<Arc<dyn Engine>, BuildError>;
}

/// Caller-supplied engine construction override.
///
/// When registered on the lifecycle at construction time, it replaces the
/// default build path for every initialize call.
pub trait CustomEngineBuilder: Send + Sync {
    fn build(&self, host: &dyn HostContext) -> Option<Arc<dyn Engine>>;
}

/// Opaque handle to a live network engine.
pub trait Engine: Send + Sync {
    /// Engine version string, for logging.
    fn version(&self) -> String;

    /// Start building an engine-native request for the given URL.
    ///
    /// The callback receives response events; the executor serializes the
    /// engine's calls into it.
    fn new_request(
        &self,
        url: &str,
        callback: Arc<dyn TransferCallback>,
        executor: Arc<dyn TransferExecutor>,
    ) -> Box<dyn EngineRequestBuilder>;

    /// Factory capable of serving this engine's streams through the
    /// process-wide URL-handling hook.
    fn stream_handler_factory(&self) -> Arc<dyn StreamHandlerFactory>;
}

/// Builder for an engine-native request.
///
/// Header storage is a multimap: repeated `add_header` calls with the same
/// name append additional values, they never overwrite earlier ones.
pub trait EngineRequestBuilder {
    fn set_method(&mut self, method: &str);

    fn add_header(&mut self, name: &str, value: &str);

    /// Attach a fully buffered upload body. The executor serializes the
    /// actual bytes-on-the-wire writes.
    fn set_upload(&mut self, body: Vec<u8>, executor: Arc<dyn TransferExecutor>);

    fn build(self: Box<Self>) -> Box<dyn EngineRequest>;
}

/// A built engine-native request, owned by the caller.
pub trait EngineRequest: Send {
    /// Hand the request to the engine for execution.
    fn start(&mut self);
}

impl std::fmt::Debug for dyn EngineRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("EngineRequest")
    }
}

/// Opaque response-event callback consumed by the engine.
pub trait TransferCallback: Send + Sync {}

/// Opaque stream-handler factory produced by an engine.
pub trait StreamHandlerFactory: Send + Sync {}
