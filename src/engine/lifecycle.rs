//! Engine ownership and lifecycle.
//!
//! # Responsibilities
//! - Own the single live engine instance and the envoy URL it was built with
//! - Build engines from configuration, or delegate to an injected custom
//!   builder
//! - Serialize builds so concurrent initializers never race
//!
//! # Design Decisions
//! - Explicit context object instead of process-global state; callers hold
//!   it behind an `Arc` and inject it where needed
//! - Build exclusion via a mutex, current-engine reads via an atomic Arc
//!   swap: `current_engine` never blocks on a build in progress
//! - A failed build leaves the previously installed engine in place

use std::fs;
use std::sync::{Arc, Mutex};

use arc_swap::ArcSwapOption;

use crate::config::EngineConfig;
use crate::engine::capability::{
    BuildError, CustomEngineBuilder, DiskCacheSpec, Engine, EngineProvider, EngineRequest,
    EngineSpec, HostContext, TransferCallback,
};
use crate::engine::registrar::StreamHandlerRegistrar;
use crate::http::executor::{SerialExecutor, TransferExecutor};
use crate::http::request::GenericRequest;
use crate::http::translator::{self, TranslateError};

/// A live engine together with the envoy URL it was built with.
///
/// The pair is swapped in atomically; readers always observe a consistent
/// engine/URL combination.
struct EngineSlot {
    engine: Arc<dyn Engine>,
    envoy_url: Option<String>,
}

/// Owns and mutates the one live engine.
pub struct EngineLifecycle {
    slot: ArcSwapOption<EngineSlot>,
    build_lock: Mutex<()>,
    provider: Arc<dyn EngineProvider>,
    host: Arc<dyn HostContext>,
    custom_builder: Option<Arc<dyn CustomEngineBuilder>>,
    registrar: Option<StreamHandlerRegistrar>,
    executor: Arc<dyn TransferExecutor>,
}

impl EngineLifecycle {
    /// Create a lifecycle with the default serial upload executor.
    pub fn new(provider: Arc<dyn EngineProvider>, host: Arc<dyn HostContext>) -> Self {
        Self {
            slot: ArcSwapOption::empty(),
            build_lock: Mutex::new(()),
            provider,
            host,
            custom_builder: None,
            registrar: None,
            executor: Arc::new(SerialExecutor::new()),
        }
    }

    /// Replace the default build path with a caller-supplied builder.
    pub fn with_custom_builder(mut self, builder: Arc<dyn CustomEngineBuilder>) -> Self {
        self.custom_builder = Some(builder);
        self
    }

    /// Attach a registrar; every successful build installs the new engine
    /// as the global URL-stream handler.
    pub fn with_registrar(mut self, registrar: StreamHandlerRegistrar) -> Self {
        self.registrar = Some(registrar);
        self
    }

    /// Use a caller-supplied executor instead of the default serial worker.
    pub fn with_executor(mut self, executor: Arc<dyn TransferExecutor>) -> Self {
        self.executor = executor;
        self
    }

    /// Build and install the engine.
    ///
    /// A no-op when an engine already exists and `reinitialize_if_needed` is
    /// false. Builds are mutually exclusive; concurrent callers observe
    /// either the previous or the new engine, never a partial one. On build
    /// failure the error is returned and any previously installed engine
    /// stays in place.
    pub fn initialize(
        &self,
        config: &EngineConfig,
        reinitialize_if_needed: bool,
    ) -> Result<(), BuildError> {
        let _guard = self.build_lock.lock().unwrap_or_else(|e| e.into_inner());

        if self.slot.load().is_some() && !reinitialize_if_needed {
            tracing::debug!("engine already initialized, skipping rebuild");
            return Ok(());
        }

        let engine = match &self.custom_builder {
            Some(builder) => {
                tracing::debug!("delegating engine construction to custom builder");
                builder.build(&*self.host).ok_or(BuildError::CustomBuilder)?
            }
            None => self.build_engine(config)?,
        };

        tracing::info!(version = %engine.version(), "engine ready");

        if let Some(registrar) = &self.registrar {
            if let Err(err) = registrar.register(&*engine) {
                tracing::warn!(error = %err, "global stream handler not installed");
            }
        }

        self.slot.store(Some(Arc::new(EngineSlot {
            engine,
            envoy_url: config.envoy_url.clone(),
        })));
        Ok(())
    }

    /// Build a fully configured engine without installing it.
    ///
    /// Brotli, HTTP/2 and QUIC are always enabled. The disk cache is only
    /// enabled when both a folder name and a non-zero size are configured;
    /// a cache directory that cannot be created disables the cache rather
    /// than failing the build.
    pub fn build_engine(&self, config: &EngineConfig) -> Result<Arc<dyn Engine>, BuildError> {
        let disk_cache = match (config.wants_disk_cache(), config.cache_folder_name.as_deref()) {
            (true, Some(name)) => {
                let path = self.host.cache_root().join(name);
                match fs::create_dir_all(&path) {
                    Ok(()) => Some(DiskCacheSpec {
                        path,
                        max_bytes: config.cache_size_mb * 1024 * 1024,
                    }),
                    Err(err) => {
                        tracing::warn!(
                            path = %path.display(),
                            error = %err,
                            "cache directory creation failed, disk cache disabled"
                        );
                        None
                    }
                }
            }
            _ => None,
        };

        match &config.envoy_url {
            Some(url) => tracing::debug!(envoy_url = %url, "building engine with envoy url"),
            None => tracing::debug!("building engine with no envoy url"),
        }

        let spec = EngineSpec {
            brotli: true,
            http2: true,
            quic: true,
            disk_cache,
            envoy_url: config.envoy_url.clone(),
            strategy: (config.strategy > 0).then_some(config.strategy),
        };

        self.provider.build(&spec)
    }

    /// The live engine, if any. Lock-free; never waits on a build.
    pub fn current_engine(&self) -> Option<Arc<dyn Engine>> {
        self.slot.load_full().map(|slot| slot.engine.clone())
    }

    /// Envoy URL associated with the live engine.
    pub fn envoy_url(&self) -> Option<String> {
        self.slot
            .load_full()
            .and_then(|slot| slot.envoy_url.clone())
    }

    /// Drop the live engine. Subsequent translations fail fast until the
    /// next initialize.
    pub fn dispose(&self) {
        let _guard = self.build_lock.lock().unwrap_or_else(|e| e.into_inner());
        self.slot.store(None);
        tracing::debug!("engine disposed");
    }

    /// Translate a request against the live engine and this lifecycle's
    /// executor.
    ///
    /// Fails fast with [`TranslateError::EngineUnavailable`] when no engine
    /// has been initialized.
    pub fn new_request(
        &self,
        request: &dyn GenericRequest,
        callback: Arc<dyn TransferCallback>,
    ) -> Result<Box<dyn EngineRequest>, TranslateError> {
        let slot = self
            .slot
            .load_full()
            .ok_or(TranslateError::EngineUnavailable)?;
        translator::translate(
            request,
            &*slot.engine,
            slot.envoy_url.as_deref(),
            &self.executor,
            callback,
        )
    }
}
