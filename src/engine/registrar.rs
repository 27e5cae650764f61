//! Global URL-stream handler installation.
//!
//! # Responsibilities
//! - Install a freshly built engine as the process-wide URL-stream handler
//! - Fall back to a forced replacement when the one-time registration slot
//!   is already taken
//!
//! # Design Decisions
//! - Two strategies behind one capability: a documented `install` and a
//!   best-effort `force_install` that may be unsupported on some platforms
//! - Registration failure is recoverable; the engine stays fully usable for
//!   direct request translation without the global hook

use std::sync::Arc;

use thiserror::Error;

use crate::engine::capability::{Engine, StreamHandlerFactory};

/// Errors from a single installation attempt.
#[derive(Debug, Error)]
pub enum InstallError {
    /// The one-time registration slot already holds a handler.
    #[error("a stream handler factory is already installed")]
    AlreadyInstalled,

    /// This strategy is not available on the current platform.
    #[error("stream handler installation unsupported: {0}")]
    Unsupported(String),
}

/// Outcome of a full registration pass (primary plus fallback).
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// The primary slot was taken and the forced replacement failed too.
    #[error("fallback installation failed after primary reported a handler already installed: {0}")]
    Fallback(InstallError),

    /// The primary attempt failed for a reason the fallback cannot fix.
    #[error("stream handler installation failed: {0}")]
    Primary(InstallError),
}

/// Process-wide URL handler slot, as exposed by the host platform.
pub trait HandlerRegistry: Send + Sync {
    /// The documented registration API. One-time-only: fails with
    /// [`InstallError::AlreadyInstalled`] on the second call.
    fn install(&self, factory: Arc<dyn StreamHandlerFactory>) -> Result<(), InstallError>;

    /// Low-level override that replaces whatever handler is installed.
    /// Best-effort; may be [`InstallError::Unsupported`].
    fn force_install(&self, factory: Arc<dyn StreamHandlerFactory>) -> Result<(), InstallError>;
}

/// Installs engines into a [`HandlerRegistry`], once per engine build.
pub struct StreamHandlerRegistrar {
    registry: Arc<dyn HandlerRegistry>,
}

impl StreamHandlerRegistrar {
    pub fn new(registry: Arc<dyn HandlerRegistry>) -> Self {
        Self { registry }
    }

    /// Install the engine's stream-handler factory globally.
    ///
    /// Tries the documented API first; if that reports an already-installed
    /// handler, falls back to the forced replacement. Errors from either
    /// path are returned for logging but are never fatal to engine
    /// initialization.
    pub fn register(&self, engine: &dyn Engine) -> Result<(), RegistrationError> {
        let factory = engine.stream_handler_factory();

        match self.registry.install(factory.clone()) {
            Ok(()) => Ok(()),
            Err(InstallError::AlreadyInstalled) => {
                tracing::debug!("stream handler already installed, forcing replacement");
                self.registry
                    .force_install(factory)
                    .map_err(RegistrationError::Fallback)
            }
            Err(err) => Err(RegistrationError::Primary(err)),
        }
    }
}
