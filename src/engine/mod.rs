//! Engine lifecycle subsystem.
//!
//! # Data Flow
//! ```text
//! EngineConfig
//!     → lifecycle.rs (resolve cache dir, assemble EngineSpec)
//!     → capability.rs (EngineProvider builds the opaque engine)
//!     → registrar.rs (install engine as global URL-stream handler)
//!     → live engine held in the lifecycle slot, read by the translator
//! ```
//!
//! # Design Decisions
//! - One live engine per lifecycle; replaced only by a forced re-initialize
//! - All engine internals sit behind capability traits
//! - Handler registration is best-effort and never fails a build

pub mod capability;
pub mod lifecycle;
pub mod registrar;

pub use capability::{
    BuildError, CustomEngineBuilder, DiskCacheSpec, Engine, EngineProvider, EngineRequest,
    EngineRequestBuilder, EngineSpec, HostContext, StreamHandlerFactory, TransferCallback,
};
pub use lifecycle::EngineLifecycle;
pub use registrar::{HandlerRegistry, InstallError, RegistrationError, StreamHandlerRegistrar};
