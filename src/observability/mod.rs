//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging only; metrics and distributed tracing are the host
//!   application's concern
//! - Library code logs through `tracing` macros and never installs a
//!   subscriber itself; `logging::init` is an opt-in helper for hosts

pub mod logging;
