//! Configuration schema definitions.
//!
//! This module defines the configuration surface for the transport shim.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Configuration for building the network engine.
///
/// Immutable once handed to a build call; changing any field requires a
/// forced re-initialize of the engine.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Cache directory name under the platform cache root.
    /// Paired with `cache_size_mb`; a name alone does not enable caching.
    pub cache_folder_name: Option<String>,

    /// Disk cache budget in megabytes. 0 disables the disk cache.
    pub cache_size_mb: u64,

    /// Envoy URL whose query string carries proxy header directives.
    /// When unset, requests are translated without header injection.
    pub envoy_url: Option<String>,

    /// Numeric strategy selector passed to the engine. 0 = engine default.
    pub strategy: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cache_folder_name: Some("envoy-cache".to_string()),
            cache_size_mb: 10,
            envoy_url: None,
            strategy: 0,
        }
    }
}

impl EngineConfig {
    /// Whether this configuration asks for a disk cache at all.
    pub fn wants_disk_cache(&self) -> bool {
        self.cache_size_mb > 0
            && self
                .cache_folder_name
                .as_deref()
                .is_some_and(|name| !name.is_empty())
    }
}
