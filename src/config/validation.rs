//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the cache folder name is a plain directory name
//! - Check the envoy URL parses when one is given
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: EngineConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;
use url::Url;

use crate::config::schema::EngineConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Cache folder name is empty or contains path separators.
    #[error("cache folder name {0:?} must be a single path component")]
    CacheFolderName(String),

    /// Envoy URL was set but does not parse as a URL.
    #[error("envoy URL {0:?} is not a valid URL")]
    EnvoyUrl(String),
}

/// Validate an engine configuration, collecting every error found.
pub fn validate_config(config: &EngineConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Some(name) = config.cache_folder_name.as_deref() {
        if name.is_empty() || name.contains('/') || name.contains('\\') {
            errors.push(ValidationError::CacheFolderName(name.to_string()));
        }
    }

    if let Some(raw) = config.envoy_url.as_deref() {
        if Url::parse(raw).is_err() {
            errors.push(ValidationError::EnvoyUrl(raw.to_string()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&EngineConfig::default()).is_ok());
    }

    #[test]
    fn rejects_nested_cache_folder() {
        let config = EngineConfig {
            cache_folder_name: Some("a/b".to_string()),
            ..EngineConfig::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::CacheFolderName("a/b".to_string())]
        );
    }

    #[test]
    fn collects_multiple_errors() {
        let config = EngineConfig {
            cache_folder_name: Some(String::new()),
            envoy_url: Some("not a url".to_string()),
            ..EngineConfig::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn accepts_envoy_scheme_url() {
        let config = EngineConfig {
            envoy_url: Some("envoy://proxy.example?header_Auth=tok".to_string()),
            ..EngineConfig::default()
        };
        assert!(validate_config(&config).is_ok());
    }
}
