//! Generator configuration
//!
//! Holds the two tunables of a generation run with their documented
//! defaults:
//!
//! | field     | default | meaning                               |
//! |-----------|---------|---------------------------------------|
//! | `count`   | 10      | number of values to produce           |
//! | `modulus` | 2^32    | exclusive upper bound on every value  |
//!
//! Configs can be built in code, or loaded from JSON where missing fields
//! fall back to the defaults.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::models::Modulus;
use crate::rng::GeneratorError;

/// Number of values produced when no count is given
pub const DEFAULT_COUNT: usize = 10;

/// Modulus used when none is given (2^32)
pub const DEFAULT_MODULUS: i128 = 1 << 32;

/// Errors that can occur while loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] GeneratorError),
}

/// Parameters of a generation run
///
/// # Example
/// ```
/// use zeta_prng_core::GeneratorConfig;
///
/// let config = GeneratorConfig::default();
/// assert_eq!(config.count, 10);
/// assert_eq!(config.modulus, 1 << 32);
///
/// let custom: GeneratorConfig = serde_json::from_str(r#"{"count": 3}"#).unwrap();
/// assert_eq!(custom.count, 3);
/// assert_eq!(custom.modulus, 1 << 32);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of values to produce
    pub count: usize,

    /// Exclusive upper bound; must be positive
    pub modulus: i128,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            modulus: DEFAULT_MODULUS,
        }
    }
}

impl GeneratorConfig {
    pub fn new(count: usize, modulus: i128) -> Self {
        Self { count, modulus }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_modulus(mut self, modulus: i128) -> Self {
        self.modulus = modulus;
        self
    }

    /// Check the modulus and return it in validated form
    ///
    /// # Errors
    /// Returns `GeneratorError::InvalidArgument` if `modulus <= 0`
    pub fn validate(&self) -> Result<Modulus, GeneratorError> {
        Modulus::new(self.modulus)
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GeneratorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// SHA-256 of the JSON form, hex encoded
    ///
    /// Identifies a run in logs. Field order is fixed by the struct, so the
    /// serialized form is already canonical.
    pub fn config_hash(&self) -> Result<String, ConfigError> {
        let json = serde_json::to_string(self)?;
        let mut hasher = Sha256::new();
        hasher.update(json.as_bytes());
        Ok(format!("{:x}", hasher.finalize()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides() {
        let config = GeneratorConfig::default().with_count(3).with_modulus(97);
        assert_eq!(config, GeneratorConfig::new(3, 97));
    }

    #[test]
    fn test_validate_rejects_negative_modulus() {
        let config = GeneratorConfig::default().with_modulus(-5);
        assert!(matches!(
            config.validate(),
            Err(GeneratorError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_config_hash_is_stable_and_sensitive() {
        let a = GeneratorConfig::default();
        let b = GeneratorConfig::default();
        let c = GeneratorConfig::default().with_count(11);

        assert_eq!(a.config_hash().unwrap(), b.config_hash().unwrap());
        assert_ne!(a.config_hash().unwrap(), c.config_hash().unwrap());
        assert_eq!(a.config_hash().unwrap().len(), 64);
    }
}
