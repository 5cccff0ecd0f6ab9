//! Engine configuration
//!
//! ```toml
//! scroll_magnitude = 0.1
//! zoom_magnitude = 0.2
//! initial_capacity = 4096
//! ```
//!
//! Every key is optional; missing keys take the defaults below.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Largest `initial_capacity` accepted; larger logs still grow on demand
pub const MAX_INITIAL_CAPACITY: usize = 1 << 24;

/// Errors loading an [`EngineConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Config text is not valid TOML for this schema
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is out of its allowed range
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Tunables for a trace session
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Fraction of the rendered count moved by one scroll step
    pub scroll_magnitude: f64,
    /// Fraction of the rendered count added/removed by one zoom step
    pub zoom_magnitude: f64,
    /// Records pre-allocated in the trace log
    pub initial_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            scroll_magnitude: 0.1,
            zoom_magnitude: 0.2,
            initial_capacity: 4096,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    /// Check that both magnitudes are finite and positive and that the
    /// pre-allocation stays within [`MAX_INITIAL_CAPACITY`]
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("scroll_magnitude", self.scroll_magnitude),
            ("zoom_magnitude", self.zoom_magnitude),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{} must be a positive number, got {}",
                    key, value
                )));
            }
        }
        if self.initial_capacity > MAX_INITIAL_CAPACITY {
            return Err(ConfigError::Invalid(format!(
                "initial_capacity must be at most {}, got {}",
                MAX_INITIAL_CAPACITY, self.initial_capacity
            )));
        }
        Ok(())
    }
}
