//! Plugin configuration
//!
//! Settings are loaded from TOML. Every key is optional and falls back to
//! the built-in default, so an empty file is a valid configuration.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or validating a configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {reason}")]
    Invalid { reason: String },
}

/// Configuration for analysis and the selection-change debounce
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PluginConfig {
    /// Quiet period after the last selection change before analysis runs
    pub debounce_ms: u64,

    /// Property group label used when a standalone component is analyzed
    pub component_group_label: String,

    /// Option value used when a standalone component has an empty name
    pub unnamed_component: String,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 200,
            component_group_label: "Component".to_string(),
            unnamed_component: "Unnamed component".to_string(),
        }
    }
}

impl PluginConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: PluginConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.debounce_ms == 0 {
            return Err(ConfigError::Invalid {
                reason: "debounce_ms must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// The debounce window as a duration
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Set the debounce window in milliseconds
    pub fn with_debounce_ms(mut self, millis: u64) -> Self {
        self.debounce_ms = millis;
        self
    }

    /// Set the label of the synthetic group emitted for standalone components
    pub fn with_component_group_label(mut self, label: impl Into<String>) -> Self {
        self.component_group_label = label.into();
        self
    }

    /// Set the fallback option value for unnamed components
    pub fn with_unnamed_component(mut self, value: impl Into<String>) -> Self {
        self.unnamed_component = value.into();
        self
    }
}
