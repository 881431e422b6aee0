//! Logger configuration loaded from TOML

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::logging::{Logger, Severity, Sink};

/// Settings for building a [`Logger`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Name attached to every line
    pub name: String,

    /// Minimum level, any casing; unknown names mean "info" (default: info)
    #[serde(default)]
    pub level: Severity,
}

impl LoggerConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: Severity::default(),
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse logger config")
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read logger config {}", path.display()))?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(
            "Loaded logger config for '{}' from {}",
            config.name,
            path.display()
        );
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize logger config")?;
        std::fs::write(path, content).context("Failed to write logger config")?;
        Ok(())
    }

    /// Build a console logger
    pub fn build(&self) -> Logger {
        Logger::new(self.name.clone(), self.level)
    }

    /// Build a logger writing to `sink`
    pub fn build_with_sink<S: Sink>(&self, sink: S) -> Logger<S> {
        Logger::with_sink(self.name.clone(), self.level, sink)
    }
}
