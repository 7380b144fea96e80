//! Configuration management for the status service
//!
//! Configuration is read from a YAML file and then overridden by command line
//! flags (see [`cli`]). Everything is validated once at startup; a malformed
//! monitor criteria aborts the process there and never reaches request time.

pub mod cli;
pub mod models;
pub mod validation;

pub use cli::CliArgs;
pub use models::*;
pub use validation::Validate;

use crate::core::criteria::MonitorAvailabilityCriteria;
use crate::utils::error::{MonitorError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the status service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Status route configuration
    #[serde(default)]
    pub status: StatusConfig,
    /// Monitor directory configuration
    #[serde(default)]
    pub directory: DirectoryConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| MonitorError::Config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml(&content)?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse configuration from a YAML document without validating it
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| MonitorError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Build the effective configuration from command line arguments
    ///
    /// The config file (if any) is loaded first and the flags are merged on
    /// top of it. The result is validated.
    pub async fn load(args: &CliArgs) -> Result<Self> {
        let base = match &args.config {
            Some(path) => Self::from_file(path).await?,
            None => Self::default(),
        };

        let config = base.merge(args.overrides());
        config.validate()?;
        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.server
            .validate()
            .map_err(|e| MonitorError::Config(format!("Server config error: {}", e)))?;

        self.status
            .validate()
            .map_err(|e| MonitorError::Config(format!("Status config error: {}", e)))?;

        self.directory
            .validate()
            .map_err(|e| MonitorError::Config(format!("Directory config error: {}", e)))?;

        self.logging
            .validate()
            .map_err(|e| MonitorError::Config(format!("Logging config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.server = self.server.merge(other.server);
        self.status = self.status.merge(other.status);
        self.directory = self.directory.merge(other.directory);
        self.logging = self.logging.merge(other.logging);
        self
    }

    /// Parsed monitor criteria
    pub fn criteria(&self) -> Result<Vec<MonitorAvailabilityCriteria>> {
        self.status.criteria()
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| MonitorError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
