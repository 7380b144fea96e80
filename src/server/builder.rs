//! Server builder and run_server function

use crate::config::Config;
use crate::core::directory::MonitorDirectory;
use crate::server::server::HttpServer;
use crate::utils::error::{MonitorError, Result};
use std::sync::Arc;
use tracing::info;

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
    directory: Option<Arc<dyn MonitorDirectory>>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Use this directory instead of the configured one
    pub fn with_directory(mut self, directory: Arc<dyn MonitorDirectory>) -> Self {
        self.directory = Some(directory);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| MonitorError::config("Configuration is required"))?;

        match self.directory {
            Some(directory) => HttpServer::with_directory(&config, directory),
            None => HttpServer::new(&config).await,
        }
    }
}

/// Build and run the server for a loaded configuration
pub async fn run_server(config: Config) -> Result<()> {
    info!("Starting {} v{}", crate::NAME, crate::VERSION);

    let server = ServerBuilder::new().with_config(config).build().await?;
    server.start().await
}
