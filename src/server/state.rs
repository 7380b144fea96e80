//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::engine::StatusClient;
use std::sync::Arc;
use std::time::Duration;

/// HTTP server state shared across handlers
///
/// Both fields are read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Effective configuration
    pub config: Arc<Config>,
    /// Status client used by every request
    pub client: Arc<StatusClient>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: Config, client: StatusClient) -> Self {
        Self {
            config: Arc::new(config),
            client: Arc::new(client),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Deadline for a single status pass
    pub fn status_timeout(&self) -> Duration {
        self.config.server.status_timeout()
    }
}
