//! HTTP server core implementation

use crate::config::{Config, ServerConfig};
use crate::core::directory::{self, MonitorDirectory};
use crate::core::engine::StatusClient;
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::{MonitorError, Result};
use actix_web::{
    App, HttpServer as ActixHttpServer,
    middleware::{DefaultHeaders, Logger},
    web,
};
use std::sync::Arc;
use tracing::info;

/// Value of the `Server` response header
pub const SERVER_HEADER: &str = "monitor-status";

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server, connecting to the configured directory
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");
        let directory = directory::connect(&config.directory).await?;
        Self::with_directory(config, directory)
    }

    /// Create a new HTTP server reading from an existing directory
    pub fn with_directory(config: &Config, directory: Arc<dyn MonitorDirectory>) -> Result<Self> {
        let criteria = config.criteria()?;
        info!(
            "Checking {} servlets and {} monitors",
            config.status.monitored_servlets.len(),
            criteria.len()
        );

        let client = StatusClient::new(directory, config.status.monitored_servlets.clone(), criteria);

        Ok(Self {
            config: config.server.clone(),
            state: AppState::new(config.clone(), client),
        })
    }

    /// Create the Actix-web application
    pub(crate) fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let path = state.config.status.path.clone();

        App::new()
            .app_data(state)
            .wrap(Logger::default())
            .wrap(DefaultHeaders::new().add(("Server", SERVER_HEADER)))
            .configure(|cfg| routes::status::configure_routes(cfg, &path))
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        let path = self.state.config.status.path.clone();

        info!("Starting HTTP server on {}", bind_addr);

        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || Self::create_app(state.clone()))
            .workers(self.config.worker_count())
            .bind(&bind_addr)
            .map_err(|e| MonitorError::server(format!("Failed to bind {}: {}", bind_addr, e)))?
            .run();

        info!("Status available at http://{}{}", bind_addr, path);

        server
            .await
            .map_err(|e| MonitorError::server(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
