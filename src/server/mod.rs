//! HTTP server implementation
//!
//! This module provides the HTTP server and the status route.

pub mod builder;
pub mod routes;
pub mod server;
pub mod state;


pub use builder::{ServerBuilder, run_server};
pub use self::server::HttpServer;
pub use state::AppState;
