//! Configuration data models
//!
//! This module defines all configuration structures used by the status service.

pub mod directory;
pub mod logging;
pub mod server;
pub mod status;

// Re-export all configuration types
pub use directory::*;
pub use logging::*;
pub use server::*;
pub use status::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8080
}

/// Default status pass deadline in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default path of the status route
pub fn default_status_path() -> String {
    "/status".to_string()
}

/// Default log level
pub fn default_log_level() -> String {
    "info".to_string()
}
