//! Error types for the status service

use thiserror::Error;

/// Result type alias for the status service
pub type Result<T> = std::result::Result<T, MonitorError>;

/// Main error type for the status service
#[derive(Error, Debug)]
pub enum MonitorError {
    /// Configuration errors, including malformed monitor criteria
    #[error("Configuration error: {0}")]
    Config(String),

    /// A monitor category that must be backed by exactly one entry was not
    #[error(
        "Expected one and only one {kind} monitor entry; actual number was {actual}"
    )]
    Cardinality {
        /// Human readable name of the monitor category
        kind: &'static str,
        /// Number of entries the search returned
        actual: usize,
    },

    /// Failures reported by the monitor directory backend
    #[error("Query error: {0}")]
    Query(String),

    /// Attribute values that are missing or cannot be interpreted
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// A status pass exceeded its deadline
    #[error("Timeout error: {0}")]
    Timeout(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP server errors
    #[error("Server error: {0}")]
    Server(String),
}
