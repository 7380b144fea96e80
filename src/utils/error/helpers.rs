//! Helper functions for creating specific error types

use super::types::MonitorError;

/// Helper functions for creating specific errors
impl MonitorError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn cardinality(kind: &'static str, actual: usize) -> Self {
        Self::Cardinality { kind, actual }
    }

    pub fn query<S: Into<String>>(message: S) -> Self {
        Self::Query(message.into())
    }

    pub fn encoding<S: Into<String>>(message: S) -> Self {
        Self::Encoding(message.into())
    }

    pub fn timeout<S: Into<String>>(message: S) -> Self {
        Self::Timeout(message.into())
    }

    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::Server(message.into())
    }

    /// Whether this error can only be raised while a status pass is running
    pub fn is_request_time(&self) -> bool {
        matches!(
            self,
            Self::Cardinality { .. } | Self::Query(_) | Self::Encoding(_) | Self::Timeout(_)
        )
    }
}
