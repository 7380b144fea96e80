//! HTTP response handling for errors

use super::types::MonitorError;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};

/// Error body returned for failures outside of a status pass
#[derive(Debug, Clone, serde::Serialize)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub message: String,
}

impl MonitorError {
    fn error_code(&self) -> &'static str {
        match self {
            MonitorError::Config(_) => "CONFIG_ERROR",
            MonitorError::Cardinality { .. } => "CARDINALITY_ERROR",
            MonitorError::Query(_) => "QUERY_ERROR",
            MonitorError::Encoding(_) => "ENCODING_ERROR",
            MonitorError::Timeout(_) => "TIMEOUT",
            MonitorError::Io(_) => "IO_ERROR",
            MonitorError::Yaml(_) | MonitorError::Serialization(_) => "SERIALIZATION_ERROR",
            MonitorError::Server(_) => "SERVER_ERROR",
        }
    }
}

impl ResponseError for MonitorError {
    fn status_code(&self) -> StatusCode {
        match self {
            MonitorError::Cardinality { .. } | MonitorError::Query(_) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            MonitorError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            code: self.error_code(),
            message: self.to_string(),
        })
    }
}
