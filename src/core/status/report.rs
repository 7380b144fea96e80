//! Aggregated status report

use super::types::*;
use crate::utils::error::MonitorError;
use actix_web::http::StatusCode;
use serde::Serialize;

/// Outcome of one status pass
///
/// Empty lists and a missing error are left out of the JSON form; `server` is
/// always written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    pub server: ServerStatus,
    #[serde(rename = "alertType", skip_serializing_if = "Vec::is_empty")]
    pub alert_types: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub servlets: Vec<ServletStatus>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub monitors: Vec<MonitorStatus>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub store_adapters: Vec<StoreAdapterStatus>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub load_balancing_algorithms: Vec<LoadBalancingAlgorithmStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<StatusError>,
}

impl StatusReport {
    /// Report for a pass that failed; no partial status survives
    pub fn from_error(error: &MonitorError) -> Self {
        Self {
            error: Some(StatusError::new(error.to_string())),
            ..Default::default()
        }
    }

    /// True only when every signal is healthy and the pass did not fail
    pub fn is_ok(&self) -> bool {
        self.server == ServerStatus::Available
            && self.servlets.iter().all(|s| s.enabled)
            && self.monitors.iter().all(|m| m.available)
            && self.store_adapters.iter().all(|s| s.available)
            && self.load_balancing_algorithms.iter().all(|l| l.available)
            && self.error.is_none()
    }

    /// Whether the server itself reports degraded alerts
    pub fn is_degraded(&self) -> bool {
        self.server == ServerStatus::Degraded
    }

    /// 200 when OK, 429 when degraded, 503 otherwise
    pub fn http_status(&self) -> StatusCode {
        if self.is_ok() {
            StatusCode::OK
        } else if self.is_degraded() {
            StatusCode::TOO_MANY_REQUESTS
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        }
    }

    /// Short label of the verdict for logs
    pub fn verdict(&self) -> &'static str {
        if self.is_ok() {
            "OK"
        } else if self.is_degraded() {
            "DEGRADED"
        } else {
            "NOT OK"
        }
    }
}
