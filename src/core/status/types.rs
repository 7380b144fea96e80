//! Per-category status types

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// Overall verdict of the directory server itself
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerStatus {
    /// The status could not be determined
    #[default]
    Unknown,
    Unavailable,
    Degraded,
    Available,
}

impl ServerStatus {
    /// Verdict implied by the server's alert lists
    pub fn from_alerts(unavailable_alerts: &[String], degraded_alerts: &[String]) -> Self {
        if !unavailable_alerts.is_empty() {
            Self::Unavailable
        } else if !degraded_alerts.is_empty() {
            Self::Degraded
        } else {
            Self::Available
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Unavailable => "unavailable",
            Self::Degraded => "degraded",
            Self::Available => "available",
        }
    }
}

impl fmt::Display for ServerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a requested HTTP servlet is enabled
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServletStatus {
    pub name: String,
    pub enabled: bool,
}

impl ServletStatus {
    pub fn new(name: impl Into<String>, enabled: bool) -> Self {
        Self {
            name: name.into(),
            enabled,
        }
    }
}

/// Availability of a custom monitor entry
///
/// `properties` is `None` when the entry was not found. Equality ignores the
/// properties.
#[derive(Debug, Clone, Serialize)]
pub struct MonitorStatus {
    pub name: String,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Map<String, Value>>,
}

impl MonitorStatus {
    /// Status of a monitor whose entry does not exist
    pub fn missing(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            available: false,
            properties: None,
        }
    }
}

impl PartialEq for MonitorStatus {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.available == other.available
    }
}

impl Eq for MonitorStatus {}

/// Availability of a store adapter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreAdapterStatus {
    pub name: String,
    pub available: bool,
}

/// Availability of a load-balancing algorithm and its view of its servers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadBalancingAlgorithmStatus {
    pub name: String,
    pub available: bool,
    pub num_available_servers: u32,
    pub num_degraded_servers: u32,
    pub num_unavailable_servers: u32,
}

/// Why a status pass failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusError {
    pub message: String,
}

impl StatusError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
