//! Status route configuration

use super::*;
use crate::core::criteria::MonitorAvailabilityCriteria;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

/// What the status route checks and where it is mounted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusConfig {
    /// Path of the status route
    #[serde(default = "default_status_path")]
    pub path: String,
    /// HTTP servlets that must be enabled for the server to be available
    #[serde(default)]
    pub monitored_servlets: Vec<String>,
    /// Monitor criteria in `<name>:<attribute>:<value>[,<value>...]` form
    #[serde(default)]
    pub monitors: Vec<String>,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            path: default_status_path(),
            monitored_servlets: Vec::new(),
            monitors: Vec::new(),
        }
    }
}

impl StatusConfig {
    /// Merge status configurations; lists from `other` are appended
    pub fn merge(mut self, other: Self) -> Self {
        if other.path != default_status_path() {
            self.path = other.path;
        }
        for servlet in other.monitored_servlets {
            if !self.monitored_servlets.contains(&servlet) {
                self.monitored_servlets.push(servlet);
            }
        }
        for monitor in other.monitors {
            if !self.monitors.contains(&monitor) {
                self.monitors.push(monitor);
            }
        }
        self
    }

    /// Parse every configured monitor criteria, failing on the first malformed one
    pub fn criteria(&self) -> Result<Vec<MonitorAvailabilityCriteria>> {
        self.monitors
            .iter()
            .map(|monitor| monitor.parse())
            .collect()
    }
}
