//! Status client

use crate::core::criteria::MonitorAvailabilityCriteria;
use crate::core::directory::MonitorDirectory;
use crate::core::status::StatusReport;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Computes the availability of a directory server from its monitoring tree
///
/// Holds no mutable state; one client is shared by every request and each
/// call to [`get_status`](Self::get_status) is an independent pass.
#[derive(Clone)]
pub struct StatusClient {
    pub(super) directory: Arc<dyn MonitorDirectory>,
    pub(super) servlets: Vec<String>,
    pub(super) criteria: Vec<MonitorAvailabilityCriteria>,
}

impl StatusClient {
    /// Create a client checking the given servlets and monitor entries
    pub fn new(
        directory: Arc<dyn MonitorDirectory>,
        servlets: Vec<String>,
        criteria: Vec<MonitorAvailabilityCriteria>,
    ) -> Self {
        Self {
            directory,
            servlets,
            criteria,
        }
    }

    pub fn servlets(&self) -> &[String] {
        &self.servlets
    }

    pub fn criteria(&self) -> &[MonitorAvailabilityCriteria] {
        &self.criteria
    }

    /// Run a full status pass
    ///
    /// Never fails: a pass that cannot be completed produces a report that
    /// carries the error and an unknown server status.
    pub async fn get_status(&self) -> StatusReport {
        match self.collect().await {
            Ok(report) => report,
            Err(e) => {
                if e.is_request_time() {
                    warn!("Status pass failed: {}", e);
                } else {
                    error!("Status pass failed unexpectedly: {}", e);
                }
                StatusReport::from_error(&e)
            }
        }
    }

    async fn collect(&self) -> Result<StatusReport> {
        let (server, alert_types) = self.server_status().await?;
        let servlets = self.servlet_statuses().await?;
        let monitors = self.monitor_statuses().await?;
        let store_adapters = self.store_adapter_statuses().await?;
        let load_balancing_algorithms = self.load_balancing_algorithm_statuses().await?;

        debug!(
            "Status pass complete: server={} servlets={} monitors={} store_adapters={} load_balancing_algorithms={}",
            server,
            servlets.len(),
            monitors.len(),
            store_adapters.len(),
            load_balancing_algorithms.len()
        );

        Ok(StatusReport {
            server,
            alert_types,
            servlets,
            monitors,
            store_adapters,
            load_balancing_algorithms,
            error: None,
        })
    }
}

impl std::fmt::Debug for StatusClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatusClient")
            .field("servlets", &self.servlets)
            .field("criteria", &self.criteria)
            .finish_non_exhaustive()
    }
}
