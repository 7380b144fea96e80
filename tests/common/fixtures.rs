//! Monitoring tree fixtures

use monitor_status::core::directory::{DirectoryEntry, InMemoryDirectory, OBJECT_CLASS};
use monitor_status::core::engine::*;
use monitor_status::{MonitorAvailabilityCriteria, StatusClient};
use std::sync::Arc;

pub const MONITORED_SERVLET: &str = "Monitored Servlet";
pub const MONITOR_NAME_1: &str = "Test Monitor 1";
pub const MONITOR_NAME_2: &str = "Test Monitor 2";

/// Servlets checked by the standard client
pub fn servlets_to_check() -> Vec<String> {
    vec![MONITORED_SERVLET.to_string()]
}

/// Monitor criteria checked by the standard client
pub fn monitors_to_check() -> Vec<MonitorAvailabilityCriteria> {
    vec![
        format!("{}:state:READY,running", MONITOR_NAME_1)
            .parse()
            .unwrap(),
        format!("{}:available:true", MONITOR_NAME_2).parse().unwrap(),
    ]
}

/// Builder for a cn=monitor tree
#[derive(Debug, Default)]
pub struct MonitorTree {
    entries: Vec<DirectoryEntry>,
}

impl MonitorTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// A tree where every checked signal is healthy
    pub fn healthy() -> Self {
        Self::new()
            .general(&[], &[])
            .servlets(&[
                "Monitored Servlet https://example.com/monitoredServlet",
                "Unmonitored Servlet https://example.com/unmonitoredServlet",
            ])
            .monitor(MONITOR_NAME_1, "state", "ready")
            .monitor(MONITOR_NAME_2, "available", "true")
            .load_balancing_algorithm("User Store LBA", "AVAILABLE", 1, 0, 0)
            .store_adapter("UserStoreAdapter", "AVAILABLE")
    }

    /// The cn=monitor entry with its alert lists
    pub fn general(mut self, unavailable_alerts: &[&str], degraded_alerts: &[&str]) -> Self {
        let mut entry = DirectoryEntry::new("cn=monitor")
            .with_attribute(OBJECT_CLASS, ["top", "ds-monitor-entry", GENERAL_MONITOR_ENTRY])
            .with_attribute("cn", ["monitor"]);
        if !unavailable_alerts.is_empty() {
            entry.add_values(UNAVAILABLE_ALERT_TYPE, unavailable_alerts.iter().copied());
        }
        if !degraded_alerts.is_empty() {
            entry.add_values(DEGRADED_ALERT_TYPE, degraded_alerts.iter().copied());
        }
        self.entries.push(entry);
        self
    }

    pub fn servlets(mut self, enabled_servlets: &[&str]) -> Self {
        self.entries.push(
            DirectoryEntry::new("cn=Http Servlet Configuration,cn=monitor")
                .with_attribute(
                    OBJECT_CLASS,
                    [
                        "top",
                        "ds-monitor-entry",
                        HTTP_SERVLET_CONFIG_MONITOR_ENTRY,
                        "extensibleObject",
                    ],
                )
                .with_attribute("cn", ["Http Servlet Configuration"])
                .with_attribute(ENABLED_SERVLET_AND_PATH, enabled_servlets.iter().copied()),
        );
        self
    }

    pub fn monitor(mut self, name: &str, availability_attribute: &str, value: &str) -> Self {
        self.entries.push(
            DirectoryEntry::new(format!("cn={},cn=monitor", name))
                .with_attribute(
                    OBJECT_CLASS,
                    ["top", "ds-monitor-entry", "ds-test-monitor-entry"],
                )
                .with_attribute(availability_attribute, [value])
                .with_attribute("single-valued", ["value"])
                .with_attribute("multi-valued", ["value1", "value2"]),
        );
        self
    }

    pub fn load_balancing_algorithm(
        mut self,
        name: &str,
        status: &str,
        num_available_servers: u32,
        num_degraded_servers: u32,
        num_unavailable_servers: u32,
    ) -> Self {
        self.entries.push(
            DirectoryEntry::new(format!("cn=load-balancing algorithm {},cn=monitor", name))
                .with_attribute(
                    OBJECT_CLASS,
                    [
                        "top",
                        "ds-monitor-entry",
                        LOAD_BALANCING_ALGORITHM_MONITOR_ENTRY,
                        "extensibleObject",
                    ],
                )
                .with_attribute("cn", [format!("load-balancing algorithm {}", name)])
                .with_attribute(ALGORITHM_NAME, [name])
                .with_attribute(
                    "config-entry-dn",
                    [format!("cn={},cn=Load-Balancing Algorithms,cn=config", name)],
                )
                .with_attribute(HEALTH_CHECK_STATE, [status])
                .with_attribute("ldap-external-server", [format!("example.com:636:{}", status)])
                .with_attribute(NUM_AVAILABLE_SERVERS, [num_available_servers.to_string()])
                .with_attribute(NUM_DEGRADED_SERVERS, [num_degraded_servers.to_string()])
                .with_attribute(NUM_UNAVAILABLE_SERVERS, [num_unavailable_servers.to_string()]),
        );
        self
    }

    pub fn store_adapter(mut self, name: &str, status: &str) -> Self {
        self.entries.push(
            DirectoryEntry::new(format!("cn=Store Adapter {},cn=monitor", name))
                .with_attribute(
                    OBJECT_CLASS,
                    [
                        "top",
                        "ds-monitor-entry",
                        STORE_ADAPTER_MONITOR_ENTRY,
                        "extensibleObject",
                    ],
                )
                .with_attribute("cn", [format!("Store Adapter {}", name)])
                .with_attribute(STORE_ADAPTER_NAME, [name])
                .with_attribute(STORE_ADAPTER_STATUS, [status]),
        );
        self
    }

    pub fn build(self) -> InMemoryDirectory {
        InMemoryDirectory::new(self.entries).unwrap()
    }

    /// Client over this tree checking the given servlets and monitors
    pub fn client(
        self,
        servlets: Vec<String>,
        criteria: Vec<MonitorAvailabilityCriteria>,
    ) -> StatusClient {
        StatusClient::new(Arc::new(self.build()), servlets, criteria)
    }
}

/// Snapshot of a healthy monitoring tree
pub const HEALTHY_SNAPSHOT: &str = r#"
entries:
  - dn: cn=monitor
    attributes:
      objectClass: [top, ds-monitor-entry, ds-general-monitor-entry]
      cn: monitor
  - dn: cn=Http Servlet Configuration,cn=monitor
    attributes:
      objectClass: [top, ds-monitor-entry, ds-http-servlet-config-monitor-entry]
      enabled-servlet-and-path:
        - Monitored Servlet https://example.com/monitoredServlet
  - dn: cn=Test Monitor 1,cn=monitor
    attributes:
      objectClass: [top, ds-monitor-entry, ds-test-monitor-entry]
      state: running
      entryUUID: 3f1c27a4-1b5a-4c43-9f0e-5c6e6c1e2a10
  - dn: cn=load-balancing algorithm User Store LBA,cn=monitor
    attributes:
      objectClass: [top, ds-monitor-entry, ds-load-balancing-algorithm-monitor-entry]
      algorithm-name: User Store LBA
      health-check-state: AVAILABLE
      num-available-servers: 2
      num-degraded-servers: 0
      num-unavailable-servers: 0
  - dn: cn=Store Adapter UserStoreAdapter,cn=monitor
    attributes:
      objectClass: [top, ds-monitor-entry, ds-store-adapter-monitor-entry]
      store-adapter-name: UserStoreAdapter
      store-adapter-status: AVAILABLE
"#;
