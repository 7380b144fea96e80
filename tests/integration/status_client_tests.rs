//! Status passes over in-memory monitoring trees

use crate::common::assertions::assert_failed_pass;
use crate::common::fixtures::*;
use crate::common::UnreachableDirectory;
use monitor_status::StatusClient;
use monitor_status::core::status::ServerStatus;
use std::sync::Arc;

#[tokio::test]
async fn test_server_ok() {
    let client = MonitorTree::healthy().client(servlets_to_check(), monitors_to_check());
    let report = client.get_status().await;

    assert!(report.is_ok());
    assert_eq!(report.server, ServerStatus::Available);
    assert!(report.alert_types.is_empty());

    assert_eq!(report.servlets.len(), 1);
    assert_eq!(report.servlets[0].name, MONITORED_SERVLET);
    assert!(report.servlets[0].enabled);

    assert_eq!(report.monitors.len(), 2);
    for monitor in &report.monitors {
        assert!(monitor.available);
        assert!(monitor.properties.is_some());
    }

    assert_eq!(report.load_balancing_algorithms.len(), 1);
    let lba = &report.load_balancing_algorithms[0];
    assert_eq!(lba.name, "User Store LBA");
    assert!(lba.available);
    assert_eq!(lba.num_available_servers, 1);
    assert_eq!(lba.num_degraded_servers, 0);
    assert_eq!(lba.num_unavailable_servers, 0);

    assert_eq!(report.store_adapters.len(), 1);
    assert_eq!(report.store_adapters[0].name, "UserStoreAdapter");
    assert!(report.store_adapters[0].available);
}

#[tokio::test]
async fn test_monitor_not_ok() {
    let client = MonitorTree::new()
        .general(&[], &[])
        .servlets(&["Monitored Servlet https://example.com/monitoredServlet"])
        .monitor(MONITOR_NAME_1, "state", "ready")
        .monitor(MONITOR_NAME_2, "available", "false")
        .load_balancing_algorithm("User Store LBA", "AVAILABLE", 1, 0, 0)
        .store_adapter("UserStoreAdapter", "AVAILABLE")
        .client(servlets_to_check(), monitors_to_check());
    let report = client.get_status().await;

    assert!(!report.is_ok());
    assert!(report.servlets[0].enabled);
    for monitor in &report.monitors {
        assert_eq!(monitor.available, monitor.name == MONITOR_NAME_1);
        assert!(monitor.properties.is_some());
    }
    assert!(report.load_balancing_algorithms[0].available);
    assert!(report.store_adapters[0].available);
}

#[tokio::test]
async fn test_servlet_not_enabled() {
    let client = MonitorTree::new()
        .general(&[], &[])
        .servlets(&["Unmonitored Servlet https://example.com/unmonitoredServlet"])
        .load_balancing_algorithm("User Store LBA", "AVAILABLE", 1, 0, 0)
        .store_adapter("UserStoreAdapter", "AVAILABLE")
        .client(servlets_to_check(), Vec::new());
    let report = client.get_status().await;

    assert!(!report.is_ok());
    assert_eq!(report.servlets.len(), 1);
    assert_eq!(report.servlets[0].name, MONITORED_SERVLET);
    assert!(!report.servlets[0].enabled);
    assert!(report.load_balancing_algorithms[0].available);
    assert!(report.store_adapters[0].available);
}

#[tokio::test]
async fn test_lba_not_ok() {
    let client = MonitorTree::new()
        .general(&[], &[])
        .servlets(&["Monitored Servlet https://example.com/monitoredServlet"])
        .load_balancing_algorithm("User Store LBA", "UNAVAILABLE", 0, 0, 1)
        .store_adapter("UserStoreAdapter", "AVAILABLE")
        .client(servlets_to_check(), Vec::new());
    let report = client.get_status().await;

    assert!(!report.is_ok());
    assert!(report.servlets[0].enabled);
    let lba = &report.load_balancing_algorithms[0];
    assert_eq!(lba.name, "User Store LBA");
    assert!(!lba.available);
    assert_eq!(lba.num_unavailable_servers, 1);
    assert!(report.store_adapters[0].available);
}

#[tokio::test]
async fn test_store_adapter_not_ok() {
    let client = MonitorTree::new()
        .general(&[], &[])
        .servlets(&["Monitored Servlet https://example.com/monitoredServlet"])
        .load_balancing_algorithm("User Store LBA", "AVAILABLE", 1, 0, 0)
        .store_adapter("UserStoreAdapter", "UNAVAILABLE")
        .client(servlets_to_check(), Vec::new());
    let report = client.get_status().await;

    assert!(!report.is_ok());
    assert!(report.load_balancing_algorithms[0].available);
    assert_eq!(report.store_adapters[0].name, "UserStoreAdapter");
    assert!(!report.store_adapters[0].available);
}

#[tokio::test]
async fn test_server_degraded() {
    let client = MonitorTree::new()
        .general(&[], &["low-disk-space-error"])
        .client(Vec::new(), Vec::new());
    let report = client.get_status().await;

    assert!(!report.is_ok());
    assert!(report.is_degraded());
    assert_eq!(report.server, ServerStatus::Degraded);
    assert!(report.alert_types.contains(&"low-disk-space-error".to_string()));
    assert_eq!(report.http_status().as_u16(), 429);
}

#[tokio::test]
async fn test_server_unavailable() {
    let client = MonitorTree::new()
        .general(&["server-shutting-down"], &["low-disk-space-error"])
        .client(Vec::new(), Vec::new());
    let report = client.get_status().await;

    assert!(!report.is_ok());
    assert!(!report.is_degraded());
    assert_eq!(report.server, ServerStatus::Unavailable);
    assert_eq!(
        report.alert_types,
        vec!["server-shutting-down", "low-disk-space-error"]
    );
    assert_eq!(report.http_status().as_u16(), 503);
}

#[tokio::test]
async fn test_connection_failure() {
    let client = StatusClient::new(
        Arc::new(UnreachableDirectory),
        servlets_to_check(),
        monitors_to_check(),
    );
    let report = client.get_status().await;

    assert_failed_pass(&report, "Socket");
    assert_eq!(report.http_status().as_u16(), 503);
}

#[tokio::test]
async fn test_missing_servlet_entry_fails_the_pass() {
    let client = MonitorTree::new()
        .general(&[], &[])
        .client(servlets_to_check(), Vec::new());
    let report = client.get_status().await;

    assert_failed_pass(
        &report,
        "Expected one and only one HTTP servlet configuration monitor entry; actual number was 0",
    );
}

#[tokio::test]
async fn test_missing_servlet_entry_is_fine_without_servlets() {
    let client = MonitorTree::new().general(&[], &[]).client(Vec::new(), Vec::new());
    let report = client.get_status().await;

    assert!(report.is_ok());
    assert!(report.error.is_none());
}

#[tokio::test]
async fn test_missing_monitor_entry() {
    let client = MonitorTree::new()
        .general(&[], &[])
        .monitor(MONITOR_NAME_1, "state", "running")
        .client(Vec::new(), monitors_to_check());
    let report = client.get_status().await;

    assert!(!report.is_ok());
    assert!(report.error.is_none());
    assert!(report.monitors[0].available);
    assert_eq!(report.monitors[1].name, MONITOR_NAME_2);
    assert!(!report.monitors[1].available);
    assert!(report.monitors[1].properties.is_none());
}

#[tokio::test]
async fn test_report_json() {
    let client = MonitorTree::healthy().client(servlets_to_check(), monitors_to_check());
    let report = client.get_status().await;
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["server"], "available");
    assert!(json.get("alertType").is_none());
    assert!(json.get("error").is_none());
    assert_eq!(json["monitors"][0]["properties"]["state"], "ready");
    assert_eq!(
        json["monitors"][0]["properties"]["multi-valued"],
        serde_json::json!(["value1", "value2"])
    );
    assert_eq!(json["loadBalancingAlgorithms"][0]["numAvailableServers"], 1);
    assert_eq!(json["storeAdapters"][0]["available"], true);
}

#[tokio::test]
async fn test_concurrent_passes_are_independent() {
    let client = Arc::new(MonitorTree::healthy().client(servlets_to_check(), monitors_to_check()));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let client = Arc::clone(&client);
            tokio::spawn(async move { client.get_status().await })
        })
        .collect();

    for handle in handles {
        assert!(handle.await.unwrap().is_ok());
    }
}
