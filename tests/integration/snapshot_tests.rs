//! Status passes over snapshot files

use crate::common::fixtures::{HEALTHY_SNAPSHOT, servlets_to_check};
use monitor_status::core::directory;
use monitor_status::config::DirectoryConfig;
use monitor_status::{InMemoryDirectory, MonitorError, StatusClient};
use std::io::Write;
use tempfile::NamedTempFile;

fn snapshot_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn test_status_from_snapshot() {
    let file = snapshot_file(HEALTHY_SNAPSHOT);
    let config = DirectoryConfig {
        snapshot: Some(file.path().to_path_buf()),
        ..Default::default()
    };

    let directory = directory::connect(&config).await.unwrap();
    let client = StatusClient::new(
        directory,
        servlets_to_check(),
        vec!["Test Monitor 1:state:READY,running".parse().unwrap()],
    );
    let report = client.get_status().await;

    assert!(report.is_ok(), "{:?}", report);
    assert_eq!(report.load_balancing_algorithms[0].num_available_servers, 2);

    let properties = report.monitors[0].properties.as_ref().unwrap();
    assert_eq!(properties["state"], "running");
    assert!(!properties.contains_key("entryUUID"));
}

#[tokio::test]
async fn test_invalid_snapshot() {
    let file = snapshot_file("entries: [ {dn: cn=monitor, attributes: 12} ]");
    let result = InMemoryDirectory::from_snapshot_file(file.path()).await;
    assert!(matches!(result, Err(MonitorError::Config(_))));
}

#[tokio::test]
async fn test_empty_snapshot_fails_every_pass() {
    let file = snapshot_file("entries: []");
    let directory = InMemoryDirectory::from_snapshot_file(file.path())
        .await
        .unwrap();
    assert!(directory.is_empty());

    let client = StatusClient::new(std::sync::Arc::new(directory), Vec::new(), Vec::new());
    let report = client.get_status().await;
    assert!(report.error.is_some());
}
