//! Status pass over LDAP

use crate::skip_without_env;
use monitor_status::config::DirectoryConfig;
use monitor_status::core::directory;
use monitor_status::core::status::ServerStatus;
use monitor_status::StatusClient;

#[tokio::test]
#[ignore]
async fn test_live_server_status() {
    skip_without_env!("MONITOR_STATUS_TEST_LDAP_URL");

    let config = DirectoryConfig {
        url: std::env::var("MONITOR_STATUS_TEST_LDAP_URL").ok(),
        bind_dn: std::env::var("MONITOR_STATUS_TEST_BIND_DN").ok(),
        bind_password: std::env::var("MONITOR_STATUS_TEST_BIND_PASSWORD").ok(),
        ..Default::default()
    };

    let directory = directory::connect(&config).await.unwrap();
    let client = StatusClient::new(directory, Vec::new(), Vec::new());
    let report = client.get_status().await;

    assert!(report.error.is_none(), "{:?}", report.error);
    assert_ne!(report.server, ServerStatus::Unknown);
}
