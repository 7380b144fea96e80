//! Object classes and attributes of the cn=monitor tree

/// Kind of the server-wide monitor entry
pub const GENERAL_MONITOR_ENTRY: &str = "ds-general-monitor-entry";
pub const UNAVAILABLE_ALERT_TYPE: &str = "unavailable-alert-type";
pub const DEGRADED_ALERT_TYPE: &str = "degraded-alert-type";

/// Kind of the entry listing the enabled HTTP servlets
pub const HTTP_SERVLET_CONFIG_MONITOR_ENTRY: &str = "ds-http-servlet-config-monitor-entry";
pub const ENABLED_SERVLET_AND_PATH: &str = "enabled-servlet-and-path";

pub const STORE_ADAPTER_MONITOR_ENTRY: &str = "ds-store-adapter-monitor-entry";
pub const STORE_ADAPTER_NAME: &str = "store-adapter-name";
pub const STORE_ADAPTER_STATUS: &str = "store-adapter-status";

pub const LOAD_BALANCING_ALGORITHM_MONITOR_ENTRY: &str =
    "ds-load-balancing-algorithm-monitor-entry";
pub const ALGORITHM_NAME: &str = "algorithm-name";
pub const HEALTH_CHECK_STATE: &str = "health-check-state";
pub const NUM_AVAILABLE_SERVERS: &str = "num-available-servers";
pub const NUM_DEGRADED_SERVERS: &str = "num-degraded-servers";
pub const NUM_UNAVAILABLE_SERVERS: &str = "num-unavailable-servers";

/// Store adapter and load-balancing algorithm state that means available
pub const AVAILABLE_STATE: &str = "AVAILABLE";

/// Operational attributes left out of monitor properties
pub const ADMINISTRATIVE_ATTRIBUTES: [&str; 8] = [
    "entrydn",
    "entryuuid",
    "subschemasubentry",
    "creatorsname",
    "createtimestamp",
    "modifiersname",
    "modifytimestamp",
    "ds-entry-checksum",
];

/// Whether an attribute is one of [`ADMINISTRATIVE_ATTRIBUTES`]
pub fn is_administrative_attribute(name: &str) -> bool {
    ADMINISTRATIVE_ATTRIBUTES
        .iter()
        .any(|a| a.eq_ignore_ascii_case(name))
}

/// Whether a health state value means available
pub fn is_available_state(state: &str) -> bool {
    state.eq_ignore_ascii_case(AVAILABLE_STATE)
}
