//! The five query steps of a status pass

use super::client::StatusClient;
use super::constants::*;
use super::servlet::servlet_name;
use crate::core::criteria::MonitorAvailabilityCriteria;
use crate::core::directory::{
    ALL_USER_ATTRIBUTES, DirectoryEntry, Filter, MONITOR_ROOT_DN, SearchScope,
};
use crate::core::status::{
    LoadBalancingAlgorithmStatus, MonitorStatus, ServerStatus, ServletStatus, StoreAdapterStatus,
};
use crate::utils::error::{MonitorError, Result};
use serde_json::{Map, Value};
use std::collections::HashSet;
use tracing::debug;

impl StatusClient {
    /// Server verdict and alert types from the general monitor entry
    pub(super) async fn server_status(&self) -> Result<(ServerStatus, Vec<String>)> {
        debug!("Retrieving server status");

        let entry = self
            .single_entry(
                "general",
                GENERAL_MONITOR_ENTRY,
                &[UNAVAILABLE_ALERT_TYPE, DEGRADED_ALERT_TYPE],
            )
            .await?;

        let unavailable = entry.attribute_values(UNAVAILABLE_ALERT_TYPE);
        let degraded = entry.attribute_values(DEGRADED_ALERT_TYPE);
        let status = ServerStatus::from_alerts(unavailable, degraded);

        let alert_types: Vec<String> = unavailable.iter().chain(degraded).cloned().collect();
        debug!("Server status is {} with {} alerts", status, alert_types.len());
        Ok((status, alert_types))
    }

    /// Whether each requested servlet is enabled
    pub(super) async fn servlet_statuses(&self) -> Result<Vec<ServletStatus>> {
        if self.servlets.is_empty() {
            debug!("No servlets to check");
            return Ok(Vec::new());
        }

        debug!("Retrieving servlet status");
        let entry = self
            .single_entry(
                "HTTP servlet configuration",
                HTTP_SERVLET_CONFIG_MONITOR_ENTRY,
                &[ENABLED_SERVLET_AND_PATH],
            )
            .await?;

        let enabled: HashSet<&str> = entry
            .attribute_values(ENABLED_SERVLET_AND_PATH)
            .iter()
            .filter_map(|value| servlet_name(value))
            .collect();
        debug!("Found {} enabled servlets", enabled.len());

        Ok(self
            .servlets
            .iter()
            .map(|name| ServletStatus::new(name, enabled.contains(name.as_str())))
            .collect())
    }

    /// Availability of each configured monitor entry
    pub(super) async fn monitor_statuses(&self) -> Result<Vec<MonitorStatus>> {
        if self.criteria.is_empty() {
            debug!("No monitors to check");
            return Ok(Vec::new());
        }

        debug!("Retrieving status of {} monitors", self.criteria.len());
        let mut statuses = Vec::with_capacity(self.criteria.len());
        for criteria in &self.criteria {
            statuses.push(self.monitor_status(criteria).await?);
        }
        Ok(statuses)
    }

    async fn monitor_status(&self, criteria: &MonitorAvailabilityCriteria) -> Result<MonitorStatus> {
        let entries = self
            .directory
            .search(
                criteria.entry_locator(),
                SearchScope::Base,
                &Filter::any(),
                &[ALL_USER_ATTRIBUTES],
            )
            .await?;

        let Some(entry) = entries.first() else {
            debug!("Monitor entry {} not found", criteria.entry_locator());
            return Ok(MonitorStatus::missing(criteria.name()));
        };

        let available = entry
            .attribute_value(criteria.availability_attribute())
            .is_some_and(|value| criteria.is_acceptable(value));
        debug!("Monitor {} available={}", criteria.name(), available);

        Ok(MonitorStatus {
            name: criteria.name().to_string(),
            available,
            properties: Some(monitor_properties(entry)),
        })
    }

    /// Availability of every store adapter
    pub(super) async fn store_adapter_statuses(&self) -> Result<Vec<StoreAdapterStatus>> {
        debug!("Retrieving store adapter status");

        let entries = self
            .entries_of_kind(
                STORE_ADAPTER_MONITOR_ENTRY,
                &[STORE_ADAPTER_NAME, STORE_ADAPTER_STATUS],
            )
            .await?;

        let statuses = entries
            .iter()
            .map(|entry| -> Result<StoreAdapterStatus> {
                Ok(StoreAdapterStatus {
                    name: required_value(entry, STORE_ADAPTER_NAME)?.to_string(),
                    available: is_available_state(required_value(entry, STORE_ADAPTER_STATUS)?),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!("Found {} store adapters", statuses.len());
        Ok(statuses)
    }

    /// Availability of every load-balancing algorithm
    pub(super) async fn load_balancing_algorithm_statuses(
        &self,
    ) -> Result<Vec<LoadBalancingAlgorithmStatus>> {
        debug!("Retrieving load-balancing algorithm status");

        let entries = self
            .entries_of_kind(LOAD_BALANCING_ALGORITHM_MONITOR_ENTRY, &[ALL_USER_ATTRIBUTES])
            .await?;

        let statuses = entries
            .iter()
            .map(|entry| -> Result<LoadBalancingAlgorithmStatus> {
                Ok(LoadBalancingAlgorithmStatus {
                    name: required_value(entry, ALGORITHM_NAME)?.to_string(),
                    available: is_available_state(required_value(entry, HEALTH_CHECK_STATE)?),
                    num_available_servers: required_count(entry, NUM_AVAILABLE_SERVERS)?,
                    num_degraded_servers: required_count(entry, NUM_DEGRADED_SERVERS)?,
                    num_unavailable_servers: required_count(entry, NUM_UNAVAILABLE_SERVERS)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!("Found {} load-balancing algorithms", statuses.len());
        Ok(statuses)
    }

    async fn entries_of_kind(&self, kind: &str, attributes: &[&str]) -> Result<Vec<DirectoryEntry>> {
        self.directory
            .search(
                MONITOR_ROOT_DN,
                SearchScope::Subtree,
                &Filter::object_class(kind),
                attributes,
            )
            .await
    }

    /// The one entry of a kind that must exist exactly once
    async fn single_entry(
        &self,
        label: &'static str,
        kind: &str,
        attributes: &[&str],
    ) -> Result<DirectoryEntry> {
        let mut entries = self.entries_of_kind(kind, attributes).await?;
        if entries.len() != 1 {
            return Err(MonitorError::cardinality(label, entries.len()));
        }
        Ok(entries.remove(0))
    }
}

/// Monitor entry attributes without the administrative ones
///
/// Multi-valued attributes become arrays, single values become strings.
fn monitor_properties(entry: &DirectoryEntry) -> Map<String, Value> {
    entry
        .attributes()
        .iter()
        .filter(|attribute| !is_administrative_attribute(&attribute.name))
        .map(|attribute| {
            let value = match attribute.values.as_slice() {
                [single] => Value::String(single.clone()),
                values => Value::Array(values.iter().cloned().map(Value::String).collect()),
            };
            (attribute.name.clone(), value)
        })
        .collect()
}

fn required_value<'a>(entry: &'a DirectoryEntry, attribute: &str) -> Result<&'a str> {
    entry.attribute_value(attribute).ok_or_else(|| {
        MonitorError::encoding(format!(
            "Entry {} has no value for attribute {}",
            entry.dn(),
            attribute
        ))
    })
}

fn required_count(entry: &DirectoryEntry, attribute: &str) -> Result<u32> {
    let value = entry.attribute_value_as_integer(attribute)?.ok_or_else(|| {
        MonitorError::encoding(format!(
            "Entry {} has no value for attribute {}",
            entry.dn(),
            attribute
        ))
    })?;

    u32::try_from(value).map_err(|_| {
        MonitorError::encoding(format!(
            "Attribute {} of entry {} is out of range: {}",
            attribute,
            entry.dn(),
            value
        ))
    })
}
