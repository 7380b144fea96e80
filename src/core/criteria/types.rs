//! Criteria type

use crate::core::directory::MONITOR_ROOT_DN;
use std::collections::BTreeSet;

/// The criteria used to decide whether a cn=monitor entry reports an available state
///
/// Values are compared case-insensitively: acceptable values are stored
/// lower-cased and candidates are lower-cased before the lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MonitorAvailabilityCriteria {
    name: String,
    entry_locator: String,
    availability_attribute: String,
    acceptable_values: BTreeSet<String>,
}

impl MonitorAvailabilityCriteria {
    pub(super) fn new<I>(name: &str, availability_attribute: &str, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self {
            name: name.to_string(),
            entry_locator: format!("cn={},{}", name.trim(), MONITOR_ROOT_DN),
            availability_attribute: availability_attribute.to_string(),
            acceptable_values: values
                .into_iter()
                .map(|value| value.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Monitor entry name, the RDN value of the entry
    pub fn name(&self) -> &str {
        &self.name
    }

    /// DN of the monitor entry
    pub fn entry_locator(&self) -> &str {
        &self.entry_locator
    }

    /// Attribute of the monitor entry that reports availability
    pub fn availability_attribute(&self) -> &str {
        &self.availability_attribute
    }

    /// Lower-cased values that mean the monitor is available
    pub fn acceptable_values(&self) -> &BTreeSet<String> {
        &self.acceptable_values
    }

    /// Whether an availability attribute value means available
    pub fn is_acceptable(&self, value: &str) -> bool {
        self.acceptable_values.contains(&value.to_lowercase())
    }
}

impl std::fmt::Display for MonitorAvailabilityCriteria {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<&str> = self.acceptable_values.iter().map(String::as_str).collect();
        write!(
            f,
            "{}:{}:{}",
            self.name,
            self.availability_attribute,
            values.join(",")
        )
    }
}
