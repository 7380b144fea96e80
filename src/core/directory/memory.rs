//! In-memory monitoring tree

use super::types::{DirectoryEntry, Filter, MonitorDirectory, SearchScope};
use crate::utils::error::{MonitorError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_yaml::Value;
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// A read-only monitoring tree held in memory
///
/// Used to serve a snapshot of a server's cn=monitor tree and as the directory
/// behind the engine tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    entries: Vec<DirectoryEntry>,
}

#[derive(Debug, Deserialize)]
struct Snapshot {
    #[serde(default)]
    entries: Vec<SnapshotEntry>,
}

#[derive(Debug, Deserialize)]
struct SnapshotEntry {
    dn: String,
    #[serde(default)]
    attributes: serde_yaml::Mapping,
}

impl InMemoryDirectory {
    /// Build a tree from entries; DNs must be unique
    pub fn new(entries: Vec<DirectoryEntry>) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(normalize_dn(entry.dn())) {
                return Err(MonitorError::config(format!(
                    "Duplicate monitor entry {}",
                    entry.dn()
                )));
            }
        }
        Ok(Self { entries })
    }

    /// Load a tree from a YAML snapshot file
    pub async fn from_snapshot_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading monitoring tree snapshot from: {:?}", path);

        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            MonitorError::config(format!("Failed to read snapshot {:?}: {}", path, e))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse a tree from a YAML snapshot document
    ///
    /// ```yaml
    /// entries:
    ///   - dn: cn=monitor
    ///     attributes:
    ///       objectClass: [top, ds-monitor-entry, ds-general-monitor-entry]
    /// ```
    pub fn from_yaml(content: &str) -> Result<Self> {
        let snapshot: Snapshot = serde_yaml::from_str(content)
            .map_err(|e| MonitorError::config(format!("Failed to parse snapshot: {}", e)))?;

        let mut entries = Vec::with_capacity(snapshot.entries.len());
        for raw in snapshot.entries {
            let mut entry = DirectoryEntry::new(raw.dn.trim());
            for (name, value) in &raw.attributes {
                let name = scalar_to_string(name).ok_or_else(|| {
                    MonitorError::config(format!(
                        "Attribute names in entry {} must be strings",
                        raw.dn
                    ))
                })?;
                let values = attribute_values(value).ok_or_else(|| {
                    MonitorError::config(format!(
                        "Attribute {} in entry {} must be a scalar or a list of scalars",
                        name, raw.dn
                    ))
                })?;
                entry.add_values(&name, values);
            }
            entries.push(entry);
        }

        Self::new(entries)
    }

    pub fn entries(&self) -> &[DirectoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl MonitorDirectory for InMemoryDirectory {
    async fn search(
        &self,
        base: &str,
        scope: SearchScope,
        filter: &Filter,
        attributes: &[&str],
    ) -> Result<Vec<DirectoryEntry>> {
        let base = normalize_dn(base);
        let suffix = format!(",{}", base);

        let entries: Vec<DirectoryEntry> = self
            .entries
            .iter()
            .filter(|entry| {
                let dn = normalize_dn(entry.dn());
                match scope {
                    SearchScope::Base => dn == base,
                    SearchScope::Subtree => dn == base || dn.ends_with(&suffix),
                }
            })
            .filter(|entry| filter.matches(entry))
            .map(|entry| entry.select(attributes))
            .collect();

        debug!(
            "In-memory search base={} scope={:?} filter={} returned {} entries",
            base,
            scope,
            filter,
            entries.len()
        );
        Ok(entries)
    }
}

/// Lower-case a DN and drop the whitespace around its RDN components
pub(crate) fn normalize_dn(dn: &str) -> String {
    dn.split(',')
        .map(|rdn| match rdn.split_once('=') {
            Some((attribute, value)) => format!("{}={}", attribute.trim(), value.trim()),
            None => rdn.trim().to_string(),
        })
        .collect::<Vec<_>>()
        .join(",")
        .to_lowercase()
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn attribute_values(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::Sequence(items) => items.iter().map(scalar_to_string).collect(),
        Value::Null => Some(Vec::new()),
        scalar => scalar_to_string(scalar).map(|s| vec![s]),
    }
}
