//! Monitor directory configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the cn=monitor tree is read from
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// YAML snapshot of a monitoring tree
    #[serde(default)]
    pub snapshot: Option<PathBuf>,
    /// LDAP URL of the directory server, e.g. `ldap://localhost:389`
    #[serde(default)]
    pub url: Option<String>,
    /// DN used for a simple bind
    #[serde(default)]
    pub bind_dn: Option<String>,
    /// Password used for a simple bind
    #[serde(default, skip_serializing)]
    pub bind_password: Option<String>,
}

impl DirectoryConfig {
    /// Merge directory configurations (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        if other.snapshot.is_some() {
            self.snapshot = other.snapshot;
            self.url = None;
        }
        if other.url.is_some() {
            self.url = other.url;
            self.snapshot = None;
        }
        if other.bind_dn.is_some() {
            self.bind_dn = other.bind_dn;
        }
        if other.bind_password.is_some() {
            self.bind_password = other.bind_password;
        }
        self
    }
}

impl std::fmt::Debug for DirectoryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectoryConfig")
            .field("snapshot", &self.snapshot)
            .field("url", &self.url)
            .field("bind_dn", &self.bind_dn)
            .field(
                "bind_password",
                &self.bind_password.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}
