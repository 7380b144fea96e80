//! Access to a directory server's monitoring tree
//!
//! The status engine only needs a single capability from the directory: run a
//! search and hand back the matching entries. [`MonitorDirectory`] is that
//! seam; [`InMemoryDirectory`] serves a fixed tree (snapshots and tests) and
//! `LdapDirectory` talks to a live server.

#[cfg(feature = "ldap")]
mod connection;
#[cfg(feature = "ldap")]
mod ldap;
mod memory;
mod types;

#[cfg(feature = "ldap")]
pub use ldap::LdapDirectory;
pub use memory::InMemoryDirectory;
pub use types::*;

use crate::config::DirectoryConfig;
use crate::utils::error::{MonitorError, Result};
use std::sync::Arc;
use tracing::info;

/// Build the directory backend selected by the configuration
pub async fn connect(config: &DirectoryConfig) -> Result<Arc<dyn MonitorDirectory>> {
    if let Some(snapshot) = &config.snapshot {
        let directory = InMemoryDirectory::from_snapshot_file(snapshot).await?;
        info!(
            "Serving monitoring tree snapshot {:?} ({} entries)",
            snapshot,
            directory.len()
        );
        return Ok(Arc::new(directory));
    }

    match &config.url {
        #[cfg(feature = "ldap")]
        Some(_) => Ok(Arc::new(LdapDirectory::connect(config).await?)),
        #[cfg(not(feature = "ldap"))]
        Some(url) => Err(MonitorError::config(format!(
            "Directory URL {} needs the 'ldap' feature",
            url
        ))),
        None => Err(MonitorError::config(
            "Either a snapshot or a directory URL must be configured",
        )),
    }
}
