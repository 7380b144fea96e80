//! # monitor-status
//!
//! Load-balancer health checks for a directory server.
//!
//! The service reads the server's `cn=monitor` tree and reduces the server's
//! alerts, its enabled HTTP servlets, custom monitor entries, store adapters
//! and load-balancing algorithms into one verdict:
//!
//! - **available**: everything checked is healthy (HTTP 200)
//! - **degraded**: the server raised degraded alerts (HTTP 429)
//! - **unavailable**: anything else, including a failed status pass (HTTP 503)
//!
//! ## Library use
//!
//! ```rust,no_run
//! use monitor_status::{InMemoryDirectory, MonitorAvailabilityCriteria, StatusClient};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let directory = InMemoryDirectory::from_snapshot_file("monitor-tree.yaml").await?;
//!     let client = StatusClient::new(
//!         Arc::new(directory),
//!         vec!["Consent Servlet".to_string()],
//!         vec![MonitorAvailabilityCriteria::parse(
//!             "Consent Service Monitor:is-available:true",
//!         )?],
//!     );
//!
//!     let report = client.get_status().await;
//!     println!("{}", serde_json::to_string_pretty(&report)?);
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use config::{CliArgs, Config};
pub use core::criteria::MonitorAvailabilityCriteria;
pub use core::directory::{DirectoryEntry, InMemoryDirectory, MonitorDirectory};
#[cfg(feature = "ldap")]
pub use core::directory::LdapDirectory;
pub use core::engine::StatusClient;
pub use core::status::StatusReport;
pub use utils::error::{MonitorError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
