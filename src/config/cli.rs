//! Command line arguments
//!
//! Flags mirror the configuration file; any flag that is given wins over the
//! file, and repeatable flags are appended to the file's lists.

use super::models::*;
use super::Config;
use clap::Parser;
use std::path::PathBuf;

/// Serve a load-balancer health check computed from a directory server's cn=monitor tree
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "monitor-status", version, about)]
pub struct CliArgs {
    /// YAML configuration file
    #[arg(short, long, env = "MONITOR_STATUS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to bind
    #[arg(long, env = "MONITOR_STATUS_HOST")]
    pub host: Option<String>,

    /// Port to bind
    #[arg(long, env = "MONITOR_STATUS_PORT")]
    pub port: Option<u16>,

    /// Deadline for a single status pass, in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Path of the status route (default '/status')
    #[arg(long)]
    pub path: Option<String>,

    /// Name of a servlet that is expected to be enabled; may be repeated
    #[arg(long = "monitored-servlet", value_name = "SERVLET_NAME")]
    pub monitored_servlets: Vec<String>,

    /// Monitor entry to check, e.g. 'Consent Service Monitor:is-available:true'; may be repeated
    #[arg(
        long = "monitor",
        value_name = "MONITOR_ENTRY_NAME:AVAILABILITY_ATTRIBUTE:VALUES"
    )]
    pub monitors: Vec<String>,

    /// YAML snapshot of a monitoring tree to serve instead of a live directory
    #[arg(long, conflicts_with = "ldap_url")]
    pub snapshot: Option<PathBuf>,

    /// LDAP URL of the directory server
    #[arg(long, env = "MONITOR_STATUS_LDAP_URL")]
    pub ldap_url: Option<String>,

    /// DN used for a simple bind
    #[arg(long, env = "MONITOR_STATUS_BIND_DN")]
    pub bind_dn: Option<String>,

    /// Password used for a simple bind
    #[arg(long, env = "MONITOR_STATUS_BIND_PASSWORD", hide_env_values = true)]
    pub bind_password: Option<String>,

    /// Default log filter, overridden by RUST_LOG
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

impl CliArgs {
    /// The flags as a configuration to merge over the file configuration
    pub fn overrides(&self) -> Config {
        let defaults = ServerConfig::default();
        let logging_defaults = LoggingConfig::default();

        Config {
            server: ServerConfig {
                host: self.host.clone().unwrap_or(defaults.host),
                port: self.port.unwrap_or(defaults.port),
                workers: None,
                timeout: self.timeout.unwrap_or(defaults.timeout),
            },
            status: StatusConfig {
                path: self.path.clone().unwrap_or_else(default_status_path),
                monitored_servlets: self.monitored_servlets.clone(),
                monitors: self.monitors.clone(),
            },
            directory: DirectoryConfig {
                snapshot: self.snapshot.clone(),
                url: self.ldap_url.clone(),
                bind_dn: self.bind_dn.clone(),
                bind_password: self.bind_password.clone(),
            },
            logging: LoggingConfig {
                level: self.log_level.clone().unwrap_or(logging_defaults.level),
                format: self.log_format.unwrap_or(logging_defaults.format),
            },
        }
    }
}
