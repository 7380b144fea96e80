//! Configuration section validators

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::debug;

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating server configuration");

        if self.host.is_empty() {
            return Err("Server host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        if let Some(workers) = self.workers {
            if workers == 0 {
                return Err("Worker count must be greater than 0".to_string());
            }
            if workers > 1000 {
                return Err("Worker count seems too high (>1000)".to_string());
            }
        }

        if self.timeout == 0 {
            return Err("Status timeout must be greater than 0".to_string());
        }

        if self.timeout > 3600 {
            return Err("Status timeout should not exceed 1 hour".to_string());
        }

        Ok(())
    }
}

impl Validate for StatusConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating status configuration");

        if !self.path.starts_with('/') {
            return Err(format!("Status path must start with '/': {}", self.path));
        }

        if self.monitored_servlets.iter().any(|s| s.trim().is_empty()) {
            return Err("Monitored servlet names cannot be empty".to_string());
        }

        self.criteria().map_err(|e| e.to_string())?;

        Ok(())
    }
}

impl Validate for DirectoryConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating directory configuration");

        match (&self.snapshot, &self.url) {
            (Some(_), Some(_)) => {
                return Err("Only one of directory snapshot or url may be set".to_string());
            }
            (None, None) => {
                return Err("One of directory snapshot or url must be set".to_string());
            }
            _ => {}
        }

        if let Some(url) = &self.url {
            if !(url.starts_with("ldap://") || url.starts_with("ldaps://") || url.starts_with("ldapi://")) {
                return Err(format!("Unsupported directory url scheme: {}", url));
            }
        }

        if self.bind_password.is_some() && self.bind_dn.is_none() {
            return Err("A bind password requires a bind DN".to_string());
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }
        Ok(())
    }
}
