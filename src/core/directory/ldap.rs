//! LDAP backed monitoring tree

use super::connection::CachedHandle;
use super::types::{DirectoryEntry, Filter, MonitorDirectory, SearchScope};
use crate::config::DirectoryConfig;
use crate::utils::error::{MonitorError, Result};
use async_trait::async_trait;
use ldap3::{Ldap, LdapConnAsync, LdapError, ResultEntry, Scope, SearchEntry, SearchResult};
use tracing::{debug, info, warn};

/// LDAP result code for a base entry that does not exist
const NO_SUCH_OBJECT: u32 = 32;

/// A live directory server reached over LDAP
///
/// Holds one multiplexed connection; every search works on its own clone of
/// the handle. A lost connection is reopened (and re-bound) by the next search.
pub struct LdapDirectory {
    url: String,
    bind_dn: Option<String>,
    bind_password: Option<String>,
    ldap: CachedHandle<Ldap>,
}

impl LdapDirectory {
    /// Connect and, when a bind DN is configured, authenticate
    pub async fn connect(config: &DirectoryConfig) -> Result<Self> {
        let url = config
            .url
            .clone()
            .ok_or_else(|| MonitorError::config("No directory URL configured"))?;

        let directory = Self {
            url,
            bind_dn: config.bind_dn.clone(),
            bind_password: config.bind_password.clone(),
            ldap: CachedHandle::new(),
        };
        // A bad URL or bad credentials stop startup
        directory.handle().await?;
        Ok(directory)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn open(&self) -> Result<Ldap> {
        info!("Connecting to directory server at {}", self.url);
        let (conn, mut ldap) = LdapConnAsync::new(&self.url).await?;

        let url = self.url.clone();
        tokio::spawn(async move {
            if let Err(e) = conn.drive().await {
                warn!("Connection to {} closed: {}", url, e);
            }
        });

        if let Some(bind_dn) = &self.bind_dn {
            let password = self.bind_password.as_deref().unwrap_or_default();
            ldap.simple_bind(bind_dn, password).await?.success()?;
            debug!("Bound to {} as {}", self.url, bind_dn);
        }

        Ok(ldap)
    }

    async fn handle(&self) -> Result<Ldap> {
        self.ldap
            .get(|ldap: &mut Ldap| !ldap.is_closed(), || self.open())
            .await
    }
}

#[async_trait]
impl MonitorDirectory for LdapDirectory {
    async fn search(
        &self,
        base: &str,
        scope: SearchScope,
        filter: &Filter,
        attributes: &[&str],
    ) -> Result<Vec<DirectoryEntry>> {
        let scope = match scope {
            SearchScope::Base => Scope::Base,
            SearchScope::Subtree => Scope::Subtree,
        };
        let filter = filter.to_string();

        let mut ldap = self.handle().await?;
        let SearchResult(entries, result) =
            match ldap.search(base, scope, &filter, attributes.to_vec()).await {
                Err(e) if is_connection_lost(&e) => {
                    warn!("Lost connection to {} ({}), reconnecting", self.url, e);
                    self.ldap.discard().await;
                    let mut ldap = self.handle().await?;
                    ldap.search(base, scope, &filter, attributes.to_vec())
                        .await?
                }
                result => result?,
            };

        if result.rc == NO_SUCH_OBJECT {
            debug!("Search base {} does not exist", base);
            return Ok(Vec::new());
        }
        result.success()?;

        Ok(to_entries(entries))
    }
}

/// Errors after which the handle is no longer usable
fn is_connection_lost(err: &LdapError) -> bool {
    matches!(
        err,
        LdapError::Io { .. }
            | LdapError::OpSend { .. }
            | LdapError::ResultRecv { .. }
            | LdapError::EndOfStream
    )
}

/// Convert search results, skipping referrals and intermediate messages
fn to_entries(raw: Vec<ResultEntry>) -> Vec<DirectoryEntry> {
    raw.into_iter()
        .filter(|raw| !raw.is_ref() && !raw.is_intermediate())
        .map(|raw| {
            let entry = SearchEntry::construct(raw);
            // ldap3 hands attributes back in a hash map
            let mut attrs: Vec<_> = entry.attrs.into_iter().collect();
            attrs.sort_by(|a, b| a.0.cmp(&b.0));
            attrs
                .into_iter()
                .fold(DirectoryEntry::new(entry.dn), |e, (name, values)| {
                    e.with_attribute(&name, values)
                })
        })
        .collect()
}
