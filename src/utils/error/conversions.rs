//! Type conversions for MonitorError

use super::types::MonitorError;

#[cfg(feature = "ldap")]
impl From<ldap3::LdapError> for MonitorError {
    fn from(err: ldap3::LdapError) -> Self {
        MonitorError::Query(err.to_string())
    }
}
