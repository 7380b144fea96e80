//! End-to-end tests against a live directory server
//!
//! These tests are ignored by default. Point `MONITOR_STATUS_TEST_LDAP_URL` at
//! a server that exposes cn=monitor and run `cargo test -- --ignored`.

mod ldap_status;
