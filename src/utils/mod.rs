//! Utility modules for the status service
//!
//! - **error**: the shared error type
//! - **logging**: tracing subscriber setup

pub mod error;
pub mod logging;
