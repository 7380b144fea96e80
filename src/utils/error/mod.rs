//! Error handling for the status service
//!
//! This module defines the error type shared by the engine, the query
//! backends, configuration loading and the HTTP server.

mod conversions;
mod helpers;
mod response;
mod types;

pub use response::ErrorResponse;
pub use types::{MonitorError, Result};
