//! HTTP route modules

pub mod status;
