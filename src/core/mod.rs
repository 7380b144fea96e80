//! Core status logic
//!
//! Everything needed to turn a monitoring tree into a status report, with no
//! knowledge of HTTP or configuration files.

pub mod criteria;
pub mod directory;
pub mod engine;
pub mod status;
