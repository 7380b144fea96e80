//! Status report model
//!
//! The types here are what a status pass produces and what the status route
//! serializes. Nothing in this module touches the directory.

mod report;
mod types;

pub use report::StatusReport;
pub use types::*;
