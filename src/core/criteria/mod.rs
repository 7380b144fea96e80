//! Monitor availability criteria
//!
//! A criteria names one entry below `cn=monitor`, the attribute on that entry
//! that reports availability, and the values that count as available.

mod parser;
mod types;

pub use parser::CRITERIA_FORMAT;
pub use types::MonitorAvailabilityCriteria;
