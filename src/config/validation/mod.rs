//! Configuration validation
//!
//! - `trait_def`: the `Validate` trait implemented by every config section
//! - `config_validators`: validators for server, status, directory and logging
//! - `tests`: test suite for all validators

mod config_validators;
mod trait_def;

pub use trait_def::Validate;
