//! Status aggregation engine
//!
//! [`StatusClient`] reads the monitoring tree in five sequential steps and
//! folds the results into a [`StatusReport`](crate::core::status::StatusReport).

mod client;
mod constants;
mod servlet;
mod steps;

pub use client::StatusClient;
pub use constants::*;
