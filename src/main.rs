//! monitor-status - directory server health check endpoint

#![allow(missing_docs)]

use clap::Parser;
use monitor_status::server::run_server;
use monitor_status::utils::logging::init_logging;
use monitor_status::{CliArgs, Config};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let args = CliArgs::parse();

    let config = match Config::load(&args).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config.logging);

    match run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
