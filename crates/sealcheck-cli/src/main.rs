//! sealcheck - Seal proof checker
//!
//! Verifies a seal proof and cross-checks its domain against crt.sh.

use std::process::ExitCode;

use colored::Colorize;

#[tokio::main]
async fn main() -> ExitCode {
    match sealcheck_cli::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
