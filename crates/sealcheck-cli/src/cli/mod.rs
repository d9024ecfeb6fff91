//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use std::time::Duration;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::output::OutputFormat;

/// Default request timeout when neither flag nor config sets one.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    // Load configuration
    let config = Config::load()?;

    // Determine output format
    let output_format = cli
        .output
        .or(config.output_format)
        .unwrap_or(OutputFormat::Pretty);

    // crt.sh URL from CLI/env, then config
    let crtsh_url = cli.crtsh_url.or_else(|| config.crtsh_url.clone());

    // Create context for commands
    let ctx = commands::Context {
        output_format,
        verbose: cli.verbose,
        crtsh_url,
        timeout: Duration::from_secs(config.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
        max_candidates: config.max_candidates,
    };

    // Dispatch to appropriate command
    match cli.command {
        Commands::Validate(args) => commands::validate::execute(ctx, args).await,
        Commands::Config(args) => commands::config::execute(ctx, args),
    }
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
