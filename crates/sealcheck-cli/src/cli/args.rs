//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Check seal proofs
///
/// A seal proof shows that a logged value is included in a Merkle tree whose
/// root is encoded in a domain name. `validate` verifies the proof and then
/// looks the domain up in certificate transparency logs via crt.sh.
#[derive(Parser, Debug)]
#[command(name = "sealcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// crt.sh base URL
    #[arg(long, env = "SEALCHECK_CRTSH_URL", global = true)]
    pub crtsh_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a proof in JSON format
    Validate(ValidateArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Validate command
// ============================================================================

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the JSON proof
    pub path: PathBuf,

    /// Print certificate info (pretty output only; JSON/YAML always include it)
    #[arg(long)]
    pub print_cert: bool,

    /// Path to export the certificate to
    #[arg(long, value_name = "PATH")]
    pub export_cert: Option<PathBuf>,

    /// Encoding of the exported certificate
    #[arg(long, value_enum, default_value_t = ExportFormat::Der)]
    pub export_format: ExportFormat,

    /// Only verify the proof; skip the certificate lookup
    #[arg(long, conflicts_with_all = ["print_cert", "export_cert"])]
    pub offline: bool,
}

/// Certificate export encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Raw DER bytes
    Der,
    /// PEM armored
    Pem,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Key to set (e.g., crtsh_url, output_format)
        key: String,

        /// Value to set
        value: String,
    },

    /// Show config file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn offline_conflicts_with_cert_output() {
        let res = Cli::try_parse_from(["sealcheck", "validate", "p.json", "--offline", "--print-cert"]);
        assert!(res.is_err());
    }

    #[test]
    fn export_defaults_to_der() {
        let cli = Cli::try_parse_from(["sealcheck", "validate", "p.json", "--export-cert", "c.der"]).unwrap();
        match cli.command {
            Commands::Validate(args) => assert_eq!(args.export_format, ExportFormat::Der),
            Commands::Config(_) => panic!("expected validate"),
        }
    }
}
