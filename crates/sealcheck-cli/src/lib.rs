//! # sealcheck-cli
//!
//! Command-line interface for checking seal proofs.
//!
//! ## Features
//!
//! - **Proof validation**: Merkle root and domain binding checks, fully offline
//! - **Certificate cross-check**: newest logged certificate for the sealed domain from crt.sh
//! - **Certificate export**: DER or PEM
//! - **Multiple output formats**: Pretty text, JSON, YAML

pub mod cli;
pub mod config;
pub mod output;

pub use cli::run;
