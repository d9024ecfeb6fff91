//! Verify seal proofs and cross-check them against certificate transparency.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use sealcheck::{CrtShClient, SealCheck};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let raw = std::fs::read("proof.json")?;
//!     let check = SealCheck::new(CrtShClient::new()?);
//!
//!     let report = check.validate_json(&raw).await?;
//!     println!("root {} bound to {}", report.seal.root(), report.seal.domain());
//!     println!("certificate: crt.sh id {}", report.certificate.log_id);
//!     Ok(())
//! }
//! ```
//!
//! # Stages
//!
//! 1. [`verify`] - pure proof verification, no I/O
//! 2. [`SealCheck::certificate`] - certificate lookup for the verified domain
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

mod pipeline;

// Re-export core types
pub use sealcheck_core::*;

// Re-export client
pub use sealcheck_client::{CrtShClient, CrtShClientBuilder, CrtShEntry, RetryConfig};

pub use pipeline::{verify, PipelineStage, SealCheck, SealCheckError, SealReport, VerifiedSeal};

// Re-export runtime for convenience
pub use serde_json;
pub use tokio;
