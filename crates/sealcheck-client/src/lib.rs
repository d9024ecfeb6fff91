//! Certificate-transparency lookups for sealed domains.
//!
//! This crate provides [`CrtShClient`], a [`CertificateResolver`] backed by
//! the public [crt.sh](https://crt.sh) search interface.
//!
//! # Example
//!
//! ```rust,ignore
//! use sealcheck_client::{CertificateResolver, CrtShClient};
//!
//! let client = CrtShClient::new()?;
//! let cert = client.resolve("nio3nqo5...pdajjq.seal.example").await?;
//! println!("crt.sh id {}: {}", cert.log_id, cert.subject);
//! ```

mod client;
mod config;
mod entry;
mod parse;

pub use client::{CrtShClient, CrtShClientBuilder};
pub use config::*;
pub use entry::CrtShEntry;
pub use parse::{parse_der, parse_pem, CT_POISON_OID};
pub use sealcheck_core::{Certificate, CertificateResolver, ResolveError};
