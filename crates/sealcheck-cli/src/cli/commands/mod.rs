//! Command implementations.

pub mod config;
pub mod validate;

use std::time::Duration;

use sealcheck::CrtShClient;

use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Output format
    pub output_format: OutputFormat,

    /// Verbosity level
    pub verbose: u8,

    /// crt.sh base URL override
    pub crtsh_url: Option<String>,

    /// Request timeout
    pub timeout: Duration,

    /// Logged entries downloaded before a lookup gives up
    pub max_candidates: Option<usize>,
}

impl Context {
    /// Create a crt.sh client from the configured settings.
    pub fn resolver(&self) -> anyhow::Result<CrtShClient> {
        let mut builder = CrtShClient::builder().timeout(self.timeout);
        if let Some(url) = &self.crtsh_url {
            builder = builder.base_url(url.as_str());
        }
        if let Some(max) = self.max_candidates {
            builder = builder.max_candidates(max);
        }
        Ok(builder.build()?)
    }
}
