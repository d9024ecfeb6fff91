//! Two-stage seal check: pure verification, then certificate lookup.

use sealcheck_core::{
    Certificate, CertificateResolver, ResolveError, RootHash, SealProof, VerifyError,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

/// Which stage of the pipeline failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    /// Reading the proof record
    Parse,
    /// Verifying the proof and its bindings
    Proof,
    /// Looking up the domain's certificate
    Certificate,
}

/// Errors from [`SealCheck`]
#[derive(Error, Debug)]
pub enum SealCheckError {
    /// Proof record could not be parsed
    #[error("failed to parse proof: {0}")]
    Parse(#[from] serde_json::Error),

    /// Proof was rejected
    #[error("failed to validate proof: {0}")]
    Verify(#[from] VerifyError),

    /// Certificate lookup failed
    #[error("failed to resolve certificate: {0}")]
    Resolve(#[from] ResolveError),
}

impl SealCheckError {
    /// The stage that produced this error
    #[must_use]
    pub const fn stage(&self) -> PipelineStage {
        match self {
            Self::Parse(_) => PipelineStage::Parse,
            Self::Verify(_) => PipelineStage::Proof,
            Self::Resolve(_) => PipelineStage::Certificate,
        }
    }
}

/// A domain whose root binding has been verified.
///
/// Only [`verify`] produces one, so holding a `VerifiedSeal` means both root
/// bindings held for `domain`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifiedSeal {
    domain: String,
    root: RootHash,
}

impl VerifiedSeal {
    /// The verified domain
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// The recomputed root both bindings matched
    #[must_use]
    pub const fn root(&self) -> &RootHash {
        &self.root
    }
}

/// Outcome of a full seal check.
#[derive(Debug, Clone, Serialize)]
pub struct SealReport {
    /// Verified domain and root
    pub seal: VerifiedSeal,
    /// Certificate logged for the domain
    pub certificate: Certificate,
}

/// Stage 1: verify `proof` without any I/O.
pub fn verify(proof: &SealProof) -> Result<VerifiedSeal, VerifyError> {
    let root = proof.verify()?;
    debug!(domain = %proof.domain, root = %root, segments = proof.proof.len(), "proof verified");
    Ok(VerifiedSeal {
        domain: proof.domain.clone(),
        root,
    })
}

/// Seal checker with an injected certificate resolver.
#[derive(Debug, Clone)]
pub struct SealCheck<R> {
    resolver: R,
}

impl<R: CertificateResolver> SealCheck<R> {
    /// Create a checker using `resolver` for the certificate stage
    pub const fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// The certificate resolver
    pub const fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Stage 2: fetch the certificate logged for a verified domain
    pub async fn certificate(&self, seal: &VerifiedSeal) -> Result<Certificate, ResolveError> {
        let cert = self.resolver.resolve(&seal.domain).await?;
        info!(domain = %seal.domain, log_id = cert.log_id, "certificate resolved");
        Ok(cert)
    }

    /// Verify `proof`, then resolve its domain's certificate
    pub async fn validate(&self, proof: &SealProof) -> Result<SealReport, SealCheckError> {
        let seal = verify(proof)?;
        let certificate = self.certificate(&seal).await?;
        Ok(SealReport { seal, certificate })
    }

    /// Parse a JSON proof record and validate it
    pub async fn validate_json(&self, raw: &[u8]) -> Result<SealReport, SealCheckError> {
        let proof = SealProof::from_json(raw)?;
        self.validate(&proof).await
    }
}
