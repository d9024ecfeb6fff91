//! Certificate lookup seam.
//!
//! Verification never performs I/O. Once a proof is accepted, its domain is
//! handed to a [`CertificateResolver`] to fetch the independent
//! transparency-log record for that domain.

use async_trait::async_trait;

use crate::error::ResolveError;
use crate::types::Certificate;

/// Looks up the logged certificate for a validated domain.
#[async_trait]
pub trait CertificateResolver: Send + Sync {
    /// Resolve the newest logged, non-precertificate record for `domain`.
    async fn resolve(&self, domain: &str) -> Result<Certificate, ResolveError>;
}

#[async_trait]
impl<T: CertificateResolver + ?Sized> CertificateResolver for std::sync::Arc<T> {
    async fn resolve(&self, domain: &str) -> Result<Certificate, ResolveError> {
        (**self).resolve(domain).await
    }
}
