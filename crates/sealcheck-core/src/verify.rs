//! Composed seal verification.
//!
//! ```text
//! leaf value --fold(proof)--> candidate root
//!   candidate == base64(rootHash)            (explicit binding)
//!   candidate == base32(first domain label)  (domain binding)
//! ```
//!
//! Both bindings are checked against the same candidate; the first failure
//! aborts.

use crate::digest::RootHash;
use crate::domain::check_domain_binding;
use crate::error::Result;
use crate::proof::{compute_root, verify_root};
use crate::types::SealProof;

/// Verify a seal proof from its parts, returning the candidate root.
pub fn verify_proof<S: AsRef<str>>(
    leaf: &str,
    claimed_root: &str,
    domain: &str,
    segments: &[S],
) -> Result<RootHash> {
    let candidate = compute_root(leaf, segments)?;
    verify_root(&candidate, claimed_root)?;
    check_domain_binding(domain, &candidate)?;
    Ok(candidate)
}

impl SealProof {
    /// Verify this proof, returning the candidate root.
    pub fn verify(&self) -> Result<RootHash> {
        verify_proof(&self.log_value, &self.root_hash, &self.domain, &self.proof)
    }
}
