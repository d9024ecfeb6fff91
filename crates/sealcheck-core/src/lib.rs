//! Core seal proof verification.
//!
//! A seal proof claims that a logged value is a leaf of a Merkle tree whose
//! root is bound to a domain name twice: explicitly, as the `rootHash` field,
//! and implicitly, as the domain's first label. This crate provides:
//!
//! - **Digest**: SHA-512/256 leaf and node hashing ([`leaf_hash`], [`hash_children`])
//! - **Proof**: direction-aware folding of inclusion proofs ([`compute_root`])
//! - **Domain**: decoding and checking the label-embedded root ([`check_domain_binding`])
//! - **Errors**: the rejection taxonomy in [`VerifyError`]
//! - **Resolver**: the [`CertificateResolver`] seam used after verification
//!
//! Everything except the resolver trait is pure and synchronous.
//!
//! # Example
//!
//! ```rust
//! use sealcheck_core::{bound_domain, leaf_hash, verify_proof};
//!
//! let root = leaf_hash("x");
//! let domain = bound_domain(&root, "seal.example");
//! let proof: [&str; 0] = [];
//!
//! let candidate = verify_proof("x", &root.to_base64(), &domain, &proof)?;
//! assert_eq!(candidate, root);
//! # Ok::<(), sealcheck_core::VerifyError>(())
//! ```

pub mod digest;
pub mod domain;
mod error;
pub mod proof;
pub mod resolver;
pub mod types;
mod verify;

pub use digest::{hash_children, leaf_hash, sha256_hex, RootHash, DIGEST_LEN};
pub use domain::{bound_domain, check_domain_binding, decode_label_root, first_label};
pub use error::{FailureStage, ResolveError, Result, VerifyError};
pub use proof::{compute_root, decode_segments, fold_segments, verify_root, ProofSegment, Side};
pub use resolver::CertificateResolver;
pub use types::*;
pub use verify::verify_proof;
