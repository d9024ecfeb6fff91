//! Root binding through the domain name.
//!
//! A sealed domain carries its tree root in its leftmost label, encoded as
//! unpadded base32. Lookups are case-insensitive, so the label is upper-cased
//! before decoding.
//!
//! Example: root `ah22wd1I...AlM=` -> `nio3nqo5...pdajjq.seal.example`

use data_encoding::BASE32_NOPAD;

use crate::digest::RootHash;
use crate::error::{Result, VerifyError};

/// Everything before the first `.`, or the whole name if there is none.
#[must_use]
pub fn first_label(domain: &str) -> &str {
    domain.split_once('.').map_or(domain, |(label, _)| label)
}

/// Decode the bytes embedded in the domain's first label.
pub fn decode_label_root(domain: &str) -> Result<Vec<u8>> {
    let label = first_label(domain);
    BASE32_NOPAD
        .decode(label.to_ascii_uppercase().as_bytes())
        .map_err(|source| VerifyError::MalformedDomainLabel {
            label: label.to_string(),
            source,
        })
}

/// Check that `domain` attests to `candidate`.
pub fn check_domain_binding(domain: &str, candidate: &RootHash) -> Result<()> {
    let embedded = decode_label_root(domain)?;
    if embedded.as_slice() != candidate.as_bytes().as_slice() {
        return Err(VerifyError::DomainRootMismatch {
            label: first_label(domain).to_string(),
            computed: *candidate,
        });
    }
    Ok(())
}

/// Build a domain bound to `root` under `zone`.
///
/// Example: `zone = "seal.example"` -> `"<52 base32 chars>.seal.example"`
#[must_use]
pub fn bound_domain(root: &RootHash, zone: &str) -> String {
    format!("{}.{}", root.to_domain_label(), zone.trim_start_matches('.'))
}
