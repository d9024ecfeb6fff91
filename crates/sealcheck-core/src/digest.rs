//! SHA-512/256 digests via `ring::digest`.
//!
//! Every node in a seal tree is a 32-byte SHA-512/256 digest. Leaves hash
//! the raw log value; interior nodes hash exactly two concatenated child
//! digests.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use data_encoding::BASE32_NOPAD;
use ring::digest::{digest, SHA256, SHA512_256};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Size of a tree node digest in bytes.
pub const DIGEST_LEN: usize = 32;

/// A 32-byte SHA-512/256 digest: a leaf hash, an interior node or a root.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RootHash([u8; DIGEST_LEN]);

impl RootHash {
    /// Wrap raw digest bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Borrow the raw digest bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Standard padded base64, the encoding used by the `rootHash` field.
    #[must_use]
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.0)
    }

    /// Lowercase hex.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Lowercase unpadded base32, the form embedded as a domain's first label.
    ///
    /// A 32-byte digest always encodes to 52 characters, which fits in a
    /// single DNS label.
    #[must_use]
    pub fn to_domain_label(&self) -> String {
        BASE32_NOPAD.encode(&self.0).to_ascii_lowercase()
    }
}

impl AsRef<[u8]> for RootHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Display for RootHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_base64())
    }
}

impl std::fmt::Debug for RootHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RootHash({})", self.to_hex())
    }
}

impl Serialize for RootHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_base64())
    }
}

impl<'de> Deserialize<'de> for RootHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        let bytes = STANDARD
            .decode(&encoded)
            .map_err(<D::Error as serde::de::Error>::custom)?;
        let bytes: [u8; DIGEST_LEN] = bytes.try_into().map_err(|b: Vec<u8>| {
            <D::Error as serde::de::Error>::invalid_length(b.len(), &"a 32-byte digest")
        })?;
        Ok(Self(bytes))
    }
}

fn sha512_256(data: &[u8]) -> RootHash {
    let d = digest(&SHA512_256, data);
    let mut out = [0u8; DIGEST_LEN];
    out.copy_from_slice(d.as_ref());
    RootHash(out)
}

/// Hash a leaf value.
#[must_use]
pub fn leaf_hash(value: &str) -> RootHash {
    sha512_256(value.as_bytes())
}

/// Hash two child digests into their parent: `H(left || right)`.
#[must_use]
pub fn hash_children(left: &RootHash, right: &RootHash) -> RootHash {
    let mut buf = [0u8; 2 * DIGEST_LEN];
    buf[..DIGEST_LEN].copy_from_slice(&left.0);
    buf[DIGEST_LEN..].copy_from_slice(&right.0);
    sha512_256(&buf)
}

/// SHA-256 of raw bytes, lowercase hex (certificate fingerprints).
#[must_use]
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(digest(&SHA256, data).as_ref())
}
