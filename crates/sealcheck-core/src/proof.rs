//! Merkle inclusion proof folding.
//!
//! A proof is an ordered list of base64 segments, leaf to root. Each segment
//! decodes to 33 bytes: one direction byte followed by the 32-byte sibling
//! digest at that level. Folding the leaf hash through every segment in order
//! yields the candidate root.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::digest::{hash_children, leaf_hash, RootHash, DIGEST_LEN};
use crate::error::{Result, VerifyError};

/// Decoded size of a proof segment: direction byte + sibling digest.
pub const SEGMENT_LEN: usize = 1 + DIGEST_LEN;

/// Which side of the running hash the sibling sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Direction byte `0`: `H(current || sibling)`
    Right,
    /// Any non-zero direction byte: `H(sibling || current)`
    Left,
}

impl Side {
    /// Interpret a direction byte.
    #[must_use]
    pub const fn from_direction(byte: u8) -> Self {
        if byte == 0 {
            Self::Right
        } else {
            Self::Left
        }
    }
}

/// One decoded level of an inclusion proof.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProofSegment {
    /// Position of the sibling relative to the running hash
    pub side: Side,
    /// Sibling digest
    pub sibling: RootHash,
}

impl ProofSegment {
    /// Decode the base64 segment at position `index` of a proof.
    pub fn decode(index: usize, encoded: &str) -> Result<Self> {
        let raw = STANDARD
            .decode(encoded)
            .map_err(|source| VerifyError::MalformedSegmentEncoding { index, source })?;
        let raw: [u8; SEGMENT_LEN] = raw
            .try_into()
            .map_err(|b: Vec<u8>| VerifyError::InvalidSegmentLength { index, len: b.len() })?;
        Ok(Self::from_bytes(&raw))
    }

    /// Split a raw 33-byte segment.
    #[must_use]
    pub fn from_bytes(raw: &[u8; SEGMENT_LEN]) -> Self {
        let mut sibling = [0u8; DIGEST_LEN];
        sibling.copy_from_slice(&raw[1..]);
        Self {
            side: Side::from_direction(raw[0]),
            sibling: RootHash::from_bytes(sibling),
        }
    }

    /// Move one level up the tree from `current`.
    #[must_use]
    pub fn apply(&self, current: &RootHash) -> RootHash {
        match self.side {
            Side::Right => hash_children(current, &self.sibling),
            Side::Left => hash_children(&self.sibling, current),
        }
    }
}

/// Decode every segment of a proof, stopping at the first bad one.
pub fn decode_segments<S: AsRef<str>>(segments: &[S]) -> Result<Vec<ProofSegment>> {
    segments
        .iter()
        .enumerate()
        .map(|(i, s)| ProofSegment::decode(i, s.as_ref()))
        .collect()
}

/// Fold already-decoded segments over a starting hash.
#[must_use]
pub fn fold_segments(start: RootHash, segments: &[ProofSegment]) -> RootHash {
    segments.iter().fold(start, |current, seg| seg.apply(&current))
}

/// Recompute the candidate root for `leaf` from its encoded proof.
pub fn compute_root<S: AsRef<str>>(leaf: &str, segments: &[S]) -> Result<RootHash> {
    let mut current = leaf_hash(leaf);
    for (index, encoded) in segments.iter().enumerate() {
        current = ProofSegment::decode(index, encoded.as_ref())?.apply(&current);
    }
    Ok(current)
}

/// Compare a candidate root against the base64 `claimed` root.
pub fn verify_root(candidate: &RootHash, claimed: &str) -> Result<()> {
    let expected = STANDARD
        .decode(claimed)
        .map_err(VerifyError::MalformedRootHashEncoding)?;
    if candidate.as_bytes().as_slice() != expected.as_slice() {
        return Err(VerifyError::RootHashMismatch {
            computed: *candidate,
            claimed: claimed.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_segment(direction: u8, sibling: &RootHash) -> String {
        let mut raw = Vec::with_capacity(SEGMENT_LEN);
        raw.push(direction);
        raw.extend_from_slice(sibling.as_bytes());
        STANDARD.encode(raw)
    }

    #[test]
    fn empty_proof_is_leaf_hash() {
        let root = compute_root::<&str>("hello", &[]).unwrap();
        assert_eq!(root, leaf_hash("hello"));
    }

    #[test]
    fn direction_byte_picks_operand_order() {
        let current = leaf_hash("leaf");
        let sibling = leaf_hash("sibling");

        let right = compute_root("leaf", &[encode_segment(0, &sibling)]).unwrap();
        let left = compute_root("leaf", &[encode_segment(1, &sibling)]).unwrap();

        assert_eq!(right, hash_children(&current, &sibling));
        assert_eq!(left, hash_children(&sibling, &current));
        assert_ne!(left, right);
    }

    #[test]
    fn any_nonzero_direction_means_left() {
        let sibling = leaf_hash("s");
        let one = compute_root("l", &[encode_segment(1, &sibling)]).unwrap();
        let ff = compute_root("l", &[encode_segment(0xff, &sibling)]).unwrap();
        assert_eq!(one, ff);
    }

    #[test]
    fn fold_is_order_sensitive() {
        let a = encode_segment(0, &leaf_hash("a"));
        let b = encode_segment(1, &leaf_hash("b"));

        let forward = compute_root("leaf", &[a.clone(), b.clone()]).unwrap();
        let reversed = compute_root("leaf", &[b, a]).unwrap();
        assert_ne!(forward, reversed);
    }

    #[test]
    fn fold_matches_manual_tree() {
        // Four-leaf tree, proving leaf index 2:
        //          root
        //        /      \
        //     n01        n23
        //    /   \      /   \
        //   l0   l1   [l2]   l3
        let l: Vec<RootHash> = ["l0", "l1", "l2", "l3"].iter().map(|s| leaf_hash(s)).collect();
        let n01 = hash_children(&l[0], &l[1]);
        let n23 = hash_children(&l[2], &l[3]);
        let root = hash_children(&n01, &n23);

        let proof = [encode_segment(0, &l[3]), encode_segment(1, &n01)];
        assert_eq!(compute_root("l2", &proof).unwrap(), root);

        let decoded = decode_segments(&proof).unwrap();
        assert_eq!(fold_segments(leaf_hash("l2"), &decoded), root);
    }

    #[test]
    fn rejects_wrong_segment_lengths() {
        for len in [0usize, 1, 32, 34, 66] {
            let seg = STANDARD.encode(vec![0u8; len]);
            match compute_root("x", &[seg]) {
                Err(VerifyError::InvalidSegmentLength { index: 0, len: got }) => {
                    assert_eq!(got, len);
                }
                other => panic!("length {len}: unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn rejects_truncated_segment() {
        let full = encode_segment(0, &leaf_hash("s"));
        assert_eq!(full.len(), 44);

        // Dropping a whole quantum still decodes, but short
        let short = &full[..40];
        assert!(matches!(
            compute_root("x", &[short]),
            Err(VerifyError::InvalidSegmentLength { len: 30, .. })
        ));

        // Dropping part of a quantum breaks the encoding
        let ragged = &full[..43];
        assert!(matches!(
            compute_root("x", &[ragged]),
            Err(VerifyError::MalformedSegmentEncoding { index: 0, .. })
        ));
    }

    #[test]
    fn reports_failing_segment_index() {
        let good = encode_segment(0, &leaf_hash("s"));
        let err = compute_root("x", &[good.as_str(), good.as_str(), "not base64!"]).unwrap_err();
        assert!(matches!(err, VerifyError::MalformedSegmentEncoding { index: 2, .. }));
    }

    #[test]
    fn single_bit_flip_changes_root() {
        let segs = [
            encode_segment(0, &leaf_hash("a")),
            encode_segment(1, &leaf_hash("b")),
            encode_segment(0, &leaf_hash("c")),
        ];
        let root = compute_root("leaf", &segs).unwrap();

        for seg_idx in 0..segs.len() {
            for byte_idx in [1usize, 16, 32] {
                let mut raw = STANDARD.decode(&segs[seg_idx]).unwrap();
                raw[byte_idx] ^= 0x01;
                let mut tampered = segs.clone();
                tampered[seg_idx] = STANDARD.encode(raw);

                let other = compute_root("leaf", &tampered).unwrap();
                assert_ne!(other, root, "segment {seg_idx} byte {byte_idx}");
                assert!(matches!(
                    verify_root(&other, &root.to_base64()),
                    Err(VerifyError::RootHashMismatch { .. })
                ));
            }
        }
    }

    #[test]
    fn verify_root_outcomes() {
        let root = leaf_hash("x");
        assert!(verify_root(&root, &root.to_base64()).is_ok());
        assert!(matches!(
            verify_root(&root, "%%%"),
            Err(VerifyError::MalformedRootHashEncoding(_))
        ));
        // Well-formed but too short to ever match
        assert!(matches!(
            verify_root(&root, &STANDARD.encode([0u8; 16])),
            Err(VerifyError::RootHashMismatch { .. })
        ));
    }

    #[test]
    fn non_canonical_base64_is_rejected() {
        let root = leaf_hash("x");
        // Same bytes as "...AlM=" but with a non-zero trailing bit
        assert!(matches!(
            verify_root(&root, "ah22wd1IH3qrKtucJishDtzKNWJOxkwp/8poV7HjAlN="),
            Err(VerifyError::MalformedRootHashEncoding(_))
        ));
        assert!(matches!(
            verify_root(&root, "ah22wd1IH3qrKtucJishDtzK\nNWJOxkwp/8poV7HjAlM="),
            Err(VerifyError::MalformedRootHashEncoding(_))
        ));

        let mut segment = encode_segment(0, &leaf_hash("s"));
        segment.insert(20, '\n');
        assert!(matches!(
            compute_root("leaf", &[segment]),
            Err(VerifyError::MalformedSegmentEncoding { index: 0, .. })
        ));
    }
}
