use thiserror::Error;

use crate::digest::RootHash;

/// Result type alias for proof verification
pub type Result<T> = std::result::Result<T, VerifyError>;

/// Which step of verification rejected the proof.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureStage {
    /// An input field could not be decoded
    Encoding,
    /// A proof segment decoded to the wrong number of bytes
    Length,
    /// The recomputed root did not match a binding
    Equality,
}

impl std::fmt::Display for FailureStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encoding => write!(f, "encoding"),
            Self::Length => write!(f, "length"),
            Self::Equality => write!(f, "equality"),
        }
    }
}

/// Reasons a seal proof is rejected
#[derive(Error, Debug)]
pub enum VerifyError {
    /// A proof segment is not valid base64
    #[error("proof segment {index} is not valid base64: {source}")]
    MalformedSegmentEncoding {
        /// Position of the segment in the proof
        index: usize,
        /// Underlying decoder error
        #[source]
        source: base64::DecodeError,
    },

    /// A decoded proof segment is not exactly 33 bytes
    #[error("proof segment {index} is {len} bytes, expected 33")]
    InvalidSegmentLength {
        /// Position of the segment in the proof
        index: usize,
        /// Decoded length
        len: usize,
    },

    /// The claimed root hash is not valid base64
    #[error("root hash is not valid base64: {0}")]
    MalformedRootHashEncoding(#[source] base64::DecodeError),

    /// The folded root does not equal the claimed root hash
    #[error("root hash mismatches: computed {computed}, claimed {claimed}")]
    RootHashMismatch {
        /// Root recomputed from the leaf and proof
        computed: RootHash,
        /// Claimed root as given in the proof
        claimed: String,
    },

    /// The domain's first label is not valid base32
    #[error("domain label {label:?} is not valid base32: {source}")]
    MalformedDomainLabel {
        /// First label of the domain
        label: String,
        /// Underlying decoder error
        #[source]
        source: data_encoding::DecodeError,
    },

    /// The root embedded in the domain does not equal the computed root
    #[error("root hash in domain mismatches: label {label:?} does not encode {computed}")]
    DomainRootMismatch {
        /// First label of the domain
        label: String,
        /// Root recomputed from the leaf and proof
        computed: RootHash,
    },
}

impl VerifyError {
    /// The verification step that failed
    #[must_use]
    pub const fn stage(&self) -> FailureStage {
        match self {
            Self::MalformedSegmentEncoding { .. }
            | Self::MalformedRootHashEncoding(_)
            | Self::MalformedDomainLabel { .. } => FailureStage::Encoding,
            Self::InvalidSegmentLength { .. } => FailureStage::Length,
            Self::RootHashMismatch { .. } | Self::DomainRootMismatch { .. } => {
                FailureStage::Equality
            }
        }
    }

    /// Returns true if the proof record itself is malformed, as opposed to
    /// well-formed but not matching its bindings
    #[must_use]
    pub const fn is_malformed_input(&self) -> bool {
        !matches!(self.stage(), FailureStage::Equality)
    }
}

/// Errors from a certificate resolver
#[derive(Error, Debug)]
pub enum ResolveError {
    /// No usable certificate is logged for the domain
    #[error("no certificate found for {domain}")]
    NotFound {
        /// Domain that was looked up
        domain: String,
    },

    /// Rate limit exceeded
    #[error("rate limit exceeded, retry after {retry_after:?} seconds")]
    RateLimited {
        /// Seconds to wait before retrying
        retry_after: Option<u64>,
    },

    /// Lookup service returned an error response
    #[error("API error ({code}): {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Error message from the service
        message: String,
    },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Request timed out
    #[error("request timed out after {0} seconds")]
    Timeout(u64),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Certificate body was not valid PEM
    #[error("PEM decode error: {0}")]
    Pem(String),

    /// Certificate DER could not be parsed
    #[error("certificate parse error: {0}")]
    CertParse(String),
}

impl ResolveError {
    /// Returns true if the lookup may succeed when repeated
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimited { .. } | Self::Timeout(_) | Self::Http(_)
        )
    }

    /// Returns the HTTP status code if the service answered with one
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::RateLimited { .. } => Some(429),
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_partition_taxonomy() {
        let len = VerifyError::InvalidSegmentLength { index: 2, len: 32 };
        assert_eq!(len.stage(), FailureStage::Length);
        assert!(len.is_malformed_input());
        assert_eq!(len.to_string(), "proof segment 2 is 32 bytes, expected 33");

        let mismatch = VerifyError::DomainRootMismatch {
            label: "aaaa".into(),
            computed: crate::digest::leaf_hash("x"),
        };
        assert_eq!(mismatch.stage(), FailureStage::Equality);
        assert!(!mismatch.is_malformed_input());
    }

    #[test]
    fn resolve_retryable() {
        assert!(ResolveError::Timeout(30).is_retryable());
        assert!(ResolveError::RateLimited { retry_after: None }.is_retryable());
        assert!(!ResolveError::NotFound { domain: "a.example".into() }.is_retryable());
        assert_eq!(
            ResolveError::Api { code: 502, message: String::new() }.status_code(),
            Some(502)
        );
    }
}
