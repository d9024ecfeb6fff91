use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A logged certificate for a sealed domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certificate {
    /// Transparency log entry id (crt.sh certificate id)
    pub log_id: u64,

    /// DER encoding
    #[serde(skip)]
    pub der: Vec<u8>,

    /// SHA-256 fingerprint of the DER bytes (hex)
    pub fingerprint: String,

    /// Subject distinguished name
    pub subject: String,

    /// Issuer distinguished name
    pub issuer: String,

    /// Serial number (hex, colon separated)
    pub serial: String,

    /// Not valid before
    pub not_before: DateTime<Utc>,

    /// Not valid after
    pub not_after: DateTime<Utc>,

    /// DNS names from the subject alternative name extension
    #[serde(default)]
    pub dns_names: Vec<String>,

    /// Carries the CT precertificate poison extension
    #[serde(default)]
    pub precertificate: bool,
}

impl Certificate {
    /// Whether `domain` is listed in the SAN extension (case-insensitive).
    #[must_use]
    pub fn covers(&self, domain: &str) -> bool {
        self.dns_names.iter().any(|n| n.eq_ignore_ascii_case(domain))
    }

    /// Whether the certificate is expired at `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.not_after
    }
}
