//! crt.sh JSON search results.

use serde::{Deserialize, Serialize};

/// One row of `https://crt.sh/?q=<name>&output=json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrtShEntry {
    /// crt.sh certificate id
    pub id: u64,

    /// Issuer distinguished name
    #[serde(default)]
    pub issuer_name: Option<String>,

    /// Subject common name
    #[serde(default)]
    pub common_name: Option<String>,

    /// Matched identities, newline separated
    #[serde(default)]
    pub name_value: String,

    /// Serial number (hex)
    #[serde(default)]
    pub serial_number: Option<String>,

    /// Not valid before (ISO 8601, no zone)
    #[serde(default)]
    pub not_before: Option<String>,

    /// Not valid after (ISO 8601, no zone)
    #[serde(default)]
    pub not_after: Option<String>,

    /// When the entry was logged
    #[serde(default)]
    pub entry_timestamp: Option<String>,
}

impl CrtShEntry {
    /// Identities listed for this entry.
    pub fn identities(&self) -> impl Iterator<Item = &str> {
        self.name_value.lines().map(str::trim).filter(|s| !s.is_empty())
    }

    /// Whether `domain` is one of the entry's identities exactly.
    ///
    /// crt.sh full-text matching also returns wildcard and parent-name rows;
    /// only an exact identity counts.
    #[must_use]
    pub fn names(&self, domain: &str) -> bool {
        self.identities().any(|n| n.eq_ignore_ascii_case(domain))
    }
}

/// Keep exact matches for `domain`, newest id first, without duplicates.
pub(crate) fn select_candidates(
    mut entries: Vec<CrtShEntry>,
    domain: &str,
    limit: usize,
) -> Vec<CrtShEntry> {
    entries.retain(|e| e.names(domain));
    entries.sort_unstable_by(|a, b| b.id.cmp(&a.id));
    entries.dedup_by_key(|e| e.id);
    entries.truncate(limit);
    entries
}
