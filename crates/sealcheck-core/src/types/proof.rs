use serde::{Deserialize, Serialize};

/// A seal proof as published next to a logged value.
///
/// Deserializes from the JSON object
/// `{"logValue": .., "rootHash": .., "domain": .., "proof": [..]}`.
/// Fields are kept in their encoded form; decoding happens during
/// verification so that each failure maps to a distinct error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SealProof {
    /// Logged leaf content
    pub log_value: String,

    /// Claimed tree root, standard base64
    pub root_hash: String,

    /// Domain whose first label embeds the root
    pub domain: String,

    /// Inclusion proof segments, leaf to root, each standard base64
    #[serde(default)]
    pub proof: Vec<String>,
}

impl SealProof {
    /// Parse a proof from JSON bytes.
    pub fn from_json(raw: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_fields() {
        let raw = br#"{
            "logValue": "x",
            "rootHash": "ah22wd1IH3qrKtucJishDtzKNWJOxkwp/8poV7HjAlM=",
            "domain": "nio3nqo5japxvkzk3oocmkzbb3omunlcj3deykp7zjufpmpdajjq.seal.example",
            "proof": ["AAAA"]
        }"#;
        let proof = SealProof::from_json(raw).unwrap();
        assert_eq!(proof.log_value, "x");
        assert_eq!(proof.proof, vec!["AAAA".to_string()]);
    }

    #[test]
    fn missing_proof_is_empty() {
        let raw = br#"{"logValue": "x", "rootHash": "", "domain": "a.b"}"#;
        let proof = SealProof::from_json(raw).unwrap();
        assert!(proof.proof.is_empty());
    }

    #[test]
    fn missing_root_is_error() {
        assert!(SealProof::from_json(br#"{"logValue": "x", "domain": "a.b"}"#).is_err());
    }
}
