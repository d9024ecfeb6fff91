//! X.509 parsing of logged certificates.

use chrono::{DateTime, TimeZone, Utc};
use sealcheck_core::{sha256_hex, Certificate, ResolveError};
use tracing::debug;
use x509_parser::extensions::GeneralName;
use x509_parser::time::ASN1Time;

/// OID of the CT precertificate poison extension (RFC 6962 §3.1).
pub const CT_POISON_OID: &str = "1.3.6.1.4.1.11129.2.4.3";

/// Parse the first `CERTIFICATE` block of a PEM document.
pub fn parse_pem(body: &str, log_id: u64) -> Result<Certificate, ResolveError> {
    let blocks = pem::parse_many(body).map_err(|e| ResolveError::Pem(e.to_string()))?;
    let block = blocks
        .iter()
        .find(|p| p.tag() == "CERTIFICATE")
        .ok_or_else(|| ResolveError::Pem(format!("no CERTIFICATE block for crt.sh id {log_id}")))?;
    parse_der(block.contents(), log_id)
}

/// Parse a single DER-encoded X.509 certificate.
pub fn parse_der(der: &[u8], log_id: u64) -> Result<Certificate, ResolveError> {
    let (_, cert) = x509_parser::parse_x509_certificate(der)
        .map_err(|e| ResolveError::CertParse(format!("crt.sh id {log_id}: {e}")))?;

    let dns_names = match cert.subject_alternative_name() {
        Ok(Some(san)) => san
            .value
            .general_names
            .iter()
            .filter_map(|name| match name {
                GeneralName::DNSName(dns) => Some((*dns).to_string()),
                _ => None,
            })
            .collect(),
        Ok(None) => Vec::new(),
        Err(e) => {
            debug!(log_id, error = %e, "ignoring malformed SAN extension");
            Vec::new()
        }
    };

    let precertificate = cert
        .extensions()
        .iter()
        .any(|ext| ext.oid.to_id_string() == CT_POISON_OID);

    Ok(Certificate {
        log_id,
        der: der.to_vec(),
        fingerprint: sha256_hex(der),
        subject: cert.subject().to_string(),
        issuer: cert.issuer().to_string(),
        serial: cert.raw_serial_as_string(),
        not_before: asn1_to_utc(cert.validity().not_before),
        not_after: asn1_to_utc(cert.validity().not_after),
        dns_names,
        precertificate,
    })
}

/// Convert an ASN.1 `GeneralizedTime` / `UTCTime` to `DateTime<Utc>`.
fn asn1_to_utc(t: ASN1Time) -> DateTime<Utc> {
    Utc.timestamp_opt(t.timestamp(), 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}
