//! Human-readable certificate summary.

use chrono::Utc;
use colored::Colorize;
use sealcheck::Certificate;

/// Print a certificate summary to stdout.
pub fn print_certificate(cert: &Certificate) {
    println!();
    println!("{}", "Certificate:".bold().underline());
    println!("  {} {}", "crt.sh ID:".bold(), cert.log_id);
    println!("  {} {}", "Subject:".bold(), cert.subject);
    println!("  {} {}", "Issuer:".bold(), cert.issuer);
    println!("  {} {}", "Serial:".bold(), cert.serial);
    println!("  {} {}", "Not Before:".bold(), cert.not_before.to_rfc3339());

    let not_after = cert.not_after.to_rfc3339();
    if cert.is_expired_at(Utc::now()) {
        println!("  {} {} {}", "Not After:".bold(), not_after, "(expired)".red());
    } else {
        println!("  {} {}", "Not After:".bold(), not_after);
    }

    println!("  {} {}", "SHA-256:".bold(), cert.fingerprint);

    if !cert.dns_names.is_empty() {
        println!("  {}", "DNS Names:".bold());
        for name in &cert.dns_names {
            println!("    {} {}", "-".dimmed(), name);
        }
    }

    println!();
    println!(
        "{}",
        format!("View on crt.sh: https://crt.sh/?id={}", cert.log_id).dimmed()
    );
}
