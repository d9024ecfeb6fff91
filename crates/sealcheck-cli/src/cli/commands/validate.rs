//! `sealcheck validate` - Verify a seal proof and cross-check its certificate.

use std::path::Path;

use anyhow::{Context as _, Result};
use colored::Colorize;
use sealcheck::{Certificate, SealCheck, SealProof, VerifiedSeal};
use serde::Serialize;
use tracing::debug;

use super::Context;
use crate::cli::args::{ExportFormat, ValidateArgs};
use crate::output::{print_certificate, OutputFormat};

/// Structured result for JSON/YAML output.
#[derive(Serialize)]
struct ValidationOutput<'a> {
    path: &'a Path,
    valid: bool,
    domain: &'a str,
    root_hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    certificate: Option<&'a Certificate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exported_to: Option<&'a Path>,
}

pub async fn execute(ctx: Context, args: ValidateArgs) -> Result<()> {
    let pretty = ctx.output_format == OutputFormat::Pretty;
    if args.print_cert && !pretty {
        anyhow::bail!(
            "--print-cert requires pretty output; {} output already includes the certificate",
            ctx.output_format
        );
    }
    if pretty {
        println!("{}", format!("SealCheck: {}", args.path.display()).cyan());
    }

    let raw = std::fs::read(&args.path)
        .with_context(|| format!("failed to read json file {}", args.path.display()))?;
    let proof = SealProof::from_json(&raw).context("failed to unmarshal proof")?;
    debug!(domain = %proof.domain, segments = proof.proof.len(), "proof loaded");
    let seal = sealcheck::verify(&proof).context("validation failed")?;

    if pretty {
        print_seal(&ctx, &seal, proof.proof.len());
    }

    if args.offline {
        if pretty {
            println!("{}", "Validation OK (offline, certificate not checked)".green());
        } else {
            ctx.output_format.print_structured(&output(&args.path, &seal, None, None))?;
        }
        return Ok(());
    }

    let check = SealCheck::new(ctx.resolver()?);
    let cert = check
        .certificate(&seal)
        .await
        .context("validation failed")?;

    if pretty {
        println!("{}", "Validation OK".green());
    }

    if args.print_cert {
        print_certificate(&cert);
    }

    if let Some(dest) = &args.export_cert {
        export_certificate(&cert, dest, args.export_format)?;
        if pretty {
            println!("Certificate exported to {}.", dest.display());
        }
    }

    if !pretty {
        ctx.output_format.print_structured(&output(
            &args.path,
            &seal,
            Some(&cert),
            args.export_cert.as_deref(),
        ))?;
    }

    Ok(())
}

fn output<'a>(
    path: &'a Path,
    seal: &'a VerifiedSeal,
    certificate: Option<&'a Certificate>,
    exported_to: Option<&'a Path>,
) -> ValidationOutput<'a> {
    ValidationOutput {
        path,
        valid: true,
        domain: seal.domain(),
        root_hash: seal.root().to_base64(),
        certificate,
        exported_to,
    }
}

fn print_seal(ctx: &Context, seal: &VerifiedSeal, segments: usize) {
    println!("  {} {}", "Root Hash:".bold(), seal.root());
    println!("  {} {}", "Domain:".bold(), seal.domain());
    if ctx.verbose > 0 {
        println!("  {} {}", "Root (hex):".bold(), seal.root().to_hex());
        println!("  {} {}", "Proof Segments:".bold(), segments);
    }
}

/// Write `cert` to `dest` as DER or PEM.
fn export_certificate(cert: &Certificate, dest: &Path, format: ExportFormat) -> Result<()> {
    let bytes = match format {
        ExportFormat::Der => cert.der.clone(),
        ExportFormat::Pem => pem::encode(&pem::Pem::new("CERTIFICATE", cert.der.clone())).into_bytes(),
    };
    std::fs::write(dest, bytes)
        .with_context(|| format!("failed to export certificate to {}", dest.display()))
}
