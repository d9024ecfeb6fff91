//! `sealcheck config` - CLI configuration management.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::Config;
use crate::output::OutputFormat;

pub fn execute(ctx: Context, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show_config(&ctx),
        ConfigCommands::Set { key, value } => set_config(&key, &value),
        ConfigCommands::Path => show_path(),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    let config = Config::load()?;

    if ctx.output_format.print_structured(&config)? {
        return Ok(());
    }

    println!("{}", "Current Configuration:".bold());
    println!();

    let unset = || "(not set)".dimmed().to_string();
    println!(
        "  {} {}",
        "crtsh_url:".bold(),
        config.crtsh_url.clone().unwrap_or_else(unset)
    );
    println!(
        "  {} {}",
        "timeout_secs:".bold(),
        config.timeout_secs.map_or_else(unset, |t| t.to_string())
    );
    println!(
        "  {} {}",
        "output_format:".bold(),
        config.output_format.unwrap_or(OutputFormat::Pretty)
    );
    println!(
        "  {} {}",
        "max_candidates:".bold(),
        config.max_candidates.map_or_else(unset, |m| m.to_string())
    );

    Ok(())
}

fn set_config(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;
    apply(&mut config, key, value)?;
    config.save()?;
    println!("{} {} set to {}.", "Success:".green().bold(), key, value.cyan());
    Ok(())
}

/// Apply `key = value` to `config`.
fn apply(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key {
        "crtsh_url" | "url" => config.crtsh_url = Some(value.to_string()),
        "timeout_secs" | "timeout" => config.timeout_secs = Some(value.parse()?),
        "output_format" | "output" => config.output_format = Some(value.parse()?),
        "max_candidates" => config.max_candidates = Some(value.parse()?),
        _ => {
            anyhow::bail!(
                "Unknown config key: {}\n\n\
                 Available keys:\n  \
                 crtsh_url       - crt.sh base URL\n  \
                 timeout_secs    - Request timeout in seconds\n  \
                 output_format   - Default output format (pretty/json/yaml)\n  \
                 max_candidates  - Logged entries checked per lookup",
                key
            );
        }
    }
    Ok(())
}

fn show_path() -> Result<()> {
    let path = Config::path()?;
    println!("{}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_known_keys() {
        let mut cfg = Config::default();
        apply(&mut cfg, "timeout", "10").unwrap();
        apply(&mut cfg, "output_format", "json").unwrap();
        apply(&mut cfg, "crtsh_url", "http://localhost/").unwrap();
        assert_eq!(cfg.timeout_secs, Some(10));
        assert_eq!(cfg.output_format, Some(OutputFormat::Json));
        assert_eq!(cfg.crtsh_url.as_deref(), Some("http://localhost/"));
    }

    #[test]
    fn apply_rejects_bad_input() {
        let mut cfg = Config::default();
        assert!(apply(&mut cfg, "timeout_secs", "soon").is_err());
        assert!(apply(&mut cfg, "api_key", "x").is_err());
    }
}
