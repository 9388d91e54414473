//! # Derive Subcommand
//!
//! Derives a Mobi identifier from a hex-encoded public key.
//!
//! ```bash
//! mobi derive 17162c921dc4d2518f9a101db33695df1afb56ab82f5ff3e5da6eec3ca5cd917
//! mobi derive --all --grouped <PUBKEY_HEX>
//! echo <PUBKEY_HEX> | mobi derive --stdin --resolution full
//! ```

use std::io::{Read, Write};

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use mobi_core::{Identifier, MobiError, PublicKey, Resolution};
use mobi_crypto::derive_detailed;

use crate::config::{CliConfig, OutputFormat};

/// Arguments for the `mobi derive` subcommand.
#[derive(Args, Debug, Default)]
pub struct DeriveArgs {
    /// Public key as 64 hex characters (either case).
    #[arg(value_name = "PUBKEY_HEX")]
    pub pubkey: Option<String>,

    /// Read the public key from standard input instead.
    #[arg(long, conflicts_with = "pubkey")]
    pub stdin: bool,

    /// Resolution to print: display, extended, long, full (or 12/15/18/21).
    #[arg(long, short)]
    pub resolution: Option<Resolution>,

    /// Print all four resolutions.
    #[arg(long, conflicts_with = "resolution")]
    pub all: bool,

    /// Render digits in hyphenated groups of three.
    #[arg(long)]
    pub grouped: bool,
}

#[derive(Serialize)]
struct DeriveReport<'a> {
    pubkey: String,
    round: u8,
    resolution: Resolution,
    value: String,
    identifier: &'a Identifier,
}

/// Execute the derive subcommand.
pub fn run_derive(
    args: &DeriveArgs,
    config: &CliConfig,
    input: &mut dyn Read,
    out: &mut dyn Write,
) -> Result<u8> {
    let pubkey = read_pubkey(args, input)?;
    let derivation = derive_detailed(&pubkey)
        .with_context(|| format!("failed to derive identifier for {pubkey}"))?;
    tracing::debug!(round = derivation.round, pubkey = %pubkey, "accepted sample");

    let id = &derivation.identifier;
    let resolution = args.resolution.unwrap_or(config.resolution);
    let grouped = args.grouped || config.grouped;
    let render = |r: Resolution| {
        if grouped {
            id.grouped(r)
        } else {
            id.at(r).to_string()
        }
    };

    match config.output {
        OutputFormat::Json => {
            let report = DeriveReport {
                pubkey: pubkey.to_hex(),
                round: derivation.round,
                resolution,
                value: render(resolution),
                identifier: id,
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        }
        OutputFormat::Text if args.all => {
            for r in Resolution::ALL {
                writeln!(out, "{:<9} {}", format!("{r}:"), render(r))?;
            }
        }
        OutputFormat::Text => {
            writeln!(out, "{}", render(resolution))?;
        }
    }
    Ok(0)
}

/// Resolve the key from the positional argument or standard input.
fn read_pubkey(args: &DeriveArgs, input: &mut dyn Read) -> Result<PublicKey> {
    let hex = if args.stdin {
        let mut buf = String::new();
        input
            .read_to_string(&mut buf)
            .context("failed to read public key from stdin")?;
        let trimmed = buf.trim().to_string();
        if trimmed.is_empty() {
            return Err(MobiError::NullInput).context("no public key on stdin");
        }
        trimmed
    } else {
        match &args.pubkey {
            Some(hex) => hex.trim().to_string(),
            None => {
                return Err(MobiError::NullInput)
                    .context("no public key given; pass PUBKEY_HEX or --stdin")
            }
        }
    };
    PublicKey::from_hex(&hex).context("invalid public key")
}
