//! # Compare and Resolve Subcommands
//!
//! `compare` checks whether two identifier strings agree at a resolution;
//! `resolve` derives a set of identifiers and reports how many digits are
//! needed to tell one of them apart from the rest.
//!
//! ```bash
//! mobi compare 650-073-047-435 650073047435892 --scope display
//! mobi resolve <TARGET_HEX> <OTHER_HEX> <OTHER_HEX>...
//! ```

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;

use mobi_core::{matches_at, normalize, PublicKey, Resolution};
use mobi_crypto::derive;

use crate::config::{CliConfig, OutputFormat};

/// Arguments for `mobi compare`.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// First identifier (separators allowed).
    pub a: String,

    /// Second identifier (separators allowed).
    pub b: String,

    /// Prefix to compare: display (12 digits) or full (21 digits), or any
    /// intermediate resolution.
    #[arg(long, default_value = "display")]
    pub scope: Resolution,
}

/// Arguments for `mobi resolve`.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Public key whose identifier should be distinguished.
    pub target: String,

    /// Public keys of the identifiers it must be told apart from.
    pub others: Vec<String>,
}

/// Execute `mobi compare`. Exit code 0 on match, 1 otherwise.
pub fn run_compare(args: &CompareArgs, config: &CliConfig, out: &mut dyn Write) -> Result<u8> {
    let a = normalize(&args.a).with_context(|| format!("cannot normalize {:?}", args.a))?;
    let b = normalize(&args.b).with_context(|| format!("cannot normalize {:?}", args.b))?;
    let matched = matches_at(&a, &b, args.scope);
    tracing::debug!(scope = %args.scope, matched, "compared identifiers");

    match config.output {
        OutputFormat::Json => {
            let doc = serde_json::json!({
                "a": a,
                "b": b,
                "scope": args.scope,
                "match": matched,
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&doc)?)?;
        }
        OutputFormat::Text => {
            let verdict = if matched { "match" } else { "no match" };
            writeln!(out, "{verdict} ({})", args.scope)?;
        }
    }
    Ok(if matched { 0 } else { 1 })
}

/// Execute `mobi resolve`. Exit code 1 if the target cannot be
/// distinguished at any resolution.
pub fn run_resolve(args: &ResolveArgs, config: &CliConfig, out: &mut dyn Write) -> Result<u8> {
    let target = derive_key(&args.target)?;
    let others = args
        .others
        .iter()
        .map(|hex| derive_key(hex))
        .collect::<Result<Vec<_>>>()?;

    let resolution = target.distinguishing_resolution(&others);
    let render = |r: Resolution| {
        if config.grouped {
            target.grouped(r)
        } else {
            target.at(r).to_string()
        }
    };

    match config.output {
        OutputFormat::Json => {
            let doc = serde_json::json!({
                "identifier": &target,
                "resolution": resolution,
                "value": resolution.map(render),
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&doc)?)?;
        }
        OutputFormat::Text => match resolution {
            Some(r) => writeln!(out, "{} ({r})", render(r))?,
            None => writeln!(out, "indistinguishable: {} (full)", render(Resolution::Full))?,
        },
    }

    match resolution {
        Some(r) => {
            tracing::debug!(resolution = %r, others = others.len(), "resolved");
            Ok(0)
        }
        None => {
            tracing::warn!(full = target.full(), "identifier collides at full resolution");
            Ok(1)
        }
    }
}

fn derive_key(hex: &str) -> Result<mobi_core::Identifier> {
    let pubkey = PublicKey::from_hex(hex.trim())
        .with_context(|| format!("invalid public key {hex:?}"))?;
    derive(&pubkey).with_context(|| format!("failed to derive identifier for {pubkey}"))
}
