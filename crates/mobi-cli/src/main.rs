//! # mobi CLI entry point
//!
//! Parses command-line arguments, loads the optional config file, and
//! dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mobi_cli::compare::{run_compare, run_resolve, CompareArgs, ResolveArgs};
use mobi_cli::derive::{run_derive, DeriveArgs};
use mobi_cli::digits::{
    run_format, run_normalize, run_validate, FormatArgs, NormalizeArgs, ValidateArgs,
};
use mobi_cli::{CliConfig, PROTOCOL_VERSION};

/// Mobi identifier toolkit
///
/// Derives deterministic 21-digit identifiers from 32-byte public keys and
/// works with their 12/15/18-digit prefixes.
#[derive(Parser, Debug)]
#[command(name = "mobi", version = PROTOCOL_VERSION, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit JSON instead of plain text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Derive an identifier from a hex-encoded public key.
    Derive(DeriveArgs),

    /// Render a digit string in hyphenated groups of three.
    Format(FormatArgs),

    /// Strip separators from user input.
    Normalize(NormalizeArgs),

    /// Check that digit strings are valid identifiers.
    Validate(ValidateArgs),

    /// Compare two identifiers at a resolution.
    Compare(CompareArgs),

    /// Find the shortest resolution that tells one key's identifier apart
    /// from others.
    Resolve(ResolveArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("mobi CLI v{PROTOCOL_VERSION} starting");

    let config = match &cli.config {
        Some(path) => match CliConfig::load(path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded configuration");
                config
            }
            Err(e) => {
                tracing::error!("{e:#}");
                return ExitCode::from(2);
            }
        },
        None => CliConfig::default(),
    }
    .with_json(cli.json);

    tracing::debug!(?config, "resolved configuration");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = match &cli.command {
        Commands::Derive(args) => run_derive(args, &config, &mut stdin.lock(), &mut out),
        Commands::Format(args) => run_format(args, &config, &mut out),
        Commands::Normalize(args) => run_normalize(args, &config, &mut out),
        Commands::Validate(args) => run_validate(args, &config, &mut out),
        Commands::Compare(args) => run_compare(args, &config, &mut out),
        Commands::Resolve(args) => run_resolve(args, &config, &mut out),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
