//! # mobi-cli — Command-Line Interface for Mobi Identifiers
//!
//! Provides the `mobi` binary on top of `mobi-core` and `mobi-crypto`.
//!
//! ## Subcommands
//!
//! - `mobi derive` — Public key to identifier, at any resolution.
//! - `mobi format` — Hyphen-group a digit string.
//! - `mobi normalize` — Strip separators from user input.
//! - `mobi validate` — Check digit strings for a valid length and alphabet.
//! - `mobi compare` — Prefix comparison at display or full scope.
//! - `mobi resolve` — Shortest resolution that separates one key's
//!   identifier from a set of others.
//!
//! ```bash
//! mobi derive 17162c921dc4d2518f9a101db33695df1afb56ab82f5ff3e5da6eec3ca5cd917
//! mobi -v --json derive --all <PUBKEY_HEX>
//! mobi --config mobi.yaml derive <PUBKEY_HEX>
//! ```
//!
//! Handlers write to a caller-supplied writer and return the process exit
//! code, so they can be driven from tests without spawning the binary.

pub mod compare;
pub mod config;
pub mod derive;
pub mod digits;

pub use config::{CliConfig, OutputFormat};
pub use mobi_core::PROTOCOL_VERSION;
