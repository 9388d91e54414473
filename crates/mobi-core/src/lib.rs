#![deny(missing_docs)]

//! # mobi-core — Foundational Types for the Mobi Protocol
//!
//! Mobi derives a 21-digit decimal identifier from a 32-byte public key and
//! exposes it at four nested resolutions (12/15/18/21 digits). This crate
//! holds everything around the derivation itself:
//!
//! - [`PublicKey`] — validated 32-byte input, decoded from raw bytes or hex.
//! - [`Digest`] — the 32-byte hash output consumed by the sampler.
//! - [`Identifier`] and [`Resolution`] — the derived digits and their
//!   nested prefixes, with progressive collision resolution.
//! - [`MobiError`] — the single error taxonomy for every Mobi crate.
//! - [`format`] and [`compare`] — hyphen grouping, separator stripping,
//!   length/charset validation, and prefix comparison.
//!
//! The derivation pipeline (hash, sample, convert) lives in `mobi-crypto`.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `mobi-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

#![forbid(unsafe_code)]

pub mod compare;
pub mod digest;
pub mod error;
pub mod format;
pub mod identifier;
pub mod pubkey;

pub use compare::{display_matches, full_matches, matches_at};
pub use digest::{Digest, DIGEST_LEN};
pub use error::{MobiError, Stage};
pub use format::{classify, format_grouped, normalize, validate};
pub use identifier::{
    Identifier, Resolution, UnknownResolution, DISPLAY_LEN, EXTENDED_LEN, FULL_LEN, LONG_LEN,
};
pub use pubkey::{PublicKey, PUBKEY_HEX_LEN, PUBKEY_LEN};

/// Protocol version implemented by this workspace.
pub const PROTOCOL_VERSION: &str = "21.0.0";

/// Protocol major version. Equal to the canonical digit count.
pub const PROTOCOL_VERSION_MAJOR: u32 = 21;
