//! # Derivation Entry Point
//!
//! `pubkey -> sample -> 21 decimal digits -> Identifier`. Pure and
//! all-or-nothing: no state, no I/O, no logging, and any error discards
//! the whole derivation.

use mobi_core::{Identifier, MobiError, PublicKey};

use crate::decimal::to_decimal;
use crate::sampler::sample;

/// A derived identifier together with the sampling round that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derivation {
    /// The derived identifier.
    pub identifier: Identifier,
    /// Index of the accepting round (0 when the first digest was accepted).
    pub round: u8,
}

/// Derive the identifier for `pubkey`, also reporting the accepting round.
///
/// # Errors
///
/// - [`MobiError::SamplingExhausted`] if no round produced a value below
///   `10^21`.
/// - [`MobiError::NotRepresentable`] only if the sampler and converter
///   disagree on the bound, which indicates a bug.
pub fn derive_detailed(pubkey: &PublicKey) -> Result<Derivation, MobiError> {
    let accepted = sample(pubkey)?;
    let digits = to_decimal(accepted.value.as_bytes())?;
    let identifier = Identifier::from_canonical(&digits)?;
    Ok(Derivation {
        identifier,
        round: accepted.round,
    })
}

/// Derive the identifier for `pubkey`.
///
/// ```
/// use mobi_core::PublicKey;
/// use mobi_crypto::derive;
///
/// let id = derive(&PublicKey::from_bytes([0u8; 32])).unwrap();
/// assert_eq!(id.full(), "587135537154686717107");
/// assert_eq!(id.display(), "587135537154");
/// ```
///
/// # Errors
///
/// See [`derive_detailed`].
pub fn derive(pubkey: &PublicKey) -> Result<Identifier, MobiError> {
    derive_detailed(pubkey).map(|d| d.identifier)
}

/// Derive from a raw byte slice, which must be exactly 32 bytes.
///
/// # Errors
///
/// [`MobiError::InvalidLength`] for the wrong size, otherwise as [`derive`].
pub fn derive_bytes(pubkey: &[u8]) -> Result<Identifier, MobiError> {
    derive(&PublicKey::from_slice(pubkey)?)
}

/// Derive from a 64-character hex-encoded key (either case).
///
/// # Errors
///
/// [`MobiError::InvalidLength`] or [`MobiError::InvalidHex`] for malformed
/// input, otherwise as [`derive`].
pub fn derive_hex(pubkey_hex: &str) -> Result<Identifier, MobiError> {
    derive(&PublicKey::from_hex(pubkey_hex)?)
}
