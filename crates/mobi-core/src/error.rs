//! # Error Types
//!
//! The single error taxonomy shared by every Mobi crate. All variants use
//! `thiserror` for derive-based `Display` and `Error` implementations, and
//! the `Display` strings double as the protocol's human-readable error table.
//!
//! ## Design
//!
//! - Derivation is all-or-nothing: an error never carries a partial result.
//! - Input errors name the stage that rejected the input together with the
//!   expected and actual sizes or the offending character.
//! - `SamplingExhausted` is a hard failure. There is no fallback to a
//!   modulo-reduced value.

use thiserror::Error;

/// Errors produced by Mobi decoding, derivation, and digit handling.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MobiError {
    /// A required argument was not supplied.
    #[error("null input: a required argument was not supplied")]
    NullInput,

    /// A hex-encoded public key contained a non-hex character.
    #[error("invalid hexadecimal character {ch:?} at position {position}")]
    InvalidHex {
        /// Zero-based byte offset in the input.
        position: usize,
        /// The rejected character.
        ch: char,
    },

    /// An input had the wrong byte or character count for its stage.
    #[error("invalid {stage} length: expected {expected}, got {got}")]
    InvalidLength {
        /// The stage that rejected the input.
        stage: Stage,
        /// Human-readable description of the accepted length(s).
        expected: &'static str,
        /// The actual length received.
        got: usize,
    },

    /// A character outside the digit set and the separator allow-list.
    #[error("invalid character {ch:?} at position {position}")]
    InvalidChar {
        /// The rejected character.
        ch: char,
        /// Zero-based byte offset in the input.
        position: usize,
    },

    /// Every sampling round produced a value at or above the decimal bound.
    #[error("sampling exhausted: no value below 10^21 in {rounds} rounds")]
    SamplingExhausted {
        /// Number of rounds attempted.
        rounds: u16,
    },

    /// A value needs more decimal digits than the canonical width allows.
    #[error("value not representable: {digits} decimal digits exceed the 21-digit width")]
    NotRepresentable {
        /// Number of decimal digits the value requires.
        digits: usize,
    },
}

/// The pipeline stage at which a length check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Raw public key bytes.
    PublicKey,
    /// Hex-encoded public key.
    PublicKeyHex,
    /// A digit string (identifier at any resolution).
    Digits,
}

impl Stage {
    /// Returns the stage name used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PublicKey => "public key",
            Self::PublicKeyHex => "public key hex",
            Self::Digits => "digit string",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_has_a_message() {
        let errors = [
            MobiError::NullInput,
            MobiError::InvalidHex { position: 0, ch: 'z' },
            MobiError::InvalidLength {
                stage: Stage::PublicKeyHex,
                expected: "64",
                got: 8,
            },
            MobiError::InvalidChar { ch: 'x', position: 3 },
            MobiError::SamplingExhausted { rounds: 256 },
            MobiError::NotRepresentable { digits: 22 },
        ];
        for err in &errors {
            assert!(!err.to_string().is_empty());
        }
    }

    #[test]
    fn length_error_names_stage() {
        let err = MobiError::InvalidLength {
            stage: Stage::PublicKeyHex,
            expected: "64",
            got: 8,
        };
        assert_eq!(
            err.to_string(),
            "invalid public key hex length: expected 64, got 8"
        );
    }

    #[test]
    fn hex_error_reports_position() {
        let err = MobiError::InvalidHex { position: 5, ch: 'g' };
        assert_eq!(err.to_string(), "invalid hexadecimal character 'g' at position 5");
    }
}
