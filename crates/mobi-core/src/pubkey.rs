//! # Public Keys
//!
//! `PublicKey` is the only input to derivation: exactly 32 opaque bytes,
//! typically a secp256k1 x-only key. Nothing inside the key is interpreted.
//!
//! ## Validation
//!
//! Every constructor checks length before content, so a short hex string
//! is reported as [`MobiError::InvalidLength`] even when it also contains
//! non-hex characters. The derivation core is never reached with
//! malformed input.

use serde::{Deserialize, Serialize};

use crate::error::{MobiError, Stage};

/// Public key length in bytes.
pub const PUBKEY_LEN: usize = 32;

/// Public key length as a hex string.
pub const PUBKEY_HEX_LEN: usize = 64;

/// A 32-byte public key, opaque to the protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PublicKey([u8; PUBKEY_LEN]);

impl PublicKey {
    /// Wrap raw key bytes. Always valid.
    pub fn from_bytes(bytes: [u8; PUBKEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Build a key from a byte slice.
    ///
    /// # Errors
    ///
    /// Returns [`MobiError::InvalidLength`] unless the slice is exactly
    /// 32 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, MobiError> {
        let arr: [u8; PUBKEY_LEN] = bytes.try_into().map_err(|_| MobiError::InvalidLength {
            stage: Stage::PublicKey,
            expected: "32",
            got: bytes.len(),
        })?;
        Ok(Self(arr))
    }

    /// Build a key from a possibly-missing byte slice.
    ///
    /// # Errors
    ///
    /// Returns [`MobiError::NullInput`] for `None`, otherwise as
    /// [`PublicKey::from_slice`].
    pub fn from_optional_slice(bytes: Option<&[u8]>) -> Result<Self, MobiError> {
        match bytes {
            Some(b) => Self::from_slice(b),
            None => Err(MobiError::NullInput),
        }
    }

    /// Decode a 64-character hex string (either case).
    ///
    /// # Errors
    ///
    /// - [`MobiError::InvalidLength`] if the string is not 64 bytes long.
    /// - [`MobiError::InvalidHex`] naming the first non-hex character.
    pub fn from_hex(s: &str) -> Result<Self, MobiError> {
        if s.len() != PUBKEY_HEX_LEN {
            return Err(MobiError::InvalidLength {
                stage: Stage::PublicKeyHex,
                expected: "64",
                got: s.len(),
            });
        }
        let mut out = [0u8; PUBKEY_LEN];
        hex::decode_to_slice(s, &mut out).map_err(|e| match e {
            // `index` is a byte offset; report the whole character found there.
            hex::FromHexError::InvalidHexCharacter { c, index } => MobiError::InvalidHex {
                position: index,
                ch: s.get(index..).and_then(|rest| rest.chars().next()).unwrap_or(c),
            },
            hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
                MobiError::InvalidLength {
                    stage: Stage::PublicKeyHex,
                    expected: "64",
                    got: s.len(),
                }
            }
        })?;
        Ok(Self(out))
    }

    /// Access the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; PUBKEY_LEN] {
        &self.0
    }

    /// Render the key as lowercase hex.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<[u8; PUBKEY_LEN]> for PublicKey {
    fn from(bytes: [u8; PUBKEY_LEN]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = MobiError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(bytes)
    }
}

impl TryFrom<String> for PublicKey {
    type Error = MobiError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_hex(&s)
    }
}

impl From<PublicKey> for String {
    fn from(key: PublicKey) -> Self {
        key.to_hex()
    }
}

impl std::str::FromStr for PublicKey {
    type Err = MobiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Display for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_KEY_HEX: &str = "17162c921dc4d2518f9a101db33695df1afb56ab82f5ff3e5da6eec3ca5cd917";

    #[test]
    fn hex_roundtrip_is_lowercase() {
        let key = PublicKey::from_hex(TEST_KEY_HEX).unwrap();
        assert_eq!(key.to_hex(), TEST_KEY_HEX);
        assert_eq!(key.as_bytes()[0], 0x17);
        assert_eq!(key.as_bytes()[31], 0x17);
    }

    #[test]
    fn hex_is_case_insensitive() {
        let lower = PublicKey::from_hex(TEST_KEY_HEX).unwrap();
        let upper = PublicKey::from_hex(&TEST_KEY_HEX.to_uppercase()).unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn short_hex_rejected_as_length() {
        let err = PublicKey::from_hex("00000000").unwrap_err();
        assert_eq!(
            err,
            MobiError::InvalidLength {
                stage: Stage::PublicKeyHex,
                expected: "64",
                got: 8
            }
        );
    }

    #[test]
    fn length_checked_before_charset() {
        let err = PublicKey::from_hex("zz").unwrap_err();
        assert!(matches!(err, MobiError::InvalidLength { got: 2, .. }));
    }

    #[test]
    fn non_hex_rejected_with_position() {
        let input = format!("zzzz{}", "0".repeat(60));
        let err = PublicKey::from_hex(&input).unwrap_err();
        assert_eq!(err, MobiError::InvalidHex { position: 0, ch: 'z' });

        let input = format!("{}g{}", "0".repeat(10), "0".repeat(53));
        let err = PublicKey::from_hex(&input).unwrap_err();
        assert_eq!(err, MobiError::InvalidHex { position: 10, ch: 'g' });
    }

    #[test]
    fn non_ascii_rejected_as_whole_character() {
        let input = format!("{}é{}", "0".repeat(10), "0".repeat(52));
        assert_eq!(input.len(), PUBKEY_HEX_LEN);
        let err = PublicKey::from_hex(&input).unwrap_err();
        assert_eq!(err, MobiError::InvalidHex { position: 10, ch: 'é' });
    }

    #[test]
    fn slice_length_enforced() {
        assert!(PublicKey::from_slice(&[0u8; 32]).is_ok());
        let err = PublicKey::from_slice(&[0u8; 31]).unwrap_err();
        assert!(matches!(
            err,
            MobiError::InvalidLength { stage: Stage::PublicKey, got: 31, .. }
        ));
        assert!(PublicKey::from_slice(&[0u8; 33]).is_err());
    }

    #[test]
    fn missing_slice_is_null_input() {
        assert_eq!(PublicKey::from_optional_slice(None), Err(MobiError::NullInput));
        assert!(PublicKey::from_optional_slice(Some(&[7u8; 32])).is_ok());
    }

    #[test]
    fn serde_uses_hex_string() {
        let key = PublicKey::from_hex(TEST_KEY_HEX).unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, format!("\"{TEST_KEY_HEX}\""));
        let back: PublicKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);

        let bad: Result<PublicKey, _> = serde_json::from_str("\"abcd\"");
        assert!(bad.is_err());
    }
}
