//! # Round Sampler
//!
//! Turns a public key into a uniformly distributed integer in `[0, 10^21)`
//! by rejection sampling over SHA-256 outputs:
//!
//! ```text
//! round 0:      digest = SHA256(pubkey)
//! round r > 0:  digest = SHA256(pubkey || r)      r as a single byte
//! accept        first 9 digest bytes, big-endian, if < 10^21
//! ```
//!
//! A 72-bit candidate lands below `10^21` with probability
//! `10^21 / 2^72 ≈ 0.212`, so about 4.7 rounds are expected. Reducing the
//! candidate modulo `10^21` instead would over-weight the low end of the
//! range; rejected rounds are simply discarded. All 256 rounds failing has
//! probability below `10^-25` and is reported as
//! [`MobiError::SamplingExhausted`].

use mobi_core::{Digest, MobiError, PublicKey, PUBKEY_LEN};

use crate::sha256::sha256;

/// Bytes taken from each digest (72 bits).
pub const SAMPLE_LEN: usize = 9;

/// Rounds attempted before giving up (round indices `0..=255`).
pub const MAX_ROUNDS: u16 = 256;

/// `10^21` as a 9-byte big-endian integer.
pub const DECIMAL_BOUND: [u8; SAMPLE_LEN] = [0x36, 0x35, 0xc9, 0xad, 0xc5, 0xde, 0xa0, 0x00, 0x00];

/// A 72-bit candidate taken from the head of a digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RawSample([u8; SAMPLE_LEN]);

impl RawSample {
    /// Take the first 9 bytes of `digest`.
    pub fn from_digest(digest: &Digest) -> Self {
        let mut bytes = [0u8; SAMPLE_LEN];
        bytes.copy_from_slice(&digest.as_bytes()[..SAMPLE_LEN]);
        Self(bytes)
    }

    /// Wrap 9 raw big-endian bytes.
    pub fn from_bytes(bytes: [u8; SAMPLE_LEN]) -> Self {
        Self(bytes)
    }

    /// Access the big-endian bytes.
    pub fn as_bytes(&self) -> &[u8; SAMPLE_LEN] {
        &self.0
    }

    /// Returns true if the value is strictly below `10^21`.
    ///
    /// Equal-length big-endian byte strings order the same way as the
    /// integers they encode.
    pub fn is_below_bound(&self) -> bool {
        self.0 < DECIMAL_BOUND
    }
}

/// An accepted sample and the round that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    /// The accepted value, below `10^21`.
    pub value: RawSample,
    /// Index of the accepting round.
    pub round: u8,
}

/// Digest for `round` of the sampling sequence.
pub fn round_digest(pubkey: &PublicKey, round: u8) -> Digest {
    if round == 0 {
        return sha256(pubkey.as_bytes());
    }
    let mut input = [0u8; PUBKEY_LEN + 1];
    input[..PUBKEY_LEN].copy_from_slice(pubkey.as_bytes());
    input[PUBKEY_LEN] = round;
    sha256(&input)
}

/// Run the rejection loop for `pubkey`.
///
/// Deterministic: the same key always walks the same rounds and accepts
/// the same value.
///
/// # Errors
///
/// Returns [`MobiError::SamplingExhausted`] if none of the 256 rounds
/// produced a value below `10^21`.
pub fn sample(pubkey: &PublicKey) -> Result<Sample, MobiError> {
    sample_with(|round| round_digest(pubkey, round))
}

/// The rejection loop over an arbitrary per-round digest source.
fn sample_with(mut digest_for: impl FnMut(u8) -> Digest) -> Result<Sample, MobiError> {
    (0..=u8::MAX)
        .map(|round| (round, RawSample::from_digest(&digest_for(round))))
        .find(|(_, value)| value.is_below_bound())
        .map(|(round, value)| Sample { value, round })
        .ok_or(MobiError::SamplingExhausted { rounds: MAX_ROUNDS })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(hex: &str) -> PublicKey {
        PublicKey::from_hex(hex).unwrap()
    }

    #[test]
    fn bound_encodes_ten_to_the_twenty_one() {
        let mut wide = [0u8; 16];
        wide[16 - SAMPLE_LEN..].copy_from_slice(&DECIMAL_BOUND);
        assert_eq!(u128::from_be_bytes(wide), 1_000_000_000_000_000_000_000);
    }

    #[test]
    fn bound_comparison_edges() {
        let below = RawSample::from_bytes([0x36, 0x35, 0xc9, 0xad, 0xc5, 0xde, 0x9f, 0xff, 0xff]);
        let at = RawSample::from_bytes(DECIMAL_BOUND);
        let above = RawSample::from_bytes([0x36, 0x35, 0xc9, 0xad, 0xc5, 0xde, 0xa0, 0x00, 0x01]);
        assert!(below.is_below_bound());
        assert!(!at.is_below_bound());
        assert!(!above.is_below_bound());
        assert!(RawSample::from_bytes([0u8; SAMPLE_LEN]).is_below_bound());
        assert!(!RawSample::from_bytes([0xff; SAMPLE_LEN]).is_below_bound());
    }

    #[test]
    fn round_zero_hashes_key_alone() {
        let pk = PublicKey::from_bytes([0u8; 32]);
        assert_eq!(round_digest(&pk, 0), sha256(&[0u8; 32]));

        let mut appended = [0u8; 33];
        appended[32] = 7;
        assert_eq!(round_digest(&pk, 7), sha256(&appended));
    }

    #[test]
    fn zero_key_rejects_round_zero_and_accepts_round_one() {
        let pk = PublicKey::from_bytes([0u8; 32]);
        let round0 = RawSample::from_digest(&round_digest(&pk, 0));
        assert_eq!(
            round0.as_bytes(),
            &[0x66, 0x68, 0x7a, 0xad, 0xf8, 0x62, 0xbd, 0x77, 0x6c]
        );
        assert!(!round0.is_below_bound());

        let s = sample(&pk).unwrap();
        assert_eq!(s.round, 1);
        assert_eq!(
            s.value.as_bytes(),
            &[0x1f, 0xd4, 0x24, 0x74, 0x43, 0xc9, 0x44, 0x0c, 0xb3]
        );
    }

    #[test]
    fn documented_key_accepts_round_five() {
        let pk = key("17162c921dc4d2518f9a101db33695df1afb56ab82f5ff3e5da6eec3ca5cd917");
        let s = sample(&pk).unwrap();
        assert_eq!(s.round, 5);
        for round in 0..5 {
            assert!(!RawSample::from_digest(&round_digest(&pk, round)).is_below_bound());
        }
    }

    #[test]
    fn exhausts_after_every_round_rejects() {
        let mut requested = Vec::new();
        let result = sample_with(|round| {
            requested.push(round);
            Digest::new([0xff; 32])
        });
        assert_eq!(result, Err(MobiError::SamplingExhausted { rounds: 256 }));
        assert_eq!(requested.len(), usize::from(MAX_ROUNDS));
        assert!(requested.iter().copied().eq(0..=u8::MAX));
    }

    #[test]
    fn accepts_last_round() {
        let mut last = [0u8; 32];
        last[..SAMPLE_LEN].copy_from_slice(&[0x36, 0x35, 0xc9, 0xad, 0xc5, 0xde, 0x9f, 0xff, 0xff]);
        let s = sample_with(|round| {
            if round == u8::MAX {
                Digest::new(last)
            } else {
                Digest::new([0xff; 32])
            }
        })
        .unwrap();
        assert_eq!(s.round, 255);
        assert!(s.value.is_below_bound());
    }

    #[test]
    fn sampling_is_deterministic() {
        let pk = key("a1b2c3d4e5f6789012345678901234567890123456789012345678901234abcd");
        assert_eq!(sample(&pk).unwrap(), sample(&pk).unwrap());
        assert_eq!(sample(&pk).unwrap().round, 8);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Accepted values are below the bound and come from the first
        /// accepting round.
        #[test]
        fn accepted_sample_is_first_below_bound(bytes in any::<[u8; 32]>()) {
            let pk = PublicKey::from_bytes(bytes);
            let s = sample(&pk).unwrap();
            prop_assert!(s.value.is_below_bound());
            prop_assert_eq!(s.value, RawSample::from_digest(&round_digest(&pk, s.round)));
            for earlier in 0..s.round {
                prop_assert!(!RawSample::from_digest(&round_digest(&pk, earlier)).is_below_bound());
            }
        }
    }
}
