//! # Base-256 to Decimal Conversion
//!
//! Renders a 72-bit sample (9 big-endian bytes) as a fixed-width decimal
//! string by schoolbook long division over a byte buffer: each pass divides
//! the whole buffer by 10 in base 256 and yields one decimal digit (the
//! remainder), least significant first. Digits are written right-to-left
//! into a `'0'`-filled buffer, so zero padding falls out for free.
//!
//! Everything lives in fixed-size stack arrays; no heap allocation happens
//! until the final `String`.
//!
//! The converter enforces its own bound: a value that needs 22 digits is
//! rejected with [`MobiError::NotRepresentable`] even though the round
//! sampler never passes one.

use mobi_core::{MobiError, FULL_LEN};

use crate::sampler::SAMPLE_LEN;

/// Width of the rendered decimal string.
pub const DECIMAL_WIDTH: usize = FULL_LEN;

/// Most decimal digits a 72-bit value can need (`2^72 - 1` has 22).
const MAX_DIGITS: usize = 22;

/// Convert a 9-byte big-endian integer to a 21-digit zero-padded string.
///
/// # Errors
///
/// Returns [`MobiError::NotRepresentable`] if the value is `>= 10^21`.
pub fn to_decimal(sample: &[u8; SAMPLE_LEN]) -> Result<String, MobiError> {
    // Leading zero byte keeps every partial quotient within one byte.
    let mut work = [0u8; SAMPLE_LEN + 1];
    work[1..].copy_from_slice(sample);

    let mut digits = [b'0'; MAX_DIGITS];
    let mut count = 0usize;

    while work.iter().any(|&b| b != 0) {
        let mut remainder: u32 = 0;
        for byte in work.iter_mut() {
            let current = (remainder << 8) | u32::from(*byte);
            *byte = (current / 10) as u8;
            remainder = current % 10;
        }
        // count < MAX_DIGITS: a 72-bit value has at most 22 digits.
        digits[MAX_DIGITS - 1 - count] = b'0' + remainder as u8;
        count += 1;
    }

    if count > DECIMAL_WIDTH {
        return Err(MobiError::NotRepresentable { digits: count });
    }

    Ok(digits[MAX_DIGITS - DECIMAL_WIDTH..]
        .iter()
        .map(|&b| char::from(b))
        .collect())
}
