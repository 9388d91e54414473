//! # Digit Formatting, Normalization, and Validation
//!
//! The string layer around the derivation core. Identifiers are shown as
//! groups of three digits joined by hyphens (`587-135-537-154`) and typed
//! back in any of the usual phone-number styles:
//!
//! ```text
//! "650-073-047-435"   -> "650073047435"
//! "650 073 047 435"   -> "650073047435"
//! "(650) 073-047-435" -> "650073047435"
//! ```
//!
//! Grouping is lossless: `normalize(format_grouped(d)?)? == d` for every
//! valid digit string `d`.

use crate::error::{MobiError, Stage};
use crate::identifier::Resolution;

/// Separator characters stripped by [`normalize`].
pub const SEPARATORS: [char; 5] = ['-', ' ', '.', '(', ')'];

/// Digits per hyphen-separated group.
pub const GROUP_SIZE: usize = 3;

/// Check that `s` is a digit string at one of the four resolutions.
///
/// # Errors
///
/// - [`MobiError::InvalidLength`] unless `s` has 12, 15, 18, or 21 bytes.
/// - [`MobiError::InvalidChar`] for the first non-digit character.
pub fn classify(s: &str) -> Result<Resolution, MobiError> {
    let resolution = Resolution::from_digits(s.len()).ok_or(MobiError::InvalidLength {
        stage: Stage::Digits,
        expected: "12, 15, 18, or 21",
        got: s.len(),
    })?;
    if let Some((position, ch)) = s.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
        return Err(MobiError::InvalidChar { ch, position });
    }
    Ok(resolution)
}

/// Returns true if `s` is exactly 12, 15, 18, or 21 ASCII digits.
///
/// Formatted input such as `650-073-047-435` is not valid; pass it
/// through [`normalize`] first.
pub fn validate(s: &str) -> bool {
    classify(s).is_ok()
}

/// Render a valid digit string as hyphen-separated groups of three.
///
/// # Errors
///
/// Returns the [`classify`] error if `digits` is not a valid digit string.
pub fn format_grouped(digits: &str) -> Result<String, MobiError> {
    classify(digits)?;
    Ok(group_digits(digits))
}

/// Group an already-validated ASCII digit string.
pub(crate) fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / GROUP_SIZE);
    for (i, group) in digits.as_bytes().chunks(GROUP_SIZE).enumerate() {
        if i > 0 {
            out.push('-');
        }
        out.extend(group.iter().map(|&b| b as char));
    }
    out
}

/// Strip separators from user input, keeping only the digits.
///
/// The result is not length-checked; use [`validate`] on it.
///
/// # Errors
///
/// Returns [`MobiError::InvalidChar`] for the first character that is
/// neither an ASCII digit nor one of [`SEPARATORS`].
pub fn normalize(input: &str) -> Result<String, MobiError> {
    let mut out = String::with_capacity(input.len());
    for (position, ch) in input.char_indices() {
        if ch.is_ascii_digit() {
            out.push(ch);
        } else if !SEPARATORS.contains(&ch) {
            return Err(MobiError::InvalidChar { ch, position });
        }
    }
    Ok(out)
}
