//! # Prefix Comparison
//!
//! Two identifiers "match" at a resolution when their digit strings agree
//! on that resolution's prefix. A display match with a full mismatch is a
//! collision at 12 digits; see [`Identifier::distinguishing_resolution`].

use crate::identifier::{Identifier, Resolution};

/// Returns true if `a` and `b` are both at least `resolution.digits()` long
/// and equal on that prefix.
///
/// Inputs are compared byte for byte without normalization.
pub fn matches_at(a: &str, b: &str, resolution: Resolution) -> bool {
    let n = resolution.digits();
    a.len() >= n && b.len() >= n && a.as_bytes()[..n] == b.as_bytes()[..n]
}

/// Compare the first 12 digits of two identifier strings of any resolution.
pub fn display_matches(a: &str, b: &str) -> bool {
    matches_at(a, b, Resolution::Display)
}

/// Compare all 21 digits of two identifiers.
pub fn full_matches(a: &Identifier, b: &Identifier) -> bool {
    a.full() == b.full()
}
