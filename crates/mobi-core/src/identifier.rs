//! # Identifiers
//!
//! A Mobi [`Identifier`] is one 21-digit canonical decimal string and its
//! three nested prefixes. Users see the 12-digit `display` form; systems
//! store the 21-digit `full` form; the 15- and 18-digit forms exist so a
//! display collision can be resolved by showing progressively more digits
//! without recomputing anything.
//!
//! ## Invariants
//!
//! - `display == full[..12]`, `extended == full[..15]`, `long == full[..18]`.
//! - Every character of every field is an ASCII decimal digit.
//!
//! Both are established by [`Identifier::from_canonical`], the only
//! constructor, and re-checked on deserialization.

use serde::{de, Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::error::{MobiError, Stage};
use crate::format::group_digits;

/// Digits in the canonical (full) form.
pub const FULL_LEN: usize = 21;
/// Digits in the long form.
pub const LONG_LEN: usize = 18;
/// Digits in the extended form.
pub const EXTENDED_LEN: usize = 15;
/// Digits in the display form.
pub const DISPLAY_LEN: usize = 12;

/// One of the four nested identifier resolutions.
///
/// Ordered from shortest to longest, which is also the order in which a
/// collision is escalated.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    /// 12 digits, shown to users.
    #[default]
    Display,
    /// 15 digits, first collision step.
    Extended,
    /// 18 digits, second collision step.
    Long,
    /// 21 digits, canonical and stored.
    Full,
}

impl Resolution {
    /// All resolutions in escalation order.
    pub const ALL: [Resolution; 4] = [Self::Display, Self::Extended, Self::Long, Self::Full];

    /// Number of digits at this resolution.
    pub fn digits(&self) -> usize {
        match self {
            Self::Display => DISPLAY_LEN,
            Self::Extended => EXTENDED_LEN,
            Self::Long => LONG_LEN,
            Self::Full => FULL_LEN,
        }
    }

    /// Length of the hyphen-grouped rendering (`XXX-XXX-...`).
    pub fn grouped_len(&self) -> usize {
        let digits = self.digits();
        digits + digits / 3 - 1
    }

    /// The resolution with exactly `len` digits, if any.
    pub fn from_digits(len: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.digits() == len)
    }

    /// The next longer resolution, or `None` at `Full`.
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Display => Some(Self::Extended),
            Self::Extended => Some(Self::Long),
            Self::Long => Some(Self::Full),
            Self::Full => None,
        }
    }

    /// Returns the lowercase resolution name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Display => "display",
            Self::Extended => "extended",
            Self::Long => "long",
            Self::Full => "full",
        }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolution name or digit count that does not match any resolution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown resolution {0:?}: expected display, extended, long, full, 12, 15, 18, or 21")]
pub struct UnknownResolution(pub String);

impl std::str::FromStr for Resolution {
    type Err = UnknownResolution;

    /// Accepts a resolution name or its digit count.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "display" | "12" => Ok(Self::Display),
            "extended" | "15" => Ok(Self::Extended),
            "long" | "18" => Ok(Self::Long),
            "full" | "21" => Ok(Self::Full),
            _ => Err(UnknownResolution(s.to_string())),
        }
    }
}

/// A derived Mobi identifier at all four resolutions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Identifier {
    full: String,
    long: String,
    extended: String,
    display: String,
}

impl Identifier {
    /// Assemble an identifier from its 21-digit canonical string.
    ///
    /// The shorter forms are plain prefixes of `digits`; nothing is
    /// recomputed.
    ///
    /// # Errors
    ///
    /// - [`MobiError::InvalidLength`] unless `digits` is exactly 21 bytes.
    /// - [`MobiError::InvalidChar`] for the first non-digit character.
    pub fn from_canonical(digits: &str) -> Result<Self, MobiError> {
        if digits.len() != FULL_LEN {
            return Err(MobiError::InvalidLength {
                stage: Stage::Digits,
                expected: "21",
                got: digits.len(),
            });
        }
        if let Some((position, ch)) = digits.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(MobiError::InvalidChar { ch, position });
        }

        Ok(Self {
            full: digits.to_string(),
            long: digits[..LONG_LEN].to_string(),
            extended: digits[..EXTENDED_LEN].to_string(),
            display: digits[..DISPLAY_LEN].to_string(),
        })
    }

    /// The 21-digit canonical form.
    pub fn full(&self) -> &str {
        &self.full
    }

    /// The 18-digit form.
    pub fn long(&self) -> &str {
        &self.long
    }

    /// The 15-digit form.
    pub fn extended(&self) -> &str {
        &self.extended
    }

    /// The 12-digit display form.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The digit string at `resolution`.
    pub fn at(&self, resolution: Resolution) -> &str {
        match resolution {
            Resolution::Display => &self.display,
            Resolution::Extended => &self.extended,
            Resolution::Long => &self.long,
            Resolution::Full => &self.full,
        }
    }

    /// The hyphen-grouped rendering at `resolution`, e.g. `587-135-537-154`.
    pub fn grouped(&self, resolution: Resolution) -> String {
        group_digits(self.at(resolution))
    }

    /// The shortest resolution at which `self` differs from every identifier
    /// in `others`.
    ///
    /// Returns `None` if `others` contains an identifier with the same
    /// `full` value, which no amount of extra digits can tell apart.
    pub fn distinguishing_resolution(&self, others: &[Identifier]) -> Option<Resolution> {
        Resolution::ALL
            .into_iter()
            .find(|&r| others.iter().all(|other| other.at(r) != self.at(r)))
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

#[derive(Deserialize)]
struct IdentifierFields {
    full: String,
    long: String,
    extended: String,
    display: String,
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = IdentifierFields::deserialize(deserializer)?;
        let id = Identifier::from_canonical(&fields.full).map_err(de::Error::custom)?;
        for (resolution, given) in [
            (Resolution::Long, &fields.long),
            (Resolution::Extended, &fields.extended),
            (Resolution::Display, &fields.display),
        ] {
            if given.as_str() != id.at(resolution) {
                return Err(de::Error::custom(format_args!(
                    "{resolution} prefix {given:?} does not match the first {} digits of full {:?}",
                    resolution.digits(),
                    id.full,
                )));
            }
        }
        Ok(id)
    }
}
