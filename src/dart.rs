//! Dart outcome types.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use core::fmt;

use serde::{Deserialize, Serialize};

/// Score recorded for the inner bull by the board resolver.
pub const INNER_BULL: u8 = 50;

/// Score of the outer bull (and the bull's number for cricket).
pub const OUTER_BULL: u8 = 25;

/// Ring multiplier of a dart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Multiplier {
    /// Single band (or a bull / miss).
    #[default]
    Single,
    /// Double ring.
    Double,
    /// Triple ring.
    Triple,
}

impl Multiplier {
    /// Returns the numeric factor (1, 2 or 3).
    #[must_use]
    pub const fn factor(self) -> u8 {
        match self {
            Self::Single => 1,
            Self::Double => 2,
            Self::Triple => 3,
        }
    }

    /// Builds a multiplier from its numeric factor.
    ///
    /// Returns `None` for anything outside 1..=3.
    #[must_use]
    pub const fn from_factor(factor: u8) -> Option<Self> {
        match factor {
            1 => Some(Self::Single),
            2 => Some(Self::Double),
            3 => Some(Self::Triple),
            _ => None,
        }
    }

    const fn prefix(self) -> char {
        match self {
            Self::Single => 'S',
            Self::Double => 'D',
            Self::Triple => 'T',
        }
    }
}

impl Serialize for Multiplier {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.factor())
    }
}

impl<'de> Deserialize<'de> for Multiplier {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let factor = u8::deserialize(deserializer)?;
        Self::from_factor(factor)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid multiplier {factor}")))
    }
}

/// The discrete result of a single dart.
///
/// The label is never stored; it is always derived from `score` and
/// `multiplier` via [`DartOutcome::label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DartOutcome {
    /// Number hit: 0 for a miss, 1..=20, 25 for the outer bull, or 50 for the
    /// inner bull as produced by the board resolver.
    pub score: u8,
    /// Ring multiplier.
    pub multiplier: Multiplier,
    /// Whether the dart landed in the inner single band.
    #[serde(default, rename = "isInner")]
    pub is_inner: bool,
}

impl DartOutcome {
    /// Creates a new outcome outside the inner single band.
    ///
    /// Note: This function does not validate the score. Values other than
    /// 0..=20, 25 and 50 are accepted but are not meaningful to the rulesets.
    #[must_use]
    pub const fn new(score: u8, multiplier: Multiplier) -> Self {
        Self {
            score,
            multiplier,
            is_inner: false,
        }
    }

    /// A missed dart.
    #[must_use]
    pub const fn miss() -> Self {
        Self::new(0, Multiplier::Single)
    }

    /// Shorthand for a single.
    #[must_use]
    pub const fn single(score: u8) -> Self {
        Self::new(score, Multiplier::Single)
    }

    /// Shorthand for a double.
    #[must_use]
    pub const fn double(score: u8) -> Self {
        Self::new(score, Multiplier::Double)
    }

    /// Shorthand for a triple.
    #[must_use]
    pub const fn triple(score: u8) -> Self {
        Self::new(score, Multiplier::Triple)
    }

    /// Returns whether the dart missed the board.
    #[must_use]
    pub const fn is_miss(&self) -> bool {
        self.score == 0
    }

    /// Returns whether the dart hit either bull.
    #[must_use]
    pub const fn is_bull(&self) -> bool {
        self.score == OUTER_BULL || self.score == INNER_BULL
    }

    /// Raw face value, `score * multiplier`.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.score as u32 * self.multiplier.factor() as u32
    }

    /// Canonical display label, e.g. `"T20"`, `"D-Bull"` or `"Miss"`.
    #[must_use]
    pub fn label(&self) -> String {
        label_for(self.score, self.multiplier)
    }
}

impl fmt::Display for DartOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Derives the label for a `(score, multiplier)` pair.
#[must_use]
pub fn label_for(score: u8, multiplier: Multiplier) -> String {
    match (score, multiplier) {
        (0, _) => String::from("Miss"),
        (INNER_BULL, _) | (OUTER_BULL, Multiplier::Double) => String::from("D-Bull"),
        (OUTER_BULL, _) => String::from("S-Bull"),
        (n, m) => format!("{}{n}", m.prefix()),
    }
}
