//! Categorical tags ("types") and matchup multipliers.
//!
//! The category vocabulary is closed but data-defined: it is whatever the
//! matchup matrix declares. Records may only reference categories from it.

use std::borrow::Borrow;
use std::fmt;

/// A categorical tag, normalized to trimmed lowercase.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Category(String);

impl Category {
    /// Normalizes `raw`; returns `None` for blank input.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_lowercase()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Category {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A creature's one or two categorical tags.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Categories {
    pub primary: Category,
    pub secondary: Option<Category>,
}

impl Categories {
    pub fn single(primary: Category) -> Self {
        Self {
            primary,
            secondary: None,
        }
    }

    pub fn dual(primary: Category, secondary: Category) -> Self {
        Self {
            primary,
            secondary: Some(secondary),
        }
    }

    /// Iterates primary then secondary (if any).
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        core::iter::once(&self.primary).chain(self.secondary.as_ref())
    }

    pub fn contains(&self, category: &str) -> bool {
        self.iter().any(|c| c.as_str() == category)
    }
}

/// A single matrix cell.
///
/// Only these five factors are legal in a matchup matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Multiplier {
    /// 0x
    Immune,
    /// 0.25x
    Quarter,
    /// 0.5x
    Half,
    /// 1x
    Neutral,
    /// 2x
    Double,
}

impl Multiplier {
    /// Maps an exact numeric factor to a multiplier.
    pub fn from_value(value: f64) -> Option<Self> {
        // Every legal factor is exactly representable in binary floating point.
        match value {
            v if v == 0.0 => Some(Self::Immune),
            v if v == 0.25 => Some(Self::Quarter),
            v if v == 0.5 => Some(Self::Half),
            v if v == 1.0 => Some(Self::Neutral),
            v if v == 2.0 => Some(Self::Double),
            _ => None,
        }
    }

    pub const fn value(self) -> f64 {
        match self {
            Self::Immune => 0.0,
            Self::Quarter => 0.25,
            Self::Half => 0.5,
            Self::Neutral => 1.0,
            Self::Double => 2.0,
        }
    }
}

/// Profile bucket for a (possibly combined) multiplier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Effectiveness {
    Immune,
    VeryResistant,
    Resistant,
    Neutral,
    Weak,
}

impl Effectiveness {
    /// Buckets a product of multipliers.
    ///
    /// Products of two tags can leave the single-cell set (4, 0.125, 0.0625);
    /// anything below 0.5 counts as very resistant and anything at or above 2
    /// counts as weak.
    pub fn classify(factor: f64) -> Self {
        if factor == 0.0 {
            Self::Immune
        } else if factor < 0.5 {
            Self::VeryResistant
        } else if factor < 1.0 {
            Self::Resistant
        } else if factor < 2.0 {
            Self::Neutral
        } else {
            Self::Weak
        }
    }
}
