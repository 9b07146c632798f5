//! Creature records and their lookup key.

use std::borrow::Borrow;
use std::fmt;

use crate::category::Categories;
use crate::stats::BaseStats;

/// Unique lookup key: the creature name, trimmed and lowercased.
///
/// Normalization happens both when records are loaded and when queries are
/// issued, so lookups are case-insensitive.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CreatureKey(String);

impl CreatureKey {
    /// Normalizes `raw`; returns `None` for blank input.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_lowercase()))
        }
    }

    /// Normalizes a query string without allocating a key for blank input.
    pub fn normalize(raw: &str) -> String {
        raw.trim().to_lowercase()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CreatureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CreatureKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for CreatureKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Physical measurements. Both are finite and strictly positive once loaded.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measurements {
    pub weight_kg: f64,
    pub height_m: f64,
}

/// One creature's full attribute set.
///
/// The aggregate is not stored separately: [`CreatureRecord::total`] always
/// derives it from [`BaseStats`], and loaders reject sources whose stored
/// aggregate disagrees.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreatureRecord {
    pub key: CreatureKey,
    pub ordinal: u32,
    pub stats: BaseStats,
    pub categories: Categories,
    pub abilities: Vec<String>,
    pub measurements: Measurements,
    /// Display asset reference; opaque to this crate.
    pub image: String,
}

impl CreatureRecord {
    pub fn new(key: CreatureKey, ordinal: u32, stats: BaseStats, categories: Categories) -> Self {
        Self {
            key,
            ordinal,
            stats,
            categories,
            abilities: Vec::new(),
            measurements: Measurements {
                weight_kg: 1.0,
                height_m: 1.0,
            },
            image: String::new(),
        }
    }

    #[must_use]
    pub fn with_abilities(mut self, abilities: Vec<String>) -> Self {
        self.abilities = abilities;
        self
    }

    #[must_use]
    pub fn with_measurements(mut self, weight_kg: f64, height_m: f64) -> Self {
        self.measurements = Measurements {
            weight_kg,
            height_m,
        };
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Sum of the six base stats.
    pub fn total(&self) -> u32 {
        self.stats.total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;

    #[test]
    fn key_normalization() {
        let key = CreatureKey::new(" Bulbasaur ").unwrap();
        assert_eq!(key.as_str(), "bulbasaur");
        assert_eq!(CreatureKey::normalize("BULBASAUR"), "bulbasaur");
        assert!(CreatureKey::new("").is_none());
    }

    #[test]
    fn total_tracks_stats() {
        let record = CreatureRecord::new(
            CreatureKey::new("charmander").unwrap(),
            4,
            BaseStats::new([39, 52, 43, 60, 50, 65]),
            Categories::single(Category::new("fire").unwrap()),
        );
        assert_eq!(record.total(), 309);
    }
}
