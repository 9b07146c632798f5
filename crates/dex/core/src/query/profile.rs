//! Effectiveness profile of a creature against the whole vocabulary.
//!
//! # Directionality
//!
//! The subject's own categories index the **attacking** row; every
//! vocabulary category is visited as the defending column. A `water`
//! subject therefore reads `water -> fire`, never `fire -> water`.
//!
//! # Dual categories
//!
//! For a subject with two categories the two row cells are multiplied per
//! opposing category, and the product is bucketed with
//! [`Effectiveness::classify`]. A product of exactly 1 (including `2 x 0.5`)
//! is neutral and omitted.

use std::collections::BTreeSet;

use crate::category::{Categories, Category, Effectiveness};
use crate::oracle::MatchupOracle;

/// Opposing categories bucketed by combined multiplier.
///
/// The four sets are pairwise disjoint; neutral categories are in none.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectivenessProfile {
    pub very_resistant: BTreeSet<Category>,
    pub resistant: BTreeSet<Category>,
    pub weak: BTreeSet<Category>,
    pub immune: BTreeSet<Category>,
}

impl EffectivenessProfile {
    /// Bucket holding `category`, or `None` when it is neutral.
    pub fn bucket_of(&self, category: &str) -> Option<Effectiveness> {
        if self.immune.contains(category) {
            Some(Effectiveness::Immune)
        } else if self.very_resistant.contains(category) {
            Some(Effectiveness::VeryResistant)
        } else if self.resistant.contains(category) {
            Some(Effectiveness::Resistant)
        } else if self.weak.contains(category) {
            Some(Effectiveness::Weak)
        } else {
            None
        }
    }

    /// Number of categories across all buckets.
    pub fn len(&self) -> usize {
        self.very_resistant.len() + self.resistant.len() + self.weak.len() + self.immune.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn insert(&mut self, bucket: Effectiveness, category: Category) {
        match bucket {
            Effectiveness::Immune => self.immune.insert(category),
            Effectiveness::VeryResistant => self.very_resistant.insert(category),
            Effectiveness::Resistant => self.resistant.insert(category),
            Effectiveness::Weak => self.weak.insert(category),
            Effectiveness::Neutral => false,
        };
    }
}

/// Product of the subject's row cells against `defender`.
///
/// A tag outside the vocabulary contributes a neutral factor; loaded stores
/// reject such tags up front.
pub fn combined_multiplier<M>(matchups: &M, subject: &Categories, defender: &str) -> f64
where
    M: MatchupOracle + ?Sized,
{
    subject
        .iter()
        .map(|attacker| {
            matchups
                .multiplier(attacker.as_str(), defender)
                .map_or(1.0, |m| m.value())
        })
        .product()
}

/// Buckets every vocabulary category by its combined multiplier.
pub fn effectiveness_profile<M>(matchups: &M, subject: &Categories) -> EffectivenessProfile
where
    M: MatchupOracle + ?Sized,
{
    let mut profile = EffectivenessProfile::default();
    for defender in matchups.categories() {
        let factor = combined_multiplier(matchups, subject, defender.as_str());
        profile.insert(Effectiveness::classify(factor), defender.clone());
    }
    profile
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Multiplier::{self, *};
    use crate::matrix::MatchupMatrix;

    fn cat(name: &str) -> Category {
        Category::new(name).unwrap()
    }

    /// fire, water, grass, ground, flying, ghost, normal
    fn matrix() -> MatchupMatrix {
        let names = ["fire", "water", "grass", "ground", "flying", "ghost", "normal"];
        let rows: [(&str, [Multiplier; 7]); 7] = [
            ("fire", [Half, Half, Double, Neutral, Neutral, Neutral, Neutral]),
            ("water", [Double, Half, Half, Double, Neutral, Neutral, Neutral]),
            ("grass", [Half, Double, Half, Double, Half, Neutral, Neutral]),
            ("ground", [Double, Neutral, Half, Neutral, Immune, Neutral, Neutral]),
            ("flying", [Neutral, Neutral, Double, Neutral, Neutral, Neutral, Neutral]),
            ("ghost", [Neutral, Neutral, Neutral, Neutral, Neutral, Double, Immune]),
            ("normal", [Neutral, Neutral, Neutral, Neutral, Neutral, Immune, Neutral]),
        ];
        MatchupMatrix::from_rows(
            names.iter().map(|n| cat(n)).collect(),
            rows.iter()
                .map(|(n, cells)| (cat(n), cells.to_vec()))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn single_category_reads_own_row() {
        let profile = effectiveness_profile(&matrix(), &Categories::single(cat("water")));
        assert_eq!(profile.bucket_of("fire"), Some(Effectiveness::Weak));
        assert_eq!(profile.bucket_of("ground"), Some(Effectiveness::Weak));
        assert_eq!(profile.bucket_of("water"), Some(Effectiveness::Resistant));
        assert_eq!(profile.bucket_of("grass"), Some(Effectiveness::Resistant));
        // grass -> water is 2 but only the water row applies
        assert!(!profile.weak.contains("grass"));
        assert_eq!(profile.bucket_of("normal"), None);
    }

    #[test]
    fn immune_bucket() {
        let profile = effectiveness_profile(&matrix(), &Categories::single(cat("normal")));
        assert_eq!(profile.immune, BTreeSet::from([cat("ghost")]));
        assert_eq!(profile.len(), 1);
    }

    #[test]
    fn dual_category_multiplies() {
        let m = matrix();
        let subject = Categories::dual(cat("grass"), cat("fire"));
        // grass->fire 0.5 * fire->fire 0.5 = 0.25
        assert_eq!(combined_multiplier(&m, &subject, "fire"), 0.25);
        // grass->water 2 * fire->water 0.5 = 1
        assert_eq!(combined_multiplier(&m, &subject, "water"), 1.0);
        // grass->ground 2 * fire->ground 1 = 2
        assert_eq!(combined_multiplier(&m, &subject, "ground"), 2.0);

        let profile = effectiveness_profile(&m, &subject);
        assert!(profile.very_resistant.contains("fire"));
        assert_eq!(profile.bucket_of("water"), None);
        assert!(profile.weak.contains("ground"));
        // grass->grass 0.5 * fire->grass 2 = 1
        assert_eq!(profile.bucket_of("grass"), None);
    }

    #[test]
    fn dual_category_zero_dominates() {
        let m = matrix();
        let subject = Categories::dual(cat("ground"), cat("water"));
        // ground->flying 0 * water->flying 1
        let profile = effectiveness_profile(&m, &subject);
        assert!(profile.immune.contains("flying"));
        // ground->fire 2 * water->fire 2 = 4
        assert_eq!(combined_multiplier(&m, &subject, "fire"), 4.0);
        assert!(profile.weak.contains("fire"));
    }

    #[test]
    fn buckets_are_disjoint_and_within_vocabulary() {
        let m = matrix();
        for a in m.categories() {
            for b in m.categories() {
                let subject = if a == b {
                    Categories::single(a.clone())
                } else {
                    Categories::dual(a.clone(), b.clone())
                };
                let p = effectiveness_profile(&m, &subject);
                let buckets = [&p.very_resistant, &p.resistant, &p.weak, &p.immune];
                let mut union = BTreeSet::new();
                for bucket in buckets {
                    for c in bucket {
                        assert!(union.insert(c.clone()), "{c} in two buckets");
                        assert!(m.contains(c.as_str()));
                    }
                }
                for c in m.categories() {
                    if combined_multiplier(&m, &subject, c.as_str()) == 1.0 {
                        assert!(!union.contains(c));
                    }
                }
            }
        }
    }
}
