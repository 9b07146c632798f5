//! Traits describing the read-only dataset.
//!
//! Oracles expose the loaded creature table and the matchup matrix. Query
//! functions in [`crate::query`] are written against these traits so they
//! can run over any backing implementation, including test fixtures.

use crate::category::{Category, Multiplier};
use crate::matrix::MatchupMatrix;
use crate::record::CreatureRecord;

pub trait CreatureOracle: Send + Sync {
    /// Exact lookup on an already-normalized key.
    fn get(&self, key: &str) -> Option<&CreatureRecord>;

    /// All records in load order.
    fn records(&self) -> &[CreatureRecord];
}

pub trait MatchupOracle: Send + Sync {
    /// Cell for `attacker -> defender`, or `None` when either category is
    /// outside the vocabulary.
    fn multiplier(&self, attacker: &str, defender: &str) -> Option<Multiplier>;

    /// The category vocabulary in matrix order.
    fn categories(&self) -> &[Category];
}

impl MatchupOracle for MatchupMatrix {
    fn multiplier(&self, attacker: &str, defender: &str) -> Option<Multiplier> {
        self.lookup(attacker, defender)
    }

    fn categories(&self) -> &[Category] {
        MatchupMatrix::categories(self)
    }
}
