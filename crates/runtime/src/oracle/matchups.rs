//! Matchup oracle implementing [`dex_core::MatchupOracle`].

use dex_core::{Category, MatchupMatrix, MatchupOracle, Multiplier};

/// Oracle wrapping the validated matchup matrix.
pub struct MatchupOracleImpl {
    matrix: MatchupMatrix,
}

impl MatchupOracleImpl {
    pub fn new(matrix: MatchupMatrix) -> Self {
        Self { matrix }
    }

    /// Check if a category belongs to the vocabulary.
    pub fn contains(&self, category: &str) -> bool {
        self.matrix.contains(category)
    }
}

impl MatchupOracle for MatchupOracleImpl {
    fn multiplier(&self, attacker: &str, defender: &str) -> Option<Multiplier> {
        self.matrix.lookup(attacker, defender)
    }

    fn categories(&self) -> &[Category] {
        self.matrix.categories()
    }
}
