//! Runtime wrappers around the static dataset.
//!
//! These implementations expose `dex-core` oracle traits and bundle them into
//! an [`OracleManager`] that the store queries. The data is immutable once
//! the manager is built.
mod config;
mod creatures;
mod matchups;

use std::sync::Arc;

pub use config::ConfigOracleImpl;
pub use creatures::CreatureOracleImpl;
pub use matchups::MatchupOracleImpl;

/// Manages all oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) creatures: Arc<CreatureOracleImpl>,
    pub(crate) matchups: Arc<MatchupOracleImpl>,
    pub(crate) config: Arc<ConfigOracleImpl>,
}

impl OracleManager {
    /// Creates a new oracle manager
    pub fn new(
        creatures: Arc<CreatureOracleImpl>,
        matchups: Arc<MatchupOracleImpl>,
        config: Arc<ConfigOracleImpl>,
    ) -> Self {
        Self {
            creatures,
            matchups,
            config,
        }
    }

    pub fn creatures(&self) -> &CreatureOracleImpl {
        &self.creatures
    }

    pub fn matchups(&self) -> &MatchupOracleImpl {
        &self.matchups
    }

    pub fn config(&self) -> &ConfigOracleImpl {
        &self.config
    }
}
