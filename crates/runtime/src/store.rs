//! The assembled, read-only creature statistics store.
//!
//! A [`DexStore`] is built once from validated sources and never mutated
//! afterwards. Every query is a pure function of the loaded data, so the
//! store can be shared across threads without locking.

use std::collections::HashSet;
use std::sync::Arc;

use dex_content::{ContentFactory, LoadResult};
use dex_core::{
    BreakdownNode, Category, CreatureKey, CreatureOracle, CreatureRecord, DexConfig,
    EffectivenessProfile, LongRow, MatchupMatrix, MatchupOracle, Multiplier, QueryError,
    SchemaError, StatBar, TotalBar,
};
use tracing::{debug, info};

use crate::oracle::{ConfigOracleImpl, CreatureOracleImpl, MatchupOracleImpl, OracleManager};

pub type Result<T> = std::result::Result<T, QueryError>;

/// Immutable dataset plus the queries that back every chart.
#[derive(Clone)]
pub struct DexStore {
    oracles: OracleManager,
}

impl DexStore {
    /// Assemble a store from already parsed sources.
    ///
    /// Cross-source invariants are checked here: record keys are unique,
    /// every record category is part of the matrix vocabulary, and every
    /// configured default names a loaded record.
    pub fn new(
        records: Vec<CreatureRecord>,
        matrix: MatchupMatrix,
        config: DexConfig,
    ) -> std::result::Result<Self, SchemaError> {
        for record in &records {
            if let Some(category) = record.categories.iter().find(|c| !matrix.contains(c.as_str()))
            {
                return Err(SchemaError::UnknownCategory {
                    key: record.key.to_string(),
                    category: category.to_string(),
                });
            }
        }

        let creatures = CreatureOracleImpl::from_records(records)?;

        if let Some(missing) = config
            .referenced_keys()
            .find(|key| !creatures.contains(&CreatureKey::normalize(key)))
        {
            return Err(SchemaError::UnknownDefault {
                key: missing.to_string(),
            });
        }

        info!(
            records = creatures.len(),
            categories = matrix.len(),
            "store assembled"
        );

        Ok(Self {
            oracles: OracleManager::new(
                Arc::new(creatures),
                Arc::new(MatchupOracleImpl::new(matrix)),
                Arc::new(ConfigOracleImpl::new(config)),
            ),
        })
    }

    /// Load every source through `factory` and assemble the store.
    ///
    /// Any failure aborts the load; no partially built store is returned.
    pub fn load(factory: &ContentFactory) -> LoadResult<Self> {
        info!(data_dir = %factory.data_dir().display(), "loading dataset");
        let records = factory.load_creatures()?;
        let matrix = factory.load_matchups()?;
        let config = factory.load_config()?;
        Ok(Self::new(records, matrix, config)?)
    }

    /// All records in load order.
    pub fn records(&self) -> &[CreatureRecord] {
        self.oracles.creatures().records()
    }

    /// Keys in load order.
    pub fn keys(&self) -> Vec<&CreatureKey> {
        self.oracles.creatures().keys().collect()
    }

    /// Category vocabulary in matrix order.
    pub fn categories(&self) -> &[Category] {
        self.oracles.matchups().categories()
    }

    /// Configured default selection and comparison set.
    pub fn defaults(&self) -> &DexConfig {
        self.oracles.config().config()
    }

    /// Case-insensitive lookup on the creature name.
    pub fn get_by_key(&self, key: &str) -> Result<&CreatureRecord> {
        let normalized = CreatureKey::normalize(key);
        self.oracles
            .creatures()
            .get(&normalized)
            .ok_or(QueryError::NotFound(normalized))
    }

    /// Records matching any of `keys`, in load order.
    ///
    /// Keys without a match are dropped silently; the order and multiplicity
    /// of `keys` does not affect the result.
    pub fn get_by_keys<I, S>(&self, keys: I) -> Vec<&CreatureRecord>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let wanted: HashSet<String> = keys
            .into_iter()
            .map(|k| CreatureKey::normalize(k.as_ref()))
            .collect();

        let matched: Vec<_> = self
            .records()
            .iter()
            .filter(|r| wanted.contains(r.key.as_str()))
            .collect();

        if matched.len() < wanted.len() {
            debug!(
                requested = wanted.len(),
                matched = matched.len(),
                "dropped unmatched keys"
            );
        }
        matched
    }

    /// Record for the configured default selection.
    pub fn default_selection(&self) -> Result<&CreatureRecord> {
        self.get_by_key(&self.defaults().default_selection)
    }

    /// Records for the configured default comparison, in load order.
    pub fn default_comparison(&self) -> Vec<&CreatureRecord> {
        self.get_by_keys(&self.defaults().default_comparison)
    }

    /// One row per (record, stat) pair; see [`dex_core::reshape_long`].
    pub fn reshape_long<'a, I>(&self, records: I) -> Vec<LongRow>
    where
        I: IntoIterator<Item = &'a CreatureRecord>,
    {
        dex_core::reshape_long(records)
    }

    /// Effectiveness profile of `record` against the whole vocabulary.
    pub fn effectiveness_profile(&self, record: &CreatureRecord) -> EffectivenessProfile {
        dex_core::effectiveness_profile(self.oracles.matchups(), &record.categories)
    }

    /// Looks `key` up, then computes its effectiveness profile.
    pub fn profile_by_key(&self, key: &str) -> Result<EffectivenessProfile> {
        let record = self.get_by_key(key)?;
        Ok(self.effectiveness_profile(record))
    }

    /// Six stat bars for a single record.
    pub fn stat_bars(&self, key: &str) -> Result<Vec<StatBar>> {
        let record = self.get_by_key(key)?;
        Ok(dex_core::stat_bars(record))
    }

    /// Aggregate per record, in input order.
    pub fn totals<'a, I>(&self, records: I) -> Vec<TotalBar>
    where
        I: IntoIterator<Item = &'a CreatureRecord>,
    {
        dex_core::totals(records)
    }

    /// Primary/secondary category counts over the whole dataset.
    pub fn category_breakdown(&self) -> Vec<BreakdownNode> {
        dex_core::category_breakdown(self.records())
    }

    /// Raw matrix cell for `attacker -> defender`.
    pub fn matchup(&self, attacker: &str, defender: &str) -> Result<Multiplier> {
        let attacker = self.vocabulary_category(attacker)?;
        let defender = self.vocabulary_category(defender)?;
        self.oracles
            .matchups()
            .multiplier(attacker.as_str(), defender.as_str())
            .ok_or(QueryError::CategoryNotFound(defender.to_string()))
    }

    fn vocabulary_category(&self, raw: &str) -> Result<Category> {
        Category::new(raw)
            .filter(|c| self.oracles.matchups().contains(c.as_str()))
            .ok_or_else(|| QueryError::CategoryNotFound(raw.trim().to_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dex_core::{BaseStats, Categories, Stat};
    use Multiplier::*;

    fn category(name: &str) -> Category {
        Category::new(name).unwrap()
    }

    fn record(name: &str, ordinal: u32, primary: &str) -> CreatureRecord {
        CreatureRecord::new(
            CreatureKey::new(name).unwrap(),
            ordinal,
            BaseStats::new([10, 20, 30, 40, 50, 60]),
            Categories::single(category(primary)),
        )
    }

    fn matrix() -> MatchupMatrix {
        let defenders = vec![category("fire"), category("water")];
        MatchupMatrix::from_rows(
            defenders,
            vec![
                (category("fire"), vec![Half, Half]),
                (category("water"), vec![Double, Half]),
            ],
        )
        .unwrap()
    }

    fn config(selection: &str) -> DexConfig {
        DexConfig {
            default_selection: selection.into(),
            default_comparison: vec![selection.into()],
        }
    }

    fn store() -> DexStore {
        DexStore::new(
            vec![record("Squirtle", 7, "water"), record("Charmander", 4, "fire")],
            matrix(),
            config("squirtle"),
        )
        .unwrap()
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let store = store();
        assert_eq!(
            store.get_by_key("SQUIRTLE").unwrap(),
            store.get_by_key("squirtle").unwrap()
        );
        assert_eq!(
            store.get_by_key("  squirtle "),
            store.get_by_key("Squirtle")
        );
        assert_eq!(
            store.get_by_key("missingno"),
            Err(QueryError::NotFound("missingno".into()))
        );
    }

    #[test]
    fn get_by_keys_uses_load_order() {
        let store = store();
        let keys: Vec<_> = store
            .get_by_keys(["charmander", "SQUIRTLE", "missingno"])
            .iter()
            .map(|r| r.key.as_str())
            .collect();
        assert_eq!(keys, ["squirtle", "charmander"]);
        assert!(store.get_by_keys(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn unknown_category_is_rejected() {
        let err = DexStore::new(vec![record("Pikachu", 25, "electric")], matrix(), config("pikachu"))
            .err()
            .unwrap();
        assert_eq!(
            err,
            SchemaError::UnknownCategory {
                key: "pikachu".into(),
                category: "electric".into()
            }
        );
    }

    #[test]
    fn unknown_default_is_rejected() {
        let err = DexStore::new(vec![record("Squirtle", 7, "water")], matrix(), config("Mew"))
            .err()
            .unwrap();
        assert_eq!(err, SchemaError::UnknownDefault { key: "Mew".into() });
    }

    #[test]
    fn stat_bars_and_totals() {
        let store = store();
        let bars = store.stat_bars("squirtle").unwrap();
        assert_eq!(bars.len(), Stat::COUNT);
        assert_eq!(bars[0].stat, Stat::Hp);
        assert_eq!(bars[5].value, 60);

        let totals = store.totals(store.records());
        assert_eq!(totals.len(), 2);
        assert!(totals.iter().all(|t| t.total == 210));
        assert!(store.stat_bars("nobody").unwrap_err().is_not_found());
    }

    #[test]
    fn matchup_lookup() {
        let store = store();
        assert_eq!(store.matchup("Water", "fire"), Ok(Double));
        assert_eq!(
            store.matchup("water", "ice"),
            Err(QueryError::CategoryNotFound("ice".into()))
        );
    }

    #[test]
    fn defaults_resolve() {
        let store = store();
        assert_eq!(store.default_selection().unwrap().ordinal, 7);
        assert_eq!(store.default_comparison().len(), 1);
    }
}
