//! Creature oracle implementing [`dex_core::CreatureOracle`].

use std::collections::HashMap;

use dex_core::{CreatureKey, CreatureOracle, CreatureRecord, SchemaError};

/// Oracle over the creature table.
///
/// Records keep their load order; a key index makes lookups constant time.
pub struct CreatureOracleImpl {
    records: Vec<CreatureRecord>,
    index: HashMap<CreatureKey, usize>,
}

impl CreatureOracleImpl {
    /// Create an empty oracle.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Build an oracle from records in load order.
    pub fn from_records(records: Vec<CreatureRecord>) -> Result<Self, SchemaError> {
        let mut oracle = Self::new();
        for record in records {
            oracle.add(record)?;
        }
        Ok(oracle)
    }

    /// Append a record. Fails when its key is already present.
    pub fn add(&mut self, record: CreatureRecord) -> Result<(), SchemaError> {
        if self.index.contains_key(&record.key) {
            return Err(SchemaError::DuplicateKey {
                key: record.key.to_string(),
                row: self.records.len() + 1,
            });
        }
        self.index.insert(record.key.clone(), self.records.len());
        self.records.push(record);
        Ok(())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Keys in load order.
    pub fn keys(&self) -> impl Iterator<Item = &CreatureKey> {
        self.records.iter().map(|r| &r.key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for CreatureOracleImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl CreatureOracle for CreatureOracleImpl {
    fn get(&self, key: &str) -> Option<&CreatureRecord> {
        self.index.get(key).map(|&i| &self.records[i])
    }

    fn records(&self) -> &[CreatureRecord] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dex_core::{BaseStats, Categories, Category};

    fn record(name: &str, ordinal: u32) -> CreatureRecord {
        CreatureRecord::new(
            CreatureKey::new(name).unwrap(),
            ordinal,
            BaseStats::new([1, 2, 3, 4, 5, 6]),
            Categories::single(Category::new("normal").unwrap()),
        )
    }

    #[test]
    fn preserves_load_order() {
        let oracle =
            CreatureOracleImpl::from_records(vec![record("b", 2), record("a", 1), record("c", 3)])
                .unwrap();
        let keys: Vec<_> = oracle.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, ["b", "a", "c"]);
        assert_eq!(oracle.get("a").map(|r| r.ordinal), Some(1));
        assert!(oracle.get("A").is_none());
    }

    #[test]
    fn rejects_duplicate_keys() {
        let err = CreatureOracleImpl::from_records(vec![record("a", 1), record("A", 2)])
            .err()
            .unwrap();
        assert_eq!(
            err,
            SchemaError::DuplicateKey {
                key: "a".into(),
                row: 2
            }
        );
    }
}
