//! Content factory for loading the dataset from a data directory.

use std::path::{Path, PathBuf};

use dex_core::{CreatureRecord, DexConfig, MatchupMatrix};
use tracing::{debug, warn};

use crate::loaders::{ConfigLoader, CreatureLoader, LoadResult, MatchupLoader};

/// Content factory that loads every dataset source from one directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── creatures.csv
/// ├── type_chart.csv
/// └── config.toml      (optional)
/// ```
///
/// File names can be overridden individually.
#[derive(Clone, Debug)]
pub struct ContentFactory {
    data_dir: PathBuf,
    creatures_file: String,
    matchups_file: String,
    config_file: String,
}

impl ContentFactory {
    pub const CREATURES_FILE: &'static str = "creatures.csv";
    pub const MATCHUPS_FILE: &'static str = "type_chart.csv";
    pub const CONFIG_FILE: &'static str = "config.toml";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            creatures_file: Self::CREATURES_FILE.to_string(),
            matchups_file: Self::MATCHUPS_FILE.to_string(),
            config_file: Self::CONFIG_FILE.to_string(),
        }
    }

    /// Directory of the dataset shipped with this crate.
    pub fn bundled_data_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn with_creatures_file(mut self, name: impl Into<String>) -> Self {
        self.creatures_file = name.into();
        self
    }

    pub fn with_matchups_file(mut self, name: impl Into<String>) -> Self {
        self.matchups_file = name.into();
        self
    }

    pub fn with_config_file(mut self, name: impl Into<String>) -> Self {
        self.config_file = name.into();
        self
    }

    /// Load the creature table.
    pub fn load_creatures(&self) -> LoadResult<Vec<CreatureRecord>> {
        CreatureLoader::load(&self.creatures_path())
    }

    /// Load the matchup matrix.
    pub fn load_matchups(&self) -> LoadResult<MatchupMatrix> {
        MatchupLoader::load(&self.matchups_path())
    }

    /// Load dataset defaults. A missing config file yields [`DexConfig::default`].
    ///
    /// A missing file under an overridden name is logged at `warn` since it
    /// usually means a misspelled `DEX_CONFIG_FILE`.
    pub fn load_config(&self) -> LoadResult<DexConfig> {
        let path = self.config_path();
        if !path.exists() {
            if self.has_custom_config_file() {
                warn!(path = %path.display(), "configured config file not found, using defaults");
            } else {
                debug!(path = %path.display(), "config file absent, using defaults");
            }
            return Ok(DexConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn creatures_path(&self) -> PathBuf {
        self.data_dir.join(&self.creatures_file)
    }

    pub fn matchups_path(&self) -> PathBuf {
        self.data_dir.join(&self.matchups_file)
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join(&self.config_file)
    }

    /// True when the config file name differs from [`Self::CONFIG_FILE`].
    pub fn has_custom_config_file(&self) -> bool {
        self.config_file != Self::CONFIG_FILE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loaders::LoadError;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data").with_creatures_file("gen1.csv");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
        assert_eq!(factory.creatures_path(), Path::new("/tmp/data/gen1.csv"));
        assert_eq!(factory.matchups_path(), Path::new("/tmp/data/type_chart.csv"));
    }

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().unwrap(), DexConfig::default());
        assert!(matches!(
            factory.load_creatures(),
            Err(LoadError::Io { .. })
        ));
    }

    #[test]
    fn misnamed_config_falls_back_but_is_flagged() {
        let dir = tempfile::tempdir().unwrap();
        let default = ContentFactory::new(dir.path());
        assert!(!default.has_custom_config_file());

        let misnamed = ContentFactory::new(dir.path()).with_config_file("confg.toml");
        assert!(misnamed.has_custom_config_file());
        assert_eq!(misnamed.load_config().unwrap(), DexConfig::default());

        let explicit = ContentFactory::new(dir.path()).with_config_file(ContentFactory::CONFIG_FILE);
        assert!(!explicit.has_custom_config_file());
    }

    #[test]
    fn bundled_dataset_loads() {
        let factory = ContentFactory::new(ContentFactory::bundled_data_dir());
        let records = factory.load_creatures().unwrap();
        let matrix = factory.load_matchups().unwrap();
        let config = factory.load_config().unwrap();

        assert_eq!(matrix.len(), 18);
        for record in &records {
            for category in record.categories.iter() {
                assert!(matrix.contains(category.as_str()), "{category}");
            }
        }
        for key in config.referenced_keys() {
            assert!(records.iter().any(|r| r.key.as_str() == key), "{key}");
        }
    }
}
