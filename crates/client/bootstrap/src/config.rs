//! Store configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Configuration required to locate the dataset and set up logging.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoreConfig {
    pub data_dir: Option<PathBuf>,
    pub creatures_file: Option<String>,
    pub matchups_file: Option<String>,
    pub config_file: Option<String>,
    pub log_dir: Option<PathBuf>,
}

impl StoreConfig {
    pub const DATA_DIR_VAR: &'static str = "DEX_DATA_DIR";
    pub const CREATURES_FILE_VAR: &'static str = "DEX_CREATURES_FILE";
    pub const MATCHUPS_FILE_VAR: &'static str = "DEX_MATCHUPS_FILE";
    pub const CONFIG_FILE_VAR: &'static str = "DEX_CONFIG_FILE";
    pub const LOG_DIR_VAR: &'static str = "DEX_LOG_DIR";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DEX_DATA_DIR` - Directory holding the dataset (default: bundled data)
    /// - `DEX_CREATURES_FILE` - Creature table file name (default: creatures.csv)
    /// - `DEX_MATCHUPS_FILE` - Matchup matrix file name (default: type_chart.csv)
    /// - `DEX_CONFIG_FILE` - Defaults file name (default: config.toml)
    /// - `DEX_LOG_DIR` - Enables file logging into this directory
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construct configuration from an arbitrary variable source.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| read_var::<String>(&lookup, key);
        Self {
            data_dir: read_var::<PathBuf>(&lookup, Self::DATA_DIR_VAR),
            creatures_file: read(Self::CREATURES_FILE_VAR),
            matchups_file: read(Self::MATCHUPS_FILE_VAR),
            config_file: read(Self::CONFIG_FILE_VAR),
            log_dir: read_var::<PathBuf>(&lookup, Self::LOG_DIR_VAR),
        }
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    let value = lookup(key)?;
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    value.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn reads_known_variables() {
        let vars: HashMap<&str, &str> = [
            ("DEX_DATA_DIR", "/srv/dex"),
            ("DEX_CREATURES_FILE", "gen1.csv"),
            ("DEX_LOG_DIR", "  "),
        ]
        .into_iter()
        .collect();
        let config = StoreConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/dex")));
        assert_eq!(config.creatures_file.as_deref(), Some("gen1.csv"));
        assert_eq!(config.matchups_file, None);
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn empty_environment_is_default() {
        assert_eq!(StoreConfig::from_lookup(|_| None), StoreConfig::default());
    }
}
