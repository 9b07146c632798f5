//! Dataset configuration loader.

use std::path::Path;

use dex_core::DexConfig;

use crate::loaders::{LoadError, LoadResult, read_file};

/// Loader for dataset defaults from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys absent from the file keep their built-in defaults.
    pub fn load(path: &Path) -> LoadResult<DexConfig> {
        let content = read_file(path)?;
        Self::from_str(&content)
    }

    pub fn from_str(content: &str) -> LoadResult<DexConfig> {
        toml::from_str(content).map_err(LoadError::Config)
    }
}
