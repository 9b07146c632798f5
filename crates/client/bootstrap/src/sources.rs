//! Helpers for resolving dataset sources consumed by the store.
use std::path::PathBuf;

use dex_content::{ContentFactory, LoadResult};
use dex_runtime::DexStore;
use tracing::debug;

use crate::config::StoreConfig;

pub trait StoreFactory: Send + Sync {
    fn build(&self) -> LoadResult<DexStore>;
}

/// Store factory that loads the dataset from files.
///
/// # Directory Structure
///
/// The factory expects the following files in the data directory:
/// ```text
/// data_dir/
/// ├── creatures.csv
/// ├── type_chart.csv
/// └── config.toml (optional)
/// ```
#[derive(Clone, Debug)]
pub struct ContentStoreFactory {
    content: ContentFactory,
}

impl ContentStoreFactory {
    /// Create a factory over `data_dir` with default file names.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            content: ContentFactory::new(data_dir),
        }
    }

    /// Create from configuration, falling back to [`Self::default_data_dir`].
    pub fn from_config(config: &StoreConfig) -> Self {
        let data_dir = config
            .data_dir
            .clone()
            .unwrap_or_else(Self::default_data_dir);

        let mut content = ContentFactory::new(data_dir);
        if let Some(name) = &config.creatures_file {
            content = content.with_creatures_file(name);
        }
        if let Some(name) = &config.matchups_file {
            content = content.with_matchups_file(name);
        }
        if let Some(name) = &config.config_file {
            content = content.with_config_file(name);
        }
        Self { content }
    }

    /// Data directory used when `DEX_DATA_DIR` is unset: the dataset bundled
    /// with `dex-content`, else `crates/dex/content/data` under the current
    /// directory.
    pub fn default_data_dir() -> PathBuf {
        let bundled = ContentFactory::bundled_data_dir();
        if bundled.is_dir() {
            return bundled;
        }
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join("crates/dex/content/data")
    }
}

impl StoreFactory for ContentStoreFactory {
    fn build(&self) -> LoadResult<DexStore> {
        debug!(data_dir = %self.content.data_dir().display(), "building store from content");
        DexStore::load(&self.content)
    }
}
