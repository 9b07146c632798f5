//! Config oracle holding dataset defaults.

use dex_core::DexConfig;

/// Runtime wrapper around [`DexConfig`].
pub struct ConfigOracleImpl {
    config: DexConfig,
}

impl ConfigOracleImpl {
    pub fn new(config: DexConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DexConfig {
        &self.config
    }
}
