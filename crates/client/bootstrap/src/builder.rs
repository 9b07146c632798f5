//! Builds the store used by front-ends.
use std::sync::Arc;

use anyhow::{Context, Result};
use dex_runtime::DexStore;

use crate::config::StoreConfig;
use crate::gate::StoreGate;
use crate::sources::{ContentStoreFactory, StoreFactory};

/// Builder that assembles the store for clients.
pub struct StoreBuilder {
    factory: Arc<dyn StoreFactory>,
}

impl StoreBuilder {
    pub fn new(config: StoreConfig) -> Self {
        let default_factory = ContentStoreFactory::from_config(&config);
        Self {
            factory: Arc::new(default_factory),
        }
    }

    /// Provide a custom store factory (e.g., in-memory fixtures).
    pub fn factory(mut self, factory: impl StoreFactory + 'static) -> Self {
        self.factory = Arc::new(factory);
        self
    }

    pub fn build(self) -> Result<StoreSetup> {
        let store = self
            .factory
            .build()
            .context("failed to load creature dataset")?;

        Ok(StoreSetup {
            store: Arc::new(store),
        })
    }

    /// Load through `gate`, opening it for every later reader.
    pub fn initialize(&self, gate: &StoreGate) -> Result<Arc<DexStore>> {
        gate.initialize(self.factory.as_ref())
            .context("failed to load creature dataset")
    }
}

pub struct StoreSetup {
    pub store: Arc<DexStore>,
}
