//! Readiness gate in front of the store.
//!
//! Loading is a blocking initialization step. Until it succeeds every
//! accessor reports [`QueryError::NotReady`]; after it succeeds the store is
//! shared read-only for the rest of the process.
use std::sync::{Arc, Mutex, OnceLock};

use dex_content::LoadResult;
use dex_core::QueryError;
use dex_runtime::DexStore;
use tracing::{info, warn};

use crate::sources::StoreFactory;

#[derive(Default)]
pub struct StoreGate {
    store: OnceLock<Arc<DexStore>>,
    init: Mutex<()>,
}

impl StoreGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the load once. Later calls return the already loaded store.
    ///
    /// A failed load leaves the gate not ready and may be retried.
    pub fn initialize(&self, factory: &dyn StoreFactory) -> LoadResult<Arc<DexStore>> {
        if let Some(store) = self.store.get() {
            return Ok(Arc::clone(store));
        }

        let _guard = self.init.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(store) = self.store.get() {
            return Ok(Arc::clone(store));
        }

        match factory.build() {
            Ok(store) => {
                info!("store ready");
                Ok(Arc::clone(self.store.get_or_init(|| Arc::new(store))))
            }
            Err(err) => {
                warn!(error = %err, "store failed to load");
                Err(err)
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        self.store.get().is_some()
    }

    /// The loaded store, or [`QueryError::NotReady`] before initialization.
    pub fn store(&self) -> Result<&Arc<DexStore>, QueryError> {
        self.store.get().ok_or(QueryError::NotReady)
    }
}
