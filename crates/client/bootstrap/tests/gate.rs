use std::fs;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use client_bootstrap::{
    ContentStoreFactory, StoreBuilder, StoreConfig, StoreFactory, StoreGate,
};
use dex_content::{ContentFactory, LoadResult};
use dex_core::QueryError;
use dex_runtime::DexStore;

/// Counts how often the underlying load runs.
struct CountingFactory {
    inner: ContentStoreFactory,
    calls: AtomicUsize,
}

impl CountingFactory {
    fn new(inner: ContentStoreFactory) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }
}

impl StoreFactory for CountingFactory {
    fn build(&self) -> LoadResult<DexStore> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.build()
    }
}

fn bundled() -> ContentStoreFactory {
    ContentStoreFactory::new(ContentFactory::bundled_data_dir())
}

#[test]
fn test_gate_is_not_ready_before_initialize() {
    let gate = StoreGate::new();
    assert!(!gate.is_ready());
    assert_eq!(gate.store().err(), Some(QueryError::NotReady));
}

#[test]
fn test_gate_loads_once() {
    let gate = StoreGate::new();
    let factory = CountingFactory::new(bundled());

    let first = gate.initialize(&factory).expect("bundled data loads");
    let second = gate.initialize(&factory).expect("already loaded");

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(factory.calls.load(Ordering::SeqCst), 1);
    assert!(gate.is_ready());

    let store = gate.store().expect("ready");
    assert!(store.get_by_key("Bulbasaur").is_ok());
}

#[test]
fn test_failed_load_keeps_gate_closed() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("creatures.csv"), "name\nbulbasaur\n").unwrap();

    let gate = StoreGate::new();
    let err = gate
        .initialize(&ContentStoreFactory::new(dir.path()))
        .err()
        .expect("schema error");
    assert!(err.as_schema().is_some());
    assert!(!gate.is_ready());
    assert_eq!(gate.store().err(), Some(QueryError::NotReady));

    // A later successful load opens the gate.
    gate.initialize(&bundled()).expect("bundled data loads");
    assert!(gate.is_ready());
}

#[test]
fn test_builder_uses_configured_file_names() {
    let dir = tempfile::tempdir().unwrap();
    let bundled_dir = ContentFactory::bundled_data_dir();
    fs::copy(bundled_dir.join("creatures.csv"), dir.path().join("gen1.csv")).unwrap();
    fs::copy(bundled_dir.join("type_chart.csv"), dir.path().join("chart.csv")).unwrap();

    let config = StoreConfig {
        data_dir: Some(dir.path().to_path_buf()),
        creatures_file: Some("gen1.csv".into()),
        matchups_file: Some("chart.csv".into()),
        ..StoreConfig::default()
    };
    let setup = StoreBuilder::new(config).build().expect("store builds");

    // No config.toml in the directory: built-in defaults apply.
    assert_eq!(setup.store.defaults().default_selection, "bulbasaur");
    assert_eq!(setup.store.default_comparison().len(), 3);
}

#[test]
fn test_builder_reports_missing_directory() {
    let config = StoreConfig {
        data_dir: Some("/nonexistent/dex/data".into()),
        ..StoreConfig::default()
    };
    let err = StoreBuilder::new(config).build().err().expect("load fails");
    assert!(err.to_string().contains("failed to load creature dataset"));
}

#[test]
fn test_builder_initializes_gate() {
    let config = StoreConfig {
        data_dir: Some(ContentFactory::bundled_data_dir()),
        ..StoreConfig::default()
    };
    let gate = StoreGate::new();
    let store = StoreBuilder::new(config).initialize(&gate).expect("loads");
    assert!(Arc::ptr_eq(&store, gate.store().unwrap()));
}
