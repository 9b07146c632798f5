//! Shared bootstrap utilities for client front-ends.
//!
//! Provides configuration loading, source resolution, store assembly, and the
//! readiness gate that can be reused by the CLI or any other front-end crate.
pub mod builder;
pub mod config;
pub mod gate;
pub mod sources;

pub use builder::{StoreBuilder, StoreSetup};
pub use config::StoreConfig;
pub use gate::StoreGate;
pub use sources::{ContentStoreFactory, StoreFactory};
