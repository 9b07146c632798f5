//! Read-only runtime over the creature dataset.
//!
//! This crate wires the loaded sources into oracle implementations and
//! exposes [`DexStore`], the immutable store every query goes through.
//!
//! Modules are organized by responsibility:
//! - [`oracle`] adapts loaded data to the `dex-core` oracle traits
//! - [`store`] assembles the oracles and hosts the query API
pub mod oracle;
pub mod store;

pub use oracle::{ConfigOracleImpl, CreatureOracleImpl, MatchupOracleImpl, OracleManager};
pub use store::{DexStore, Result};
