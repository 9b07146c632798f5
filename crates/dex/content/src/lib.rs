//! Dataset sources and loaders.
//!
//! This crate reads the creature table and matchup matrix from CSV and the
//! dataset defaults from TOML, producing validated `dex-core` values:
//! - Creature records (`creatures.csv`)
//! - Matchup matrix (`type_chart.csv`)
//! - Dataset defaults (`config.toml`, optional)
//!
//! The bundled dataset lives under `data/` in this crate.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, CreatureLoader, LoadError, LoadResult, MatchupLoader,
    parse_ability_list,
};
