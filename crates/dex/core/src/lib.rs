//! Creature statistics schema and pure query logic.
//!
//! `dex-core` defines the record schema, the category vocabulary and matchup
//! matrix, the load/query error taxonomy, and the reshaping functions that
//! back every chart. It performs no I/O: loaders live in `dex-content` and
//! the assembled store lives in `dex-runtime`.
pub mod category;
pub mod config;
pub mod error;
pub mod matrix;
pub mod oracle;
pub mod query;
pub mod record;
pub mod schema;
pub mod stats;

pub use category::{Categories, Category, Effectiveness, Multiplier};
pub use config::DexConfig;
pub use error::{DexError, ErrorSeverity, QueryError, SourceLocation};
pub use matrix::MatchupMatrix;
pub use oracle::{CreatureOracle, MatchupOracle};
pub use query::{
    BreakdownNode, EffectivenessProfile, LongRow, StatBar, TotalBar, category_breakdown,
    combined_multiplier, effectiveness_profile, reshape_long, stat_bars, totals,
};
pub use record::{CreatureKey, CreatureRecord, Measurements};
pub use schema::{ParseError, SchemaError, columns};
pub use stats::{BaseStats, Stat};
