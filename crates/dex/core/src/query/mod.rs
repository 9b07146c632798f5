//! Pure query functions over a loaded dataset.
//!
//! Every function here is referentially transparent: the same records and
//! matrix always produce the same output, so callers may cache results keyed
//! by their inputs.
mod breakdown;
mod melt;
mod profile;
mod project;

pub use breakdown::{BreakdownNode, category_breakdown};
pub use melt::{LongRow, reshape_long};
pub use profile::{EffectivenessProfile, combined_multiplier, effectiveness_profile};
pub use project::{StatBar, TotalBar, stat_bars, totals};
