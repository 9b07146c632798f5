//! Chart-ready view structs printed by the CLI.
//!
//! Each view mirrors one visual of the dashboard: the single-creature card,
//! the radar and totals comparison, the effectiveness profile, the category
//! breakdown, and a raw matchup cell.

use serde::Serialize;

use dex_core::{
    BreakdownNode, Categories, CreatureKey, CreatureRecord, EffectivenessProfile, LongRow,
    Multiplier, StatBar, TotalBar,
};
use dex_runtime::DexStore;

/// Single-creature card with its six stat bars.
#[derive(Debug, Serialize)]
pub struct RecordView<'a> {
    #[serde(flatten)]
    pub record: &'a CreatureRecord,
    pub total: u32,
    pub stat_bars: Vec<StatBar>,
}

impl<'a> RecordView<'a> {
    pub fn new(record: &'a CreatureRecord) -> Self {
        Self {
            record,
            total: record.total(),
            stat_bars: dex_core::stat_bars(record),
        }
    }
}

/// Radar series plus the total-score bars for a set of creatures.
#[derive(Debug, Serialize)]
pub struct ComparisonView<'a> {
    pub keys: Vec<&'a CreatureKey>,
    pub radar: Vec<LongRow>,
    pub totals: Vec<TotalBar>,
}

impl<'a> ComparisonView<'a> {
    pub fn new(store: &DexStore, records: &[&'a CreatureRecord]) -> Self {
        Self {
            keys: records.iter().map(|r| &r.key).collect(),
            radar: store.reshape_long(records.iter().copied()),
            totals: store.totals(records.iter().copied()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProfileView<'a> {
    pub key: &'a CreatureKey,
    pub categories: &'a Categories,
    #[serde(flatten)]
    pub profile: EffectivenessProfile,
}

#[derive(Debug, Serialize)]
pub struct BreakdownView {
    pub groups: Vec<BreakdownNode>,
}

#[derive(Debug, Serialize)]
pub struct MatchupView {
    pub attacker: String,
    pub defender: String,
    pub multiplier: Multiplier,
    pub value: f64,
}

#[derive(Debug, Serialize)]
pub struct ListView<'a> {
    pub keys: Vec<&'a CreatureKey>,
}

/// Empty view shown when a lookup finds nothing.
#[derive(Debug, Serialize)]
pub struct Placeholder {
    pub missing: String,
}
