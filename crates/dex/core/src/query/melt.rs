//! Reshape-to-long ("melt").
//!
//! Converts wide per-record stat columns into one row per (record, stat)
//! pair, the shape a multi-series radar chart consumes.

use crate::record::{CreatureKey, CreatureRecord};
use crate::stats::Stat;

/// One (record, stat) pair.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LongRow {
    pub key: CreatureKey,
    pub stat: Stat,
    pub value: u16,
}

/// Melts `records` into exactly `records.len() * 6` rows, record order first,
/// then [`Stat::ALL`] order.
pub fn reshape_long<'a, I>(records: I) -> Vec<LongRow>
where
    I: IntoIterator<Item = &'a CreatureRecord>,
{
    let records = records.into_iter();
    let mut rows = Vec::with_capacity(records.size_hint().0 * Stat::COUNT);
    for record in records {
        rows.extend(record.stats.iter().map(|(stat, value)| LongRow {
            key: record.key.clone(),
            stat,
            value,
        }));
    }
    rows
}
