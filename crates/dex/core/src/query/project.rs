//! Column projections for the bar charts.

use crate::record::{CreatureKey, CreatureRecord};
use crate::stats::Stat;

/// One bar of a single-record stat chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBar {
    pub stat: Stat,
    pub value: u16,
}

/// Aggregate of one record for the total-score comparison.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TotalBar {
    pub key: CreatureKey,
    pub total: u32,
}

/// Six bars in [`Stat::ALL`] order.
pub fn stat_bars(record: &CreatureRecord) -> Vec<StatBar> {
    record
        .stats
        .iter()
        .map(|(stat, value)| StatBar { stat, value })
        .collect()
}

/// One bar per record, in input order.
pub fn totals<'a, I>(records: I) -> Vec<TotalBar>
where
    I: IntoIterator<Item = &'a CreatureRecord>,
{
    records
        .into_iter()
        .map(|record| TotalBar {
            key: record.key.clone(),
            total: record.total(),
        })
        .collect()
}
