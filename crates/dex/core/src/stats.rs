//! The six base stats every creature carries.
//!
//! [`Stat`] fixes the declaration order used by every per-stat projection
//! (stat bars, melt rows), so callers never depend on column positions.

/// One of the six numeric attributes.
///
/// The snake_case string form doubles as the column name in the creature table.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Stat {
    Hp,
    Attack,
    Defense,
    SpAttack,
    SpDefense,
    Speed,
}

impl Stat {
    pub const COUNT: usize = 6;

    /// All stats in declaration order.
    pub const ALL: [Stat; Self::COUNT] = [
        Stat::Hp,
        Stat::Attack,
        Stat::Defense,
        Stat::SpAttack,
        Stat::SpDefense,
        Stat::Speed,
    ];

    /// Position of this stat in [`Stat::ALL`].
    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }

    /// Column name in the creature table.
    pub fn column(self) -> &'static str {
        match self {
            Stat::Hp => "hp",
            Stat::Attack => "attack",
            Stat::Defense => "defense",
            Stat::SpAttack => "sp_attack",
            Stat::SpDefense => "sp_defense",
            Stat::Speed => "speed",
        }
    }
}

/// Base stat block. Values are non-negative by construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    values: [u16; Stat::COUNT],
}

impl BaseStats {
    /// Create a stat block from values in [`Stat::ALL`] order.
    pub const fn new(values: [u16; Stat::COUNT]) -> Self {
        Self { values }
    }

    #[inline]
    pub fn get(&self, stat: Stat) -> u16 {
        self.values[stat.as_index()]
    }

    /// Iterates `(stat, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Stat, u16)> + '_ {
        Stat::ALL.iter().map(move |&stat| (stat, self.get(stat)))
    }

    /// Sum of the six stats (the aggregate).
    pub fn total(&self) -> u32 {
        self.values.iter().map(|&v| u32::from(v)).sum()
    }

    pub fn as_array(&self) -> [u16; Stat::COUNT] {
        self.values
    }
}
