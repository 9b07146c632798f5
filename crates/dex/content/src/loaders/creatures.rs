//! Creature table loader.
//!
//! Reads the CSV creature table into [`CreatureRecord`]s in file order,
//! enforcing every record-level invariant on the way in.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use dex_core::{
    BaseStats, Categories, Category, CreatureKey, CreatureRecord, ParseError, SchemaError,
    SourceLocation, Stat, columns,
};
use tracing::{debug, info, warn};

use crate::loaders::{LoadResult, csv_error, parse_ability_list, read_file};

const TABLE: &str = "creature table";

/// Loader for the creature table.
pub struct CreatureLoader;

impl CreatureLoader {
    /// Load the creature table from a CSV file.
    pub fn load(path: &Path) -> LoadResult<Vec<CreatureRecord>> {
        debug!(path = %path.display(), "loading creature table");
        let content = read_file(path)?;
        Self::from_str(&content)
    }

    /// Parse a creature table from CSV text.
    ///
    /// # Errors
    ///
    /// - [`SchemaError`] for a missing or repeated column, empty or duplicate key,
    ///   duplicate ordinal, negative stat, aggregate mismatch, bad category
    ///   tags, or a non-positive measurement
    /// - [`ParseError`] for numeric or list cells that cannot be decoded
    pub fn from_str(content: &str) -> LoadResult<Vec<CreatureRecord>> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(content.as_bytes());

        let headers = reader.headers().map_err(csv_error(TABLE))?.clone();
        let layout = ColumnLayout::resolve(&headers)?;

        let mut records = Vec::new();
        let mut keys = HashSet::new();
        let mut ordinals = HashSet::new();
        for (index, row) in reader.records().enumerate() {
            let row = row.map_err(csv_error(TABLE))?;
            let row_number = index + 1;
            let record = layout.parse_row(&row, row_number)?;

            if !keys.insert(record.key.clone()) {
                return Err(SchemaError::DuplicateKey {
                    key: record.key.to_string(),
                    row: row_number,
                }
                .into());
            }
            if !ordinals.insert(record.ordinal) {
                return Err(SchemaError::DuplicateOrdinal {
                    ordinal: record.ordinal,
                    row: row_number,
                }
                .into());
            }
            records.push(record);
        }

        info!(records = records.len(), "creature table loaded");
        Ok(records)
    }
}

/// Column positions resolved from the header row.
struct ColumnLayout {
    name: usize,
    ordinal: usize,
    stats: [usize; Stat::COUNT],
    total: Option<usize>,
    type1: usize,
    type2: usize,
    abilities: usize,
    weight: usize,
    height: usize,
    image: usize,
}

impl ColumnLayout {
    fn resolve(headers: &csv::StringRecord) -> Result<Self, SchemaError> {
        let mut positions = HashMap::new();
        for (i, header) in headers.iter().enumerate() {
            let column = header.to_lowercase();
            if positions.insert(column.clone(), i).is_some() {
                return Err(SchemaError::DuplicateColumn {
                    table: TABLE,
                    column,
                });
            }
        }

        let find = |column: &str| {
            positions
                .get(column)
                .copied()
                .ok_or_else(|| SchemaError::MissingColumn {
                    table: TABLE,
                    column: column.to_string(),
                })
        };

        let mut stats = [0; Stat::COUNT];
        for stat in Stat::ALL {
            stats[stat.as_index()] = find(stat.column())?;
        }

        let known: HashSet<&str> = columns::REQUIRED
            .iter()
            .copied()
            .chain([columns::TOTAL])
            .collect();
        for header in headers.iter() {
            if !known.contains(header.to_lowercase().as_str()) {
                warn!(column = header, "ignoring extra column");
            }
        }

        Ok(Self {
            name: find(columns::NAME)?,
            ordinal: find(columns::ORDINAL)?,
            stats,
            total: positions.get(columns::TOTAL).copied(),
            type1: find(columns::TYPE1)?,
            type2: find(columns::TYPE2)?,
            abilities: find(columns::ABILITIES)?,
            weight: find(columns::WEIGHT)?,
            height: find(columns::HEIGHT)?,
            image: find(columns::IMAGE)?,
        })
    }

    fn parse_row(&self, row: &csv::StringRecord, row_number: usize) -> LoadResult<CreatureRecord> {
        let cell = |index: usize| row.get(index).unwrap_or("");

        let key = CreatureKey::new(cell(self.name))
            .ok_or(SchemaError::EmptyKey { row: row_number })?;

        let ordinal = parse_integer::<u32>(cell(self.ordinal), row_number, columns::ORDINAL)?;

        let mut values = [0u16; Stat::COUNT];
        for stat in Stat::ALL {
            values[stat.as_index()] = parse_stat(cell(self.stats[stat.as_index()]), row_number, stat)?;
        }
        let stats = BaseStats::new(values);

        if let Some(total_index) = self.total {
            let stored = parse_integer::<u32>(cell(total_index), row_number, columns::TOTAL)?;
            let computed = stats.total();
            if stored != computed {
                return Err(SchemaError::AggregateMismatch {
                    key: key.to_string(),
                    stored,
                    computed,
                }
                .into());
            }
        }

        let primary = Category::new(cell(self.type1))
            .ok_or(SchemaError::MissingCategory { row: row_number })?;
        let categories = match Category::new(cell(self.type2)) {
            None => Categories::single(primary),
            Some(secondary) if secondary == primary => {
                return Err(SchemaError::DuplicateCategory {
                    key: key.to_string(),
                    category: secondary.to_string(),
                }
                .into());
            }
            Some(secondary) => Categories::dual(primary, secondary),
        };

        let abilities_text = cell(self.abilities);
        let abilities =
            parse_ability_list(abilities_text).map_err(|reason| ParseError::MalformedList {
                location: SourceLocation::new(row_number, columns::ABILITIES),
                value: abilities_text.to_string(),
                reason,
            })?;

        let weight = parse_measurement(cell(self.weight), row_number, columns::WEIGHT)?;
        let height = parse_measurement(cell(self.height), row_number, columns::HEIGHT)?;

        Ok(CreatureRecord::new(key, ordinal, stats, categories)
            .with_abilities(abilities)
            .with_measurements(weight, height)
            .with_image(cell(self.image)))
    }
}

fn parse_integer<T: std::str::FromStr>(
    text: &str,
    row: usize,
    column: &str,
) -> Result<T, ParseError> {
    text.parse().map_err(|_| ParseError::InvalidInteger {
        location: SourceLocation::new(row, column),
        value: text.to_string(),
    })
}

fn parse_stat(text: &str, row: usize, stat: Stat) -> LoadResult<u16> {
    let value: i64 = parse_integer(text, row, stat.column())?;
    if value < 0 {
        return Err(SchemaError::NegativeAttribute { row, stat, value }.into());
    }
    u16::try_from(value)
        .map_err(|_| SchemaError::AttributeOutOfRange { row, stat, value }.into())
}

fn parse_measurement(text: &str, row: usize, column: &str) -> LoadResult<f64> {
    let value: f64 = text.parse().map_err(|_| ParseError::InvalidNumber {
        location: SourceLocation::new(row, column),
        value: text.to_string(),
    })?;
    if !value.is_finite() || value <= 0.0 {
        return Err(SchemaError::NonPositiveMeasurement {
            location: SourceLocation::new(row, column),
            value: text.to_string(),
        }
        .into());
    }
    Ok(value)
}
