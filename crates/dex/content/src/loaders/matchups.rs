//! Matchup matrix loader.

use std::path::Path;

use dex_core::{Category, MatchupMatrix, Multiplier, ParseError, SchemaError, SourceLocation};
use tracing::{debug, info};

use crate::loaders::{LoadResult, csv_error, read_file};

const TABLE: &str = "matchup matrix";

/// Loader for the attacker-by-defender matchup matrix.
///
/// The first header cell is a free label; the rest of the header names the
/// defending categories. Every data row starts with its attacking category.
pub struct MatchupLoader;

impl MatchupLoader {
    /// Load the matrix from a CSV file.
    pub fn load(path: &Path) -> LoadResult<MatchupMatrix> {
        debug!(path = %path.display(), "loading matchup matrix");
        let content = read_file(path)?;
        Self::from_str(&content)
    }

    /// Parse a matrix from CSV text.
    pub fn from_str(content: &str) -> LoadResult<MatchupMatrix> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(content.as_bytes());

        let headers = reader.headers().map_err(csv_error(TABLE))?.clone();
        let defenders = headers
            .iter()
            .enumerate()
            .skip(1)
            .map(|(position, label)| {
                Category::new(label).ok_or(SchemaError::BlankMatrixLabel { position })
            })
            .collect::<Result<Vec<_>, _>>()?;
        if defenders.is_empty() {
            return Err(SchemaError::EmptyMatrix.into());
        }

        let mut rows = Vec::with_capacity(defenders.len());
        for (index, record) in reader.records().enumerate() {
            let record = record.map_err(csv_error(TABLE))?;
            let row_number = index + 1;

            if record.len() != defenders.len() + 1 {
                return Err(SchemaError::RaggedMatrixRow {
                    row: row_number,
                    expected: defenders.len(),
                    found: record.len().saturating_sub(1),
                }
                .into());
            }

            let attacker = record
                .get(0)
                .and_then(Category::new)
                .ok_or(SchemaError::BlankMatrixLabel { position: 0 })?;

            let cells = record
                .iter()
                .skip(1)
                .zip(&defenders)
                .map(|(text, defender)| parse_cell(text, row_number, &attacker, defender))
                .collect::<LoadResult<Vec<_>>>()?;
            rows.push((attacker, cells));
        }

        let matrix = MatchupMatrix::from_rows(defenders, rows)?;
        info!(categories = matrix.len(), "matchup matrix loaded");
        Ok(matrix)
    }
}

fn parse_cell(
    text: &str,
    row: usize,
    attacker: &Category,
    defender: &Category,
) -> LoadResult<Multiplier> {
    let value: f64 = text.parse().map_err(|_| ParseError::InvalidNumber {
        location: SourceLocation::new(row, defender.as_str()),
        value: text.to_string(),
    })?;
    Multiplier::from_value(value).ok_or_else(|| {
        SchemaError::InvalidMultiplier {
            attacker: attacker.to_string(),
            defender: defender.to_string(),
            value: text.to_string(),
        }
        .into()
    })
}
