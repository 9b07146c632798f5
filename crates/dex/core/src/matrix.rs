//! Square matchup matrix over the category vocabulary.
//!
//! Rows are attacking categories, columns are defending categories. The
//! matrix is total: construction fails unless every ordered pair of
//! vocabulary categories has exactly one cell.

use std::collections::HashMap;

use crate::category::{Category, Multiplier};
use crate::schema::SchemaError;

/// Immutable, validated matchup table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchupMatrix {
    /// Vocabulary in column (header) order.
    categories: Vec<Category>,
    index: HashMap<Category, usize>,
    /// Row-major cells, `cells[attacker * n + defender]`.
    cells: Vec<Multiplier>,
}

impl MatchupMatrix {
    /// Builds a matrix from the header's defending categories and one
    /// `(attacker, cells)` row per attacking category.
    ///
    /// Rows may appear in any order; each row's cells follow `defenders`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] when the table is empty, not square, ragged,
    /// lists a category twice, or uses different labels on the two axes.
    pub fn from_rows(
        defenders: Vec<Category>,
        rows: Vec<(Category, Vec<Multiplier>)>,
    ) -> Result<Self, SchemaError> {
        let n = defenders.len();
        if n == 0 {
            return Err(SchemaError::EmptyMatrix);
        }

        let mut index = HashMap::with_capacity(n);
        for (i, category) in defenders.iter().enumerate() {
            if index.insert(category.clone(), i).is_some() {
                return Err(SchemaError::DuplicateMatrixCategory {
                    category: category.to_string(),
                });
            }
        }

        if rows.len() != n {
            return Err(SchemaError::MatrixNotSquare {
                rows: rows.len(),
                columns: n,
            });
        }

        let mut cells = vec![Multiplier::Neutral; n * n];
        let mut seen = vec![false; n];
        for (row_number, (attacker, row)) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(SchemaError::RaggedMatrixRow {
                    row: row_number + 1,
                    expected: n,
                    found: row.len(),
                });
            }
            let Some(&a) = index.get(&attacker) else {
                return Err(SchemaError::MatrixLabelMismatch {
                    category: attacker.to_string(),
                });
            };
            if seen[a] {
                return Err(SchemaError::DuplicateMatrixCategory {
                    category: attacker.to_string(),
                });
            }
            seen[a] = true;
            cells[a * n..(a + 1) * n].copy_from_slice(&row);
        }

        // Equal counts, distinct labels, every row label a column label:
        // the two axes are the same set.
        Ok(Self {
            categories: defenders,
            index,
            cells,
        })
    }

    /// Vocabulary in header order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn contains(&self, category: &str) -> bool {
        self.index.contains_key(category)
    }

    /// Looks up the cell for `attacker -> defender`.
    pub fn lookup(&self, attacker: &str, defender: &str) -> Option<Multiplier> {
        let a = *self.index.get(attacker)?;
        let d = *self.index.get(defender)?;
        Some(self.cells[a * self.len() + d])
    }
}
