use std::str::FromStr;

use crate::error::{LinalgError, Result};

/// Dense real matrix stored as a list of rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub number_of_columns: usize,
    pub rows: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeroes(rows: usize, cols: usize) -> Self {
        Self {
            number_of_columns: cols,
            rows: (0..rows).map(|_| vec![0.0; cols]).collect(),
        }
    }

    /// Builds a matrix from its rows, rejecting empty, ragged or non-finite input.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let number_of_columns = rows.first().map(Vec::len).unwrap_or(0);
        if number_of_columns == 0 {
            return Err(LinalgError::EmptyMatrix);
        }
        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != number_of_columns {
                return Err(LinalgError::ShapeMismatch {
                    what: "matrix row length",
                    expected: number_of_columns,
                    actual: row.len(),
                });
            }
            if let Some(column) = row.iter().position(|v| !v.is_finite()) {
                return Err(LinalgError::NonFiniteEntry {
                    row: row_idx,
                    column,
                });
            }
        }
        Ok(Self {
            number_of_columns,
            rows,
        })
    }

    /// Stacks equal-length vectors side by side as the columns of a matrix.
    pub fn from_columns(columns: &[Vec<f64>]) -> Result<Self> {
        let first = columns.first().ok_or(LinalgError::NoVectors)?;
        let number_of_rows = first.len();
        for column in columns {
            if column.len() != number_of_rows {
                return Err(LinalgError::ShapeMismatch {
                    what: "vector length",
                    expected: number_of_rows,
                    actual: column.len(),
                });
            }
        }
        let rows = (0..number_of_rows)
            .map(|r| columns.iter().map(|column| column[r]).collect())
            .collect();
        Self::from_rows(rows)
    }

    pub fn number_of_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn get(&self, r: usize, c: usize) -> f64 {
        self.rows[r][c]
    }

    pub fn row(&self, r: usize) -> &[f64] {
        &self.rows[r]
    }

    pub fn column(&self, c: usize) -> Vec<f64> {
        self.rows.iter().map(|row| row[c]).collect()
    }

    /// Returns `[self | column]`.
    pub fn with_appended_column(&self, column: &[f64]) -> Result<Self> {
        if column.len() != self.number_of_rows() {
            return Err(LinalgError::ShapeMismatch {
                what: "right-hand side length",
                expected: self.number_of_rows(),
                actual: column.len(),
            });
        }
        let rows = self
            .rows
            .iter()
            .zip(column)
            .map(|(row, v)| {
                let mut extended = Vec::with_capacity(row.len() + 1);
                extended.extend_from_slice(row);
                extended.push(*v);
                extended
            })
            .collect();
        Self::from_rows(rows)
    }

    pub fn mul_vec(&self, v: &[f64]) -> Result<Vec<f64>> {
        if v.len() != self.number_of_columns {
            return Err(LinalgError::ShapeMismatch {
                what: "vector length",
                expected: self.number_of_columns,
                actual: v.len(),
            });
        }
        Ok(self
            .rows
            .iter()
            .map(|row| row.iter().zip(v).map(|(a, b)| a * b).sum())
            .collect())
    }
}

/// Parses `"1, 2 3"` into a vector. Entries are separated by commas and/or whitespace.
pub fn parse_vector(s: &str) -> Result<Vec<f64>> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            entry
                .parse::<f64>()
                .map_err(|_| LinalgError::ParseEntry(entry.to_string()))
        })
        .collect()
}

// rows are separated by `;`, e.g. "1,2;3,4"
impl FromStr for Matrix {
    type Err = LinalgError;

    fn from_str(s: &str) -> Result<Self> {
        let rows = s
            .split(';')
            .filter(|row| !row.trim().is_empty())
            .map(parse_vector)
            .collect::<Result<Vec<_>>>()?;
        Self::from_rows(rows)
    }
}
