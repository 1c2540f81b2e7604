use super::matrix::Matrix;
use crate::error::{LinalgError, Result};

/// Entries with a smaller magnitude are treated as exact zeros.
pub const DEFAULT_TOLERANCE: f64 = 1e-12;

/// Parameters of the linear system whose augmented matrix was reduced.
///
/// The last column is always read as the right-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemParameters {
    pub unknowns: usize,
    pub augmented_rank: usize,
    pub coefficient_rank: usize,
}

impl SystemParameters {
    pub fn of_reduced(reduced: &Matrix) -> Self {
        let unknowns = reduced.number_of_columns.saturating_sub(1);
        let augmented_rank = reduced
            .rows
            .iter()
            .filter(|row| row.iter().any(|v| *v != 0.0))
            .count();
        let coefficient_rank = reduced
            .rows
            .iter()
            .filter(|row| row[..unknowns].iter().any(|v| *v != 0.0))
            .count();
        Self {
            unknowns,
            augmented_rank,
            coefficient_rank,
        }
    }

    pub fn is_compatible(&self) -> bool {
        self.augmented_rank == self.coefficient_rank
    }

    pub fn is_determined(&self) -> bool {
        self.is_compatible() && self.coefficient_rank == self.unknowns
    }

    pub fn free_variables(&self) -> usize {
        self.unknowns.saturating_sub(self.coefficient_rank)
    }
}

/// Gauss-Jordan reducer.
///
/// Pivots on the smallest nonzero magnitude of each column rather than the
/// largest, and zeroes every entry below `tolerance` before each step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussJordan {
    tolerance: f64,
}

impl Default for GaussJordan {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl GaussJordan {
    pub fn with_tolerance(tolerance: f64) -> Result<Self> {
        if !(tolerance.is_finite() && tolerance > 0.0) {
            return Err(LinalgError::InvalidTolerance(tolerance));
        }
        Ok(Self { tolerance })
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the reduced row-echelon form of `m`. The input is left untouched.
    pub fn reduce(&self, m: &Matrix) -> Matrix {
        let mut elimination = Elimination::copy_from_matrix(m, self.tolerance);
        elimination.go_to_echelon_form();
        elimination.into_matrix()
    }

    pub fn reduce_with_parameters(&self, m: &Matrix) -> (Matrix, SystemParameters) {
        let reduced = self.reduce(m);
        let parameters = SystemParameters::of_reduced(&reduced);
        log::debug!("reduced {}x{} matrix: {parameters:?}", m.number_of_rows(), m.number_of_columns);
        (reduced, parameters)
    }

    /// Number of nonzero rows of the reduced form.
    pub fn rank(&self, m: &Matrix) -> usize {
        SystemParameters::of_reduced(&self.reduce(m)).augmented_rank
    }
}

pub fn reduce(m: &Matrix) -> Matrix {
    GaussJordan::default().reduce(m)
}

pub fn reduce_with_parameters(m: &Matrix) -> (Matrix, SystemParameters) {
    GaussJordan::default().reduce_with_parameters(m)
}

// working copy owned by a single reduction
struct Elimination {
    rows: Vec<Vec<f64>>,
    number_of_columns: usize,
    active_row: usize,
    active_column: usize,
    tolerance: f64,
}

impl Elimination {
    fn copy_from_matrix(m: &Matrix, tolerance: f64) -> Self {
        debug_assert!(
            m.rows.iter().all(|row| row.len() == m.number_of_columns),
            "ragged matrix, build it with Matrix::from_rows"
        );
        Self {
            rows: m.rows.clone(),
            number_of_columns: m.number_of_columns,
            active_row: 0,
            active_column: 0,
            tolerance,
        }
    }

    fn go_to_echelon_form(&mut self) {
        while self.is_not_in_echelon_form() {
            self.zero_below_tolerance();
            if let Some(pivot_row) = self.find_pivot() {
                self.swap_into_active_row(pivot_row);
                self.normalize_active_row();
                self.eliminate_active_column();
                self.go_to_next_row();
            }
            self.go_to_next_column();
        }
        // the last elimination step can leave noise behind
        self.zero_below_tolerance();
    }

    fn is_not_in_echelon_form(&self) -> bool {
        self.active_row < self.rows.len() && self.active_column < self.number_of_columns
    }

    fn zero_below_tolerance(&mut self) {
        for v in self.rows.iter_mut().flatten() {
            if v.abs() < self.tolerance {
                *v = 0.0;
            }
        }
    }

    // smallest nonzero magnitude in the active column, first row on ties
    fn find_pivot(&self) -> Option<usize> {
        let column = self.active_column;
        (self.active_row..self.rows.len())
            .filter(|&r| self.rows[r][column] != 0.0)
            .min_by(|&a, &b| {
                self.rows[a][column]
                    .abs()
                    .total_cmp(&self.rows[b][column].abs())
            })
    }

    fn swap_into_active_row(&mut self, pivot_row: usize) {
        log::trace!(
            "pivot {} taken from row {pivot_row} into row {}, column {}",
            self.rows[pivot_row][self.active_column],
            self.active_row,
            self.active_column
        );
        if pivot_row == self.active_row {
            return;
        }
        let column = self.active_column;
        let (upper, lower) = self.rows.split_at_mut(pivot_row);
        upper[self.active_row][column..].swap_with_slice(&mut lower[0][column..]);
    }

    fn normalize_active_row(&mut self) {
        let column = self.active_column;
        let row = &mut self.rows[self.active_row];
        let lead = row[column];
        for v in row[column..].iter_mut() {
            *v /= lead;
        }
    }

    fn eliminate_active_column(&mut self) {
        let column = self.active_column;
        let pivot = self.rows[self.active_row][column..].to_vec();
        for (row_index, row) in self.rows.iter_mut().enumerate() {
            if row_index == self.active_row {
                continue;
            }
            let factor = row[column];
            if factor == 0.0 {
                continue;
            }
            for (v, p) in row[column..].iter_mut().zip(&pivot) {
                *v -= factor * p;
            }
        }
    }

    fn go_to_next_row(&mut self) {
        self.active_row += 1;
    }

    fn go_to_next_column(&mut self) {
        self.active_column += 1;
    }

    fn into_matrix(self) -> Matrix {
        Matrix {
            number_of_columns: self.number_of_columns,
            rows: self.rows,
        }
    }
}
