pub mod solution;

use itertools::Itertools;

use crate::error::{LinalgError, Result};
use crate::real_matrix::{GaussJordan, Matrix};

pub use solution::{Solution, SolutionSet};

pub fn solve(coefficients: &Matrix, rhs: Option<&[f64]>) -> Result<Solution> {
    solve_with(&GaussJordan::default(), coefficients, rhs)
}

/// Classifies `coefficients x = rhs` and returns its general solution.
///
/// A missing right-hand side means the homogeneous system. The particular
/// solution is only reported for underdetermined systems when `rhs` has a
/// nonzero entry.
pub fn solve_with(
    reducer: &GaussJordan,
    coefficients: &Matrix,
    rhs: Option<&[f64]>,
) -> Result<Solution> {
    let number_of_rows = coefficients.number_of_rows();
    if let Some(rhs) = rhs {
        if rhs.len() != number_of_rows {
            return Err(LinalgError::ShapeMismatch {
                what: "right-hand side length",
                expected: number_of_rows,
                actual: rhs.len(),
            });
        }
    }
    let homogeneous = rhs.map_or(true, |b| b.iter().all(|v| *v == 0.0));
    let zeros = vec![0.0; number_of_rows];
    let augmented = coefficients.with_appended_column(rhs.unwrap_or(&zeros[..]))?;

    let (reduced, parameters) = reducer.reduce_with_parameters(&augmented);
    if !parameters.is_compatible() {
        log::debug!("incompatible system: {parameters:?}");
        return Ok(Solution::Incompatible {
            augmented_rank: parameters.augmented_rank,
            coefficient_rank: parameters.coefficient_rank,
        });
    }

    let unknowns = parameters.unknowns;
    let rank = parameters.coefficient_rank;
    let pivots = reduced.rows[..rank]
        .iter()
        .filter_map(|row| row[..unknowns].iter().position(|v| *v != 0.0))
        .collect_vec();
    let free = (0..unknowns).filter(|c| !pivots.contains(c)).collect_vec();
    log::debug!("pivot columns {pivots:?}, free columns {free:?}");

    let mut particular = vec![0.0; unknowns];
    for (row, &pivot) in pivots.iter().enumerate() {
        particular[pivot] = reduced.get(row, unknowns);
    }

    if parameters.is_determined() {
        return Ok(Solution::Determined(particular));
    }

    let basis = free
        .iter()
        .map(|&free_column| {
            let mut direction = vec![0.0; unknowns];
            for (row, &pivot) in pivots.iter().enumerate() {
                direction[pivot] = -reduced.get(row, free_column);
            }
            direction[free_column] = 1.0;
            direction
        })
        .collect_vec();

    if homogeneous {
        Ok(Solution::HomogeneousUnderdetermined(basis))
    } else {
        Ok(Solution::Underdetermined(SolutionSet { particular, basis }))
    }
}
