use std::fmt;

use crate::error::{LinalgError, Result};
use crate::real_matrix::{GaussJordan, Matrix};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dependence {
    Independent,
    Dependent,
}

impl fmt::Display for Dependence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Independent => write!(f, "Linearly independent set"),
            Self::Dependent => write!(f, "Linearly dependent set"),
        }
    }
}

pub fn check_linear_dependence(vectors: &[Vec<f64>]) -> Result<Dependence> {
    check_linear_dependence_with(&GaussJordan::default(), vectors)
}

/// Classifies `vectors` by reducing the homogeneous system whose columns they are.
///
/// The set is independent exactly when every vector ends up as a pivot column.
pub fn check_linear_dependence_with(
    reducer: &GaussJordan,
    vectors: &[Vec<f64>],
) -> Result<Dependence> {
    if vectors.is_empty() {
        return Err(LinalgError::NoVectors);
    }
    let dimension = vectors[0].len();
    let mut columns = vectors.to_vec();
    columns.push(vec![0.0; dimension]);
    let matrix = Matrix::from_columns(&columns)?;
    let (_, parameters) = reducer.reduce_with_parameters(&matrix);
    let dependence = if parameters.unknowns == parameters.coefficient_rank {
        Dependence::Independent
    } else {
        Dependence::Dependent
    };
    log::debug!(
        "{} vectors of dimension {dimension}: rank {}, {dependence:?}",
        vectors.len(),
        parameters.coefficient_rank
    );
    Ok(dependence)
}
