//! Gauss-Jordan reduction of real matrices and the questions it answers:
//! rank, linear dependence of a vector set, and the general solution of a
//! linear system.

pub mod error;
pub mod linear_dependence;
pub mod linear_systems;
pub mod real_matrix;
pub mod report;

#[cfg(test)]
mod proptests;

pub use error::{LinalgError, Result};
pub use linear_dependence::{check_linear_dependence, check_linear_dependence_with, Dependence};
pub use linear_systems::{solve, solve_with, Solution, SolutionSet};
pub use real_matrix::gauss_jordan::{reduce, reduce_with_parameters};
pub use real_matrix::{GaussJordan, Matrix, SystemParameters, DEFAULT_TOLERANCE};
