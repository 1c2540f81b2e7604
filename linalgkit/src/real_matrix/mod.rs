pub mod gauss_jordan;
pub mod matrix;
pub mod is_in_nullspace;

pub use gauss_jordan::{GaussJordan, SystemParameters, DEFAULT_TOLERANCE};
pub use matrix::{parse_vector, Matrix};
