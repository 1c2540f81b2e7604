use super::matrix::Matrix;
use crate::error::{LinalgError, Result};

pub fn is_in_nullspace(u: &Matrix, v: &[f64], tolerance: f64) -> Result<bool> {
    // u v = 0 up to tolerance, componentwise
    Ok(u.mul_vec(v)?.iter().all(|x| x.abs() <= tolerance))
}

/// Checks `|u x - b|_inf <= tolerance`.
pub fn satisfies_system(u: &Matrix, x: &[f64], b: &[f64], tolerance: f64) -> Result<bool> {
    if b.len() != u.number_of_rows() {
        return Err(LinalgError::ShapeMismatch {
            what: "right-hand side length",
            expected: u.number_of_rows(),
            actual: b.len(),
        });
    }
    Ok(u
        .mul_vec(x)?
        .iter()
        .zip(b)
        .all(|(ux, b)| (ux - b).abs() <= tolerance))
}

/// Residual limit that grows with the entries involved:
/// `relative_tolerance * max(1, max|u| * max|x| + max|b|)`.
pub fn residual_bound(u: &Matrix, x: &[f64], b: &[f64], relative_tolerance: f64) -> f64 {
    let scale = max_abs(u.rows.iter().flatten()) * max_abs(x) + max_abs(b);
    relative_tolerance * scale.max(1.0)
}

fn max_abs<'a>(values: impl IntoIterator<Item = &'a f64>) -> f64 {
    values.into_iter().fold(0.0, |acc, v| acc.max(v.abs()))
}

/// Like [`satisfies_system`], with the limit taken from [`residual_bound`].
pub fn satisfies_system_scaled(
    u: &Matrix,
    x: &[f64],
    b: &[f64],
    relative_tolerance: f64,
) -> Result<bool> {
    satisfies_system(u, x, b, residual_bound(u, x, b, relative_tolerance))
}
