use itertools::Itertools;

use crate::{
    linear_systems::Solution,
    real_matrix::{Matrix, SystemParameters},
};

pub fn render_vector(v: &[f64]) -> String {
    // -0 prints as "-0"
    let clean = |x: f64| if x == 0.0 { 0.0 } else { x };
    format!("[{}]", v.iter().map(|x| format!("{}", clean(*x))).join(", "))
}

pub fn render_matrix(m: &Matrix) -> String {
    m.rows.iter().map(|row| render_vector(row)).join("\n")
}

pub fn render_parameters(p: &SystemParameters) -> String {
    format!(
        "unknowns: {}\naugmented rank: {}\ncoefficient rank: {}",
        p.unknowns, p.augmented_rank, p.coefficient_rank
    )
}

/// Announcement line followed by the vectors of the solution, if any.
pub fn render_solution(solution: &Solution) -> String {
    let mut lines = vec![solution.to_string()];
    match solution {
        Solution::Incompatible { .. } => {}
        Solution::Determined(particular) => {
            lines.push(format!("solution: {}", render_vector(particular)));
        }
        Solution::Underdetermined(set) => {
            lines.push(format!("particular: {}", render_vector(&set.particular)));
            lines.extend(set.basis.iter().map(|v| format!("basis: {}", render_vector(v))));
        }
        Solution::HomogeneousUnderdetermined(basis) => {
            lines.extend(basis.iter().map(|v| format!("basis: {}", render_vector(v))));
        }
    }
    lines.join("\n")
}
