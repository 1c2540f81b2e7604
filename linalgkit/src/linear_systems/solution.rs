use std::fmt;

/// Particular solution plus one basis vector per free variable.
#[derive(Debug, Clone, PartialEq)]
pub struct SolutionSet {
    pub particular: Vec<f64>,
    pub basis: Vec<Vec<f64>>,
}

impl SolutionSet {
    /// Evaluates `particular + sum(params[i] * basis[i])`.
    ///
    /// Missing parameters count as zero, extra ones are ignored.
    pub fn point(&self, params: &[f64]) -> Vec<f64> {
        let mut point = self.particular.clone();
        for (direction, t) in self.basis.iter().zip(params) {
            for (p, d) in point.iter_mut().zip(direction) {
                *p += t * d;
            }
        }
        point
    }
}

/// Outcome of classifying and solving `Ax = b`.
#[derive(Debug, Clone, PartialEq)]
pub enum Solution {
    /// Ranks of the augmented and coefficient matrices differ.
    Incompatible {
        augmented_rank: usize,
        coefficient_rank: usize,
    },
    Determined(Vec<f64>),
    /// Inhomogeneous system with free variables.
    Underdetermined(SolutionSet),
    /// Homogeneous system with free variables; the particular solution is zero
    /// and left out.
    HomogeneousUnderdetermined(Vec<Vec<f64>>),
}

impl Solution {
    pub fn is_compatible(&self) -> bool {
        !matches!(self, Self::Incompatible { .. })
    }

    /// Dimension of the solution space, `None` when there is no solution.
    pub fn free_variables(&self) -> Option<usize> {
        match self {
            Self::Incompatible { .. } => None,
            Self::Determined(_) => Some(0),
            Self::Underdetermined(set) => Some(set.basis.len()),
            Self::HomogeneousUnderdetermined(basis) => Some(basis.len()),
        }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Incompatible { .. } => write!(f, "Incompatible system: no solution"),
            Self::Determined(_) => write!(f, "Compatible determined system"),
            Self::Underdetermined(_) | Self::HomogeneousUnderdetermined(_) => {
                write!(f, "Compatible underdetermined system")
            }
        }
    }
}
