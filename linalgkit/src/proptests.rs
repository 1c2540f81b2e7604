//! Property-based tests for reduction, dependence checks and solving.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::real_matrix::is_in_nullspace::{is_in_nullspace, satisfies_system};
    use crate::{
        check_linear_dependence, check_linear_dependence_with, solve_with, Dependence,
        GaussJordan, Matrix, Solution,
    };

    fn small_entry() -> impl Strategy<Value = f64> {
        (-5i32..=5).prop_map(f64::from)
    }

    fn small_matrix() -> impl Strategy<Value = Matrix> {
        (1usize..=5, 1usize..=5).prop_flat_map(|(rows, cols)| {
            prop::collection::vec(prop::collection::vec(small_entry(), cols), rows)
                .prop_map(|rows| Matrix::from_rows(rows).unwrap())
        })
    }

    // strictly diagonally dominant, hence invertible
    fn invertible_system() -> impl Strategy<Value = (Matrix, Vec<f64>)> {
        (1usize..=5).prop_flat_map(|n| {
            (
                prop::collection::vec(prop::collection::vec(small_entry(), n), n),
                prop::collection::vec(small_entry(), n),
            )
                .prop_map(move |(mut rows, rhs)| {
                    for (i, row) in rows.iter_mut().enumerate() {
                        row[i] = row.iter().map(|v| v.abs()).sum::<f64>() + 1.0;
                    }
                    (Matrix::from_rows(rows).unwrap(), rhs)
                })
        })
    }

    fn fractional_matrix() -> impl Strategy<Value = Matrix> {
        (1usize..=6, 1usize..=6).prop_flat_map(|(rows, cols)| {
            let entry = prop_oneof![Just(0.0), -3.0f64..3.0];
            prop::collection::vec(prop::collection::vec(entry, cols), rows)
                .prop_map(|rows| Matrix::from_rows(rows).unwrap())
        })
    }

    fn loose() -> GaussJordan {
        GaussJordan::with_tolerance(1e-9).unwrap()
    }

    proptest! {
        #[test]
        fn reduction_is_idempotent(m in small_matrix()) {
            let reducer = GaussJordan::default();
            let once = reducer.reduce(&m);
            let twice = reducer.reduce(&once);
            prop_assert_eq!(once.number_of_columns, twice.number_of_columns);
            for (a, b) in once.rows.iter().flatten().zip(twice.rows.iter().flatten()) {
                prop_assert!((a - b).abs() <= 1e-9, "{} != {}", a, b);
            }
        }

        #[test]
        fn reduction_yields_row_echelon_form(m in fractional_matrix()) {
            let reducer = GaussJordan::default();
            let reduced = reducer.reduce(&m);
            prop_assert_eq!(reduced.number_of_rows(), m.number_of_rows());
            prop_assert_eq!(reduced.number_of_columns, m.number_of_columns);

            for v in reduced.rows.iter().flatten() {
                prop_assert!(*v == 0.0 || v.abs() >= reducer.tolerance(), "leftover noise {}", v);
            }

            let leads = reduced
                .rows
                .iter()
                .map(|row| row.iter().position(|v| *v != 0.0))
                .collect::<Vec<_>>();
            let rank = leads.iter().take_while(|lead| lead.is_some()).count();
            // zero rows only at the bottom
            prop_assert!(leads[rank..].iter().all(Option::is_none));
            prop_assert_eq!(rank, reducer.rank(&m));

            let pivots = leads.iter().flatten().copied().collect::<Vec<_>>();
            for (row, &pivot) in pivots.iter().enumerate() {
                prop_assert_eq!(reduced.get(row, pivot), 1.0);
                for other in (0..reduced.number_of_rows()).filter(|&r| r != row) {
                    prop_assert_eq!(reduced.get(other, pivot), 0.0);
                }
            }
            prop_assert!(pivots.windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn invertible_systems_are_determined((m, rhs) in invertible_system()) {
            let solution = solve_with(&loose(), &m, Some(&rhs[..])).unwrap();
            match solution {
                Solution::Determined(x) => {
                    prop_assert!(satisfies_system(&m, &x, &rhs, 1e-8).unwrap());
                }
                other => prop_assert!(false, "expected a determined system, got {:?}", other),
            }
        }

        #[test]
        fn standard_basis_is_independent(n in 1usize..=6) {
            let vectors = (0..n)
                .map(|i| (0..n).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
                .collect::<Vec<Vec<f64>>>();
            prop_assert_eq!(check_linear_dependence(&vectors), Ok(Dependence::Independent));
        }

        #[test]
        fn linear_combination_is_dependent(
            (vectors, coefficients) in (1usize..=4, 1usize..=5).prop_flat_map(|(k, dim)| (
                prop::collection::vec(prop::collection::vec(small_entry(), dim), k),
                prop::collection::vec(small_entry(), k),
            ))
        ) {
            let dim = vectors[0].len();
            let combination = (0..dim)
                .map(|i| vectors.iter().zip(&coefficients).map(|(v, c)| v[i] * c).sum())
                .collect::<Vec<f64>>();
            let mut set = vectors.clone();
            set.push(combination);
            prop_assert_eq!(
                check_linear_dependence_with(&loose(), &set),
                Ok(Dependence::Dependent)
            );
        }

        #[test]
        fn homogeneous_basis_spans_the_nullspace(m in small_matrix()) {
            let reducer = loose();
            let solution = solve_with(&reducer, &m, None).unwrap();
            let rank = reducer.rank(&m);
            let unknowns = m.number_of_columns;
            match solution {
                Solution::HomogeneousUnderdetermined(basis) => {
                    prop_assert_eq!(basis.len(), unknowns - rank);
                    for v in &basis {
                        prop_assert!(is_in_nullspace(&m, v, 1e-8).unwrap());
                    }
                }
                Solution::Determined(x) => {
                    prop_assert_eq!(rank, unknowns);
                    prop_assert!(x.iter().all(|v| *v == 0.0));
                }
                other => prop_assert!(false, "homogeneous systems are compatible, got {:?}", other),
            }
        }
    }
}
