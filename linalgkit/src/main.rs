use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use linalgkit::{
    check_linear_dependence_with,
    real_matrix::{is_in_nullspace::satisfies_system_scaled, parse_vector},
    report::{render_matrix, render_parameters, render_solution},
    solve_with, GaussJordan, Matrix, Solution, DEFAULT_TOLERANCE,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Entries with a smaller magnitude are treated as zero
    #[arg(short, long, global = true, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: f64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Reduce a matrix to row-echelon form
    Reduce {
        /// Rows separated by `;`, entries by `,`, e.g. "1,2;3,4"
        #[arg(short, long, allow_hyphen_values = true)]
        matrix: String,

        /// Read the last column as a right-hand side and print ranks
        #[arg(short, long)]
        parameters: bool,
    },
    /// Check whether a set of vectors is linearly dependent
    CheckDependence {
        /// One vector, e.g. "1,2,3"; repeat for each vector
        #[arg(short, long = "vector", required = true, allow_hyphen_values = true)]
        vectors: Vec<String>,
    },
    /// Solve a linear system, homogeneous when no right-hand side is given
    Solve {
        #[arg(short, long, allow_hyphen_values = true)]
        matrix: String,

        #[arg(short, long, allow_hyphen_values = true)]
        rhs: Option<String>,

        /// Check the residual of every returned vector
        #[arg(long)]
        verify: bool,

        /// Residual limit for --verify, relative to the size of the entries
        #[arg(long, default_value_t = 1e-9)]
        residual_tolerance: f64,
    },
}

fn run_reduce(reducer: &GaussJordan, matrix: &str, parameters: bool) -> Result<()> {
    let m: Matrix = matrix.parse().context("parsing matrix")?;
    let (reduced, system_parameters) = reducer.reduce_with_parameters(&m);
    println!("{}", render_matrix(&reduced));
    if parameters {
        println!("{}", render_parameters(&system_parameters));
    }
    Ok(())
}

fn run_check_dependence(reducer: &GaussJordan, vectors: &[String]) -> Result<()> {
    let vectors = vectors
        .iter()
        .map(|v| parse_vector(v).with_context(|| format!("parsing vector `{v}`")))
        .collect::<Result<Vec<_>>>()?;
    let dependence =
        check_linear_dependence_with(reducer, &vectors).context("checking linear dependence")?;
    println!("{dependence}");
    Ok(())
}

fn run_solve(
    reducer: &GaussJordan,
    matrix: &str,
    rhs: Option<&str>,
    residual_tolerance: Option<f64>,
) -> Result<()> {
    let m: Matrix = matrix.parse().context("parsing coefficient matrix")?;
    let rhs = rhs
        .map(parse_vector)
        .transpose()
        .context("parsing right-hand side")?;
    let solution = solve_with(reducer, &m, rhs.as_deref()).context("solving system")?;
    println!("{}", render_solution(&solution));
    if let Some(residual_tolerance) = residual_tolerance {
        let check = |x: &[f64], b: &[f64]| satisfies_system_scaled(&m, x, b, residual_tolerance);
        let zeros = vec![0.0; m.number_of_rows()];
        let b = rhs.as_deref().unwrap_or(&zeros[..]);
        let checks = match &solution {
            Solution::Incompatible { .. } => vec![],
            Solution::Determined(x) => vec![check(x, b)?],
            Solution::Underdetermined(set) => std::iter::once(check(&set.particular, b))
                .chain(set.basis.iter().map(|v| check(v, &zeros)))
                .collect::<linalgkit::Result<Vec<_>>>()?,
            Solution::HomogeneousUnderdetermined(basis) => basis
                .iter()
                .map(|v| check(v, &zeros))
                .collect::<linalgkit::Result<Vec<_>>>()?,
        };
        let verified = checks.iter().all(|ok| *ok);
        log::debug!("residual checks: {checks:?}");
        println!("verified: {verified}");
    }
    Ok(())
}

fn run(args: Args) -> Result<()> {
    let reducer = GaussJordan::with_tolerance(args.tolerance).context("configuring reducer")?;
    match args.command {
        Command::Reduce { matrix, parameters } => run_reduce(&reducer, &matrix, parameters),
        Command::CheckDependence { vectors } => run_check_dependence(&reducer, &vectors),
        Command::Solve {
            matrix,
            rhs,
            verify,
            residual_tolerance,
        } => run_solve(
            &reducer,
            &matrix,
            rhs.as_deref(),
            verify.then_some(residual_tolerance),
        ),
    }
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    log::debug!("Running with: {args:?}");
    if let Err(err) = run(args) {
        eprintln!("error: {err:?}");
        process::exit(1)
    }
}
