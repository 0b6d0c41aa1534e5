//! Compare command implementation.
//!
//! Runs the three methods on one test function with their default settings
//! and prints the summaries side by side.

use std::io::Write;

use clap::Args;
use serde::Serialize;
use tracing::{debug, info};

use nonlin_math::prelude::*;

use crate::cli::{OutputFormat, RunOptions};
use crate::commands::{
    bisection::BisectionArgs, fixed_point::FixedPointArgs, newton::NewtonArgs, parse_function,
    require_derivative, require_phi,
};
use crate::error::CliResult;
use crate::output;
use crate::results::ResultStore;

/// Arguments for the compare command.
#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    /// Test function: sqrt2, cubic or transcendental
    #[arg(long, default_value = "sqrt2", value_parser = parse_function)]
    pub function: TestFunctionKind,
}

impl Default for CompareArgs {
    fn default() -> Self {
        Self {
            function: TestFunctionKind::Sqrt2,
        }
    }
}

#[derive(Serialize)]
struct CompareRow {
    method: &'static str,
    iterations: u32,
    converged: bool,
    final_value: f64,
}

impl From<&MethodSummary> for CompareRow {
    fn from(summary: &MethodSummary) -> Self {
        Self {
            method: summary.method.name(),
            iterations: summary.iterations,
            converged: summary.converged,
            final_value: summary.final_value,
        }
    }
}

/// Runs every method with its default settings on `kind`.
pub fn run_all(kind: TestFunctionKind) -> CliResult<ComparisonReport> {
    let tf = TestFunction::get(kind);
    let mut report = ComparisonReport::new();

    let bisect = BisectionArgs::default();
    let run = bisection(tf.f, tf.interval.0, tf.interval.1, bisect.epsilon)?;
    report.push(MethodSummary::from(&run));

    let fixed = FixedPointArgs::default();
    let config = SolverConfig::new(fixed.epsilon, fixed.max_iterations);
    let result = fixed_point(require_phi(tf)?, fixed.x0, &config)?;
    report.push(MethodSummary::from_iteration(Method::FixedPoint, &result));

    let newton = NewtonArgs::default();
    let config = SolverConfig::new(newton.epsilon, newton.max_iterations)
        .with_residual_tolerance(newton.residual_tolerance);
    let result = newton_raphson(tf.f, require_derivative(tf)?, newton.x0, &config)?;
    report.push(MethodSummary::from_iteration(Method::NewtonRaphson, &result));

    debug!(function = tf.name, "comparison finished");
    Ok(report)
}

/// Execute the compare command.
pub fn execute(
    args: &CompareArgs,
    options: &RunOptions,
    out: &mut dyn Write,
) -> CliResult<ComparisonReport> {
    let report = run_all(args.function)?;

    match options.format {
        OutputFormat::Table => {
            writeln!(out, "Root search for f(x) = {}", TestFunction::get(args.function).name)?;
            write!(out, "{}", report.render())?;
        }
        OutputFormat::Json => output::print_json(out, &report)?,
        OutputFormat::Csv => {
            let rows: Vec<CompareRow> = report.summaries().iter().map(CompareRow::from).collect();
            output::print_csv(out, &rows)?;
        }
    }

    if options.save {
        let mut store = ResultStore::open(&options.results_dir)?;
        store.record_all(&report);
        info!(methods = store.entries().len(), "recording comparison");
        let path = store.save()?;
        if options.format == OutputFormat::Table {
            output::print_success(out, &format!("Results saved to {}", path.display()))?;
        }
    }

    Ok(report)
}
