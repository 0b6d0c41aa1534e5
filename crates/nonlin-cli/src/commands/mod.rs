//! CLI command implementations.

pub mod bisection;
pub mod compare;
pub mod fixed_point;
pub mod menu;
pub mod newton;

// Re-export submodules for convenience
pub use bisection::BisectionArgs;
pub use compare::CompareArgs;
pub use fixed_point::FixedPointArgs;
pub use newton::NewtonArgs;

use std::io::Write;

use serde::Serialize;
use tabled::Tabled;

use nonlin_math::prelude::*;

use crate::cli::{OutputFormat, RunOptions};
use crate::error::{CliError, CliResult};
use crate::output::{self, print_header, KeyValue};
use crate::results::ResultStore;

/// Parses a test-function name for clap.
pub fn parse_function(s: &str) -> Result<TestFunctionKind, String> {
    s.parse().map_err(|e: MathError| e.to_string())
}

/// Returns the derivative of `tf` or an error naming what is missing.
pub fn require_derivative(tf: &TestFunction) -> CliResult<fn(f64) -> f64> {
    tf.df.ok_or(CliError::MissingForm {
        function: tf.name,
        form: "derivative",
    })
}

/// Returns the fixed-point form of `tf` or an error naming what is missing.
pub fn require_phi(tf: &TestFunction) -> CliResult<fn(f64) -> f64> {
    tf.phi.ok_or(CliError::MissingForm {
        function: tf.name,
        form: "fixed-point function",
    })
}

/// One iterate of an open method, as written to CSV.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TracePoint {
    /// Iteration index, 0 for the starting point.
    pub n: usize,
    /// The iterate.
    pub x: f64,
    /// `|x_n - x_(n-1)|`, absent for the starting point.
    pub step: Option<f64>,
}

/// Pairs every iterate with the step that produced it.
pub fn trace_points(sequence: &[f64]) -> Vec<TracePoint> {
    sequence
        .iter()
        .enumerate()
        .map(|(n, &x)| TracePoint {
            n,
            x,
            step: n.checked_sub(1).map(|prev| (x - sequence[prev]).abs()),
        })
        .collect()
}

#[derive(Tabled)]
struct TraceRow {
    #[tabled(rename = "n")]
    n: usize,
    #[tabled(rename = "x_n")]
    x: String,
    #[tabled(rename = "|x_n - x_(n-1)|")]
    step: String,
}

impl From<&TracePoint> for TraceRow {
    fn from(point: &TracePoint) -> Self {
        Self {
            n: point.n,
            x: format!("{:.15}", point.x),
            step: point.step.map_or_else(String::new, |s| format!("{s:.3e}")),
        }
    }
}

/// JSON shape of a single run.
#[derive(Serialize)]
struct RunOutput<'a, T: Serialize> {
    method: &'static str,
    function: &'static str,
    converged: bool,
    message: String,
    result: &'a T,
    analysis: Option<ConvergenceReport>,
}

/// Prints a fixed-point or Newton-Raphson run and returns its summary.
pub(crate) fn render_open_run(
    out: &mut dyn Write,
    options: &RunOptions,
    method: Method,
    tf: &TestFunction,
    parameters: &[KeyValue],
    result: &IterationResult,
) -> CliResult<MethodSummary> {
    let report = analyze(&result.sequence, tf.exact_root)?;

    match options.format {
        OutputFormat::Json => output::print_json(
            out,
            &RunOutput {
                method: method.name(),
                function: tf.name,
                converged: result.converged(),
                message: result.message(),
                result,
                analysis: Some(report),
            },
        )?,
        OutputFormat::Csv => output::print_csv(out, &trace_points(&result.sequence))?,
        OutputFormat::Table => {
            print_header(out, &method_title(method))?;
            writeln!(out, "Root search for f(x) = {}", tf.name)?;
            output::print_table(out, parameters)?;

            let mut rows = vec![KeyValue::from_fixed(
                "Approximate solution",
                result.root,
                10,
            )];
            push_exact_rows(&mut rows, tf, result.root);
            rows.push(KeyValue::new("Iterations", result.iterations.to_string()));
            rows.push(KeyValue::new("Status", result.message()));
            rows.push(order_row(method));
            if let Some(order) = report.estimated_order {
                rows.push(KeyValue::from_fixed("Estimated order", order, 2));
            }
            if let Some(rate) = report.convergence_rate {
                rows.push(KeyValue::from_sci("Last error ratio", rate));
            }
            writeln!(out, "{:-^70}", "Results")?;
            output::print_table(out, &rows)?;

            if !result.converged() {
                output::print_warning(out, &result.message())?;
            }
            if options.trace {
                let rows: Vec<TraceRow> = trace_points(&result.sequence)
                    .iter()
                    .map(TraceRow::from)
                    .collect();
                output::print_table(out, &rows)?;
            }
        }
    }

    let summary = MethodSummary::from_iteration(method, result);
    persist(out, options, &summary)?;
    Ok(summary)
}

/// Prints a bisection run and returns its summary.
pub(crate) fn render_bisection_run(
    out: &mut dyn Write,
    options: &RunOptions,
    tf: &TestFunction,
    parameters: &[KeyValue],
    epsilon: f64,
    run: &BisectionRun,
) -> CliResult<MethodSummary> {
    match options.format {
        OutputFormat::Json => output::print_json(
            out,
            &RunOutput {
                method: Method::Bisection.name(),
                function: tf.name,
                converged: true,
                message: format!("Bracket narrowed to {:.2e}", run.width()),
                result: run,
                analysis: None,
            },
        )?,
        OutputFormat::Csv => output::print_csv(out, &run.history)?,
        OutputFormat::Table => {
            print_header(out, &method_title(Method::Bisection))?;
            writeln!(out, "Root search for f(x) = {}", tf.name)?;
            output::print_table(out, parameters)?;

            let mut rows = vec![KeyValue::from_fixed("Approximate solution", run.root, 10)];
            push_exact_rows(&mut rows, tf, run.root);
            rows.push(KeyValue::new("Iterations", run.iterations.to_string()));
            rows.push(KeyValue::from_sci("Final bracket width", run.width()));
            rows.push(order_row(Method::Bisection));
            writeln!(out, "{:-^70}", "Results")?;
            output::print_table(out, &rows)?;

            if run.width() > epsilon {
                output::print_warning(
                    out,
                    "Bracket could not be split below epsilon at this precision",
                )?;
            }
            if options.trace {
                let rows: Vec<KeyValue> = run
                    .history
                    .iter()
                    .enumerate()
                    .map(|(i, step)| {
                        KeyValue::new(
                            format!("{} (m = {:.12})", i + 1, step.midpoint),
                            format!("[{:.12}, {:.12}]", step.a, step.b),
                        )
                    })
                    .collect();
                output::print_table(out, &rows)?;
            }
        }
    }

    let summary = MethodSummary::from(run);
    persist(out, options, &summary)?;
    Ok(summary)
}

fn method_title(method: Method) -> String {
    match method {
        Method::Bisection => "BISECTION METHOD".to_string(),
        Method::FixedPoint => "SUCCESSIVE APPROXIMATIONS METHOD".to_string(),
        Method::NewtonRaphson => "NEWTON-RAPHSON METHOD".to_string(),
    }
}

fn push_exact_rows(rows: &mut Vec<KeyValue>, tf: &TestFunction, root: f64) {
    if let Some(exact) = tf.exact_root {
        rows.push(KeyValue::from_fixed("Exact value", exact, 10));
        rows.push(KeyValue::from_sci("Absolute error", (root - exact).abs()));
    }
}

fn order_row(method: Method) -> KeyValue {
    let label = match method.theoretical_order() {
        1 => "Linear (order 1)",
        2 => "Quadratic (order 2)",
        _ => "Unknown",
    };
    KeyValue::new("Convergence", label)
}

/// Records `summary` in the results directory when `--save` is set.
pub(crate) fn persist(
    out: &mut dyn Write,
    options: &RunOptions,
    summary: &MethodSummary,
) -> CliResult<()> {
    if !options.save {
        return Ok(());
    }
    let mut store = ResultStore::open(&options.results_dir)?;
    store.record(summary);
    let path = store.save()?;
    if options.format == OutputFormat::Table {
        output::print_success(out, &format!("Results saved to {}", path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_function() {
        assert_eq!(parse_function("cubic"), Ok(TestFunctionKind::Cubic));
        assert!(parse_function("quartic").unwrap_err().contains("quartic"));
    }

    #[test]
    fn test_trace_points() {
        let points = trace_points(&[1.0, 1.5, 1.25]);

        assert_eq!(points.len(), 3);
        assert_eq!(points[0].step, None);
        assert_relative_eq!(points[1].step.unwrap(), 0.5);
        assert_relative_eq!(points[2].step.unwrap(), 0.25);
        assert_eq!(points[2].n, 2);
    }

    #[test]
    fn test_render_open_run_table() {
        let tf = TestFunction::get(TestFunctionKind::Sqrt2);
        let result =
            newton_raphson(tf.f, tf.df.unwrap(), 1.0, &SolverConfig::default()).unwrap();
        let options = RunOptions {
            trace: true,
            ..RunOptions::default()
        };

        let mut buf = Vec::new();
        let summary =
            render_open_run(&mut buf, &options, Method::NewtonRaphson, tf, &[], &result).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(summary.converged);
        assert!(text.contains("NEWTON-RAPHSON METHOD"));
        assert!(text.contains("1.4142135624"));
        assert!(text.contains("Converged successfully"));
        assert!(text.contains("Quadratic (order 2)"));
        assert!(text.contains("x_n"));
    }

    #[test]
    fn test_render_open_run_json() {
        let tf = TestFunction::get(TestFunctionKind::Sqrt2);
        let config = SolverConfig::default().with_max_iterations(2);
        let result = newton_raphson(tf.f, tf.df.unwrap(), 1.0, &config).unwrap();
        let options = RunOptions {
            format: OutputFormat::Json,
            ..RunOptions::default()
        };

        let mut buf = Vec::new();
        render_open_run(&mut buf, &options, Method::NewtonRaphson, tf, &[], &result).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(json["converged"], false);
        assert_eq!(json["result"]["iterations"], 2);
        assert_eq!(
            json["result"]["termination"]["status"],
            "max_iterations_reached"
        );
        assert_eq!(
            json["analysis"]["absolute_errors"].as_array().unwrap().len(),
            3
        );
    }

    #[test]
    fn test_render_bisection_csv() {
        let tf = TestFunction::get(TestFunctionKind::Sqrt2);
        let run = bisection(tf.f, 0.0, 2.0, 0.25).unwrap();
        let options = RunOptions {
            format: OutputFormat::Csv,
            ..RunOptions::default()
        };

        let mut buf = Vec::new();
        render_bisection_run(&mut buf, &options, tf, &[], 0.25, &run).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("a,b,midpoint"));
        assert_eq!(lines.next(), Some("1.0,2.0,1.0"));
        assert_eq!(text.lines().count(), 4);
    }
}
