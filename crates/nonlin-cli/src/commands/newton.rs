//! Newton-Raphson command implementation.

use std::io::Write;

use clap::Args;
use tracing::debug;

use nonlin_math::prelude::*;
use nonlin_math::solvers::{DEFAULT_MAX_ITERATIONS, DEFAULT_RESIDUAL_TOLERANCE, DEFAULT_TOLERANCE};

use crate::cli::RunOptions;
use crate::commands::{parse_function, render_open_run, require_derivative};
use crate::error::CliResult;
use crate::output::KeyValue;

/// Arguments for the newton command.
#[derive(Args, Debug, Clone)]
pub struct NewtonArgs {
    /// Test function: sqrt2, cubic or transcendental
    #[arg(long, default_value = "sqrt2", value_parser = parse_function)]
    pub function: TestFunctionKind,

    /// Starting point
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub x0: f64,

    /// Step tolerance
    #[arg(short, long, default_value_t = DEFAULT_TOLERANCE)]
    pub epsilon: f64,

    /// Residual tolerance |f(x)|
    #[arg(long, default_value_t = DEFAULT_RESIDUAL_TOLERANCE)]
    pub residual_tolerance: f64,

    /// Give up after this many iterations
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: u32,
}

impl Default for NewtonArgs {
    fn default() -> Self {
        Self {
            function: TestFunctionKind::Sqrt2,
            x0: 1.0,
            epsilon: DEFAULT_TOLERANCE,
            residual_tolerance: DEFAULT_RESIDUAL_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Execute the newton command.
pub fn execute(
    args: &NewtonArgs,
    options: &RunOptions,
    out: &mut dyn Write,
) -> CliResult<MethodSummary> {
    let tf = TestFunction::get(args.function);
    let df = require_derivative(tf)?;
    debug!(function = tf.name, x0 = args.x0, "running Newton-Raphson");

    let config = SolverConfig::new(args.epsilon, args.max_iterations)
        .with_residual_tolerance(args.residual_tolerance);
    let result = newton_raphson(tf.f, df, args.x0, &config)?;

    let parameters = [
        KeyValue::new("Starting point", args.x0.to_string()),
        KeyValue::from_sci("Epsilon", args.epsilon),
        KeyValue::from_sci("Residual tolerance", args.residual_tolerance),
    ];
    render_open_run(out, options, Method::NewtonRaphson, tf, &parameters, &result)
}
