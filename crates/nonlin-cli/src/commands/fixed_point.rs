//! Successive approximations command implementation.

use std::io::Write;

use clap::Args;
use tracing::debug;

use nonlin_math::prelude::*;
use nonlin_math::solvers::DEFAULT_MAX_ITERATIONS;

use crate::cli::RunOptions;
use crate::commands::{parse_function, render_open_run, require_phi};
use crate::error::CliResult;
use crate::output::KeyValue;

/// Step size the menu run stops at.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Arguments for the fixed-point command.
#[derive(Args, Debug, Clone)]
pub struct FixedPointArgs {
    /// Test function: sqrt2, cubic or transcendental
    #[arg(long, default_value = "sqrt2", value_parser = parse_function)]
    pub function: TestFunctionKind,

    /// Starting point
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub x0: f64,

    /// Stop once |x_n - x_(n-1)| is below this
    #[arg(short, long, default_value_t = DEFAULT_EPSILON)]
    pub epsilon: f64,

    /// Give up after this many iterations
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: u32,
}

impl Default for FixedPointArgs {
    fn default() -> Self {
        Self {
            function: TestFunctionKind::Sqrt2,
            x0: 1.0,
            epsilon: DEFAULT_EPSILON,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Execute the fixed-point command.
pub fn execute(
    args: &FixedPointArgs,
    options: &RunOptions,
    out: &mut dyn Write,
) -> CliResult<MethodSummary> {
    let tf = TestFunction::get(args.function);
    let phi = require_phi(tf)?;
    debug!(function = tf.name, phi = tf.phi_name, x0 = args.x0, "running fixed-point iteration");

    let config = SolverConfig::new(args.epsilon, args.max_iterations);
    let result = fixed_point(phi, args.x0, &config)?;

    let parameters = [
        KeyValue::new("Iteration function", format!("phi(x) = {}", tf.phi_name)),
        KeyValue::new("Starting point", args.x0.to_string()),
        KeyValue::from_sci("Epsilon", args.epsilon),
    ];
    render_open_run(out, options, Method::FixedPoint, tf, &parameters, &result)
}
