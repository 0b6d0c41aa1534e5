//! Bisection command implementation.
//!
//! Narrows a sign-changing bracket of the selected test function.

use std::io::Write;

use clap::Args;
use tracing::debug;

use nonlin_math::prelude::*;

use crate::cli::RunOptions;
use crate::commands::{parse_function, render_bisection_run};
use crate::error::CliResult;
use crate::output::KeyValue;

/// Bracket width the menu run stops at.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Arguments for the bisection command.
#[derive(Args, Debug, Clone)]
pub struct BisectionArgs {
    /// Test function: sqrt2, cubic or transcendental
    #[arg(long, default_value = "sqrt2", value_parser = parse_function)]
    pub function: TestFunctionKind,

    /// Lower end of the bracket. Defaults to the function's interval.
    #[arg(short, allow_negative_numbers = true)]
    pub a: Option<f64>,

    /// Upper end of the bracket. Defaults to the function's interval.
    #[arg(short, allow_negative_numbers = true)]
    pub b: Option<f64>,

    /// Stop once the bracket is narrower than this
    #[arg(short, long, default_value_t = DEFAULT_EPSILON)]
    pub epsilon: f64,
}

impl Default for BisectionArgs {
    fn default() -> Self {
        Self {
            function: TestFunctionKind::Sqrt2,
            a: None,
            b: None,
            epsilon: DEFAULT_EPSILON,
        }
    }
}

/// Execute the bisection command.
pub fn execute(
    args: &BisectionArgs,
    options: &RunOptions,
    out: &mut dyn Write,
) -> CliResult<MethodSummary> {
    let tf = TestFunction::get(args.function);
    let a = args.a.unwrap_or(tf.interval.0);
    let b = args.b.unwrap_or(tf.interval.1);
    debug!(function = tf.name, a, b, epsilon = args.epsilon, "running bisection");

    let run = bisection(tf.f, a, b, args.epsilon)?;

    let parameters = [
        KeyValue::new("Interval", format!("[{a}, {b}]")),
        KeyValue::from_sci("Epsilon", args.epsilon),
    ];
    render_bisection_run(out, options, tf, &parameters, args.epsilon, &run)
}
