//! Newton-Raphson root-finding algorithm.

use log::{debug, trace};

use crate::error::{evaluate, MathError, MathResult};
use crate::solvers::{require_finite, IterationResult, SolverConfig, Termination};

/// Derivatives with magnitude below this stop the iteration.
pub const DERIVATIVE_FLOOR: f64 = 1e-14;

/// Newton-Raphson root-finding algorithm.
///
/// Uses the iteration:
/// `x_{n+1} = x_n - f(x_n) / f'(x_n)`
///
/// This method has quadratic convergence near the root but requires
/// the derivative of the function. A run converges only when both the step
/// `|x_{n+1} - x_n|` is below `config.tolerance` and the residual `|f(x_n)|`
/// is below `config.residual_tolerance`: small steps alone can occur near an
/// inflection point, small residuals alone near a multiple root.
///
/// A derivative below [`DERIVATIVE_FLOOR`] ends the run with
/// [`Termination::DerivativeDegenerate`] and the current iterate as the best
/// available root; the caller may retry from another starting point.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `df` - The derivative of the function
/// * `x0` - Starting point for the iteration
/// * `config` - Solver configuration
///
/// # Example
///
/// ```rust
/// use nonlin_math::solvers::{newton_raphson, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
///
/// let result = newton_raphson(f, df, 1.0, &SolverConfig::default()).unwrap();
/// assert!(result.converged());
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn newton_raphson<F, DF>(
    f: F,
    df: DF,
    x0: f64,
    config: &SolverConfig,
) -> MathResult<IterationResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    config.validate()?;
    require_finite("x0", x0)?;

    let mut x = x0;
    let mut sequence = vec![x0];
    let mut errors = Vec::new();

    for iteration in 0..config.max_iterations {
        let fx = evaluate(&f, "f", x)?;
        let dfx = evaluate(&df, "df", x)?;

        // Check for zero derivative
        if dfx.abs() < DERIVATIVE_FLOOR {
            debug!("newton: derivative {dfx:e} at x = {x} on iteration {iteration}");
            return Ok(IterationResult {
                root: x,
                iterations: iteration,
                termination: Termination::DerivativeDegenerate {
                    iteration,
                    derivative: dfx,
                },
                sequence,
                errors,
            });
        }

        // Newton step
        let next = x - fx / dfx;
        if !next.is_finite() {
            return Err(MathError::domain_error("f/df", x, next));
        }
        let error = (next - x).abs();
        sequence.push(next);
        errors.push(error);
        trace!(
            "newton step {}: x = {next}, |dx| = {error:.3e}, |f| = {:.3e}",
            iteration + 1,
            fx.abs()
        );

        if error < config.tolerance && fx.abs() < config.residual_tolerance {
            debug!("newton converged after {} iterations", iteration + 1);
            return Ok(IterationResult {
                root: next,
                iterations: iteration + 1,
                termination: Termination::Converged,
                sequence,
                errors,
            });
        }

        x = next;
    }

    debug!(
        "newton stopped after {} iterations without convergence",
        config.max_iterations
    );
    Ok(IterationResult {
        root: x,
        iterations: config.max_iterations,
        termination: Termination::MaxIterationsReached {
            max_iterations: config.max_iterations,
        },
        sequence,
        errors,
    })
}
