//! Fixed-point (successive approximations) iteration.

use log::{debug, trace};

use crate::error::{evaluate, MathResult};
use crate::solvers::{require_finite, IterationResult, SolverConfig, Termination};

/// Fixed-point iteration.
///
/// Uses the iteration:
/// `x_{n+1} = φ(x_n)`
///
/// and stops as soon as `|x_{n+1} - x_n| < tolerance`. Convergence depends
/// on `φ` being a contraction near the fixed point (`|φ'(x)| < 1`); when it
/// is not, the run ends with [`Termination::MaxIterationsReached`] after
/// `config.max_iterations` steps instead of looping forever.
///
/// # Arguments
///
/// * `phi` - The iteration function
/// * `x0` - Starting point for the iteration
/// * `config` - Solver configuration (`tolerance` and `max_iterations`)
///
/// # Errors
///
/// Invalid configuration or starting point, or `φ` returning NaN or
/// infinity (for Heron's iteration, `x_n = 0`).
///
/// # Example
///
/// ```rust
/// use nonlin_math::solvers::{fixed_point, SolverConfig};
///
/// let phi = |x: f64| x.cos();
///
/// let result = fixed_point(phi, 1.0, &SolverConfig::default()).unwrap();
/// assert!(result.converged());
/// assert!((result.root - result.root.cos()).abs() < 1e-9);
/// ```
pub fn fixed_point<P>(phi: P, x0: f64, config: &SolverConfig) -> MathResult<IterationResult>
where
    P: Fn(f64) -> f64,
{
    config.validate()?;
    require_finite("x0", x0)?;

    let mut x = x0;
    let mut sequence = vec![x0];
    let mut errors = Vec::new();

    for iteration in 0..config.max_iterations {
        let next = evaluate(&phi, "phi", x)?;
        let error = (next - x).abs();
        sequence.push(next);
        errors.push(error);
        trace!("fixed point step {}: x = {next}, |dx| = {error:.3e}", iteration + 1);

        if error < config.tolerance {
            debug!("fixed point converged after {} iterations", iteration + 1);
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
        "fixed point stopped after {} iterations without convergence",
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MathError;
    use approx::assert_relative_eq;

    fn heron(x: f64) -> f64 {
        0.5 * (x + 2.0 / x)
    }

    #[test]
    fn test_heron_sqrt_2() {
        let config = SolverConfig::default().with_tolerance(1e-6);

        let result = fixed_point(heron, 1.0, &config).unwrap();

        assert!(result.converged());
        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-5);
        assert!(result.iterations <= 5);
        assert_eq!(result.sequence.len(), result.iterations as usize + 1);
        assert_eq!(result.errors.len(), result.iterations as usize);
        assert_relative_eq!(result.sequence[1], 1.5);
    }

    #[test]
    fn test_zero_iterations_reports_non_convergence() {
        let config = SolverConfig::default().with_max_iterations(0);

        let result = fixed_point(heron, 1.0, &config).unwrap();

        assert!(!result.converged());
        assert_eq!(
            result.termination,
            Termination::MaxIterationsReached { max_iterations: 0 }
        );
        assert_eq!(result.iterations, 0);
        assert_eq!(result.sequence, vec![1.0]);
        assert!(result.errors.is_empty());
        assert_relative_eq!(result.root, 1.0);
    }

    #[test]
    fn test_non_contraction_hits_iteration_cap() {
        // |phi'| = 2 everywhere: iterates run away from the fixed point at 0
        let phi = |x: f64| 2.0 * x;
        let config = SolverConfig::new(1e-8, 20);

        let result = fixed_point(phi, 1.0, &config).unwrap();

        assert!(!result.converged());
        assert_eq!(result.iterations, 20);
        assert_eq!(result.sequence.len(), 21);
        assert_relative_eq!(result.root, 2f64.powi(20));
        assert_eq!(
            result.message(),
            "Maximum iterations (20) reached without convergence"
        );
    }

    #[test]
    fn test_domain_error_surfaces() {
        // Heron's iteration from 0 divides by zero
        let result = fixed_point(heron, 0.0, &SolverConfig::default());

        assert!(matches!(
            result,
            Err(MathError::DomainError { function: "phi", .. })
        ));
    }

    #[test]
    fn test_cosine_fixed_point() {
        let result = fixed_point(f64::cos, 0.5, &SolverConfig::default()).unwrap();

        assert!(result.converged());
        assert_relative_eq!(result.root, 0.739_085_133_215_160_7, epsilon = 1e-9);
        // Linear convergence needs many more steps than Heron
        assert!(result.iterations > 20);
    }

    #[test]
    fn test_rejects_invalid_configuration() {
        let config = SolverConfig::default().with_tolerance(0.0);

        assert!(matches!(
            fixed_point(heron, 1.0, &config),
            Err(MathError::InvalidInput { .. })
        ));
        assert!(fixed_point(heron, f64::NAN, &SolverConfig::default()).is_err());
    }
}
