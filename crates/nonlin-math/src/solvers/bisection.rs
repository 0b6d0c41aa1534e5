//! Bisection (dichotomy) root-finding algorithm.

use log::{debug, trace, warn};
use serde::Serialize;

use crate::error::{evaluate, MathError, MathResult};
use crate::solvers::{require_finite, require_positive};

/// One halving step: the bracket after the update and the midpoint tested.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BisectionStep {
    /// Lower bound after the step.
    pub a: f64,
    /// Upper bound after the step.
    pub b: f64,
    /// Midpoint evaluated during the step.
    pub midpoint: f64,
}

/// Result of a bisection run.
///
/// There is no convergence flag: on a valid bracket the interval halves
/// every step, so a returned run has always narrowed to epsilon (or to the
/// floating-point resolution around the root).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BisectionRun {
    /// Midpoint of the final bracket.
    pub root: f64,
    /// Number of halving steps.
    pub iterations: u32,
    /// Final bracket `(lo, hi)`.
    pub bracket: (f64, f64),
    /// One entry per step.
    pub history: Vec<BisectionStep>,
}

impl BisectionRun {
    /// Width of the final bracket.
    pub fn width(&self) -> f64 {
        self.bracket.1 - self.bracket.0
    }

    /// Midpoints in the order they were tested.
    pub fn midpoints(&self) -> Vec<f64> {
        self.history.iter().map(|step| step.midpoint).collect()
    }

    fn exact(root: f64) -> Self {
        Self {
            root,
            iterations: 0,
            bracket: (root, root),
            history: Vec::new(),
        }
    }
}

/// `true` when `x` and `y` are both non-zero and of opposite sign.
#[inline]
fn strictly_opposite(x: f64, y: f64) -> bool {
    (x < 0.0 && y > 0.0) || (x > 0.0 && y < 0.0)
}

/// Bisection root-finding algorithm.
///
/// Repeatedly tests the midpoint `m` of `[a, b]`: if `f(m)` and `f(a)` have
/// strictly opposite signs the right half is discarded, otherwise the left
/// half. Stops once `b - a <= epsilon` and returns the midpoint of the final
/// bracket.
///
/// Requires: `f(a)` and `f(b)` must not have the same strict sign (one of
/// them may be exactly zero)
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `a` - One end of the bracket
/// * `b` - The other end of the bracket
/// * `epsilon` - Target bracket width, must be positive
///
/// # Errors
///
/// [`MathError::InvalidInput`] for a non-positive epsilon or a degenerate
/// bracket, [`MathError::InvalidBracket`] when both endpoints have the same
/// sign, and [`MathError::DomainError`] when `f` returns NaN or infinity.
///
/// # Example
///
/// ```rust
/// use nonlin_math::solvers::bisection;
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
///
/// let run = bisection(f, 0.0, 2.0, 1e-6).unwrap();
/// assert!((run.root - std::f64::consts::SQRT_2).abs() < 1e-6);
/// assert_eq!(run.iterations, 21);
/// ```
pub fn bisection<F>(f: F, a: f64, b: f64, epsilon: f64) -> MathResult<BisectionRun>
where
    F: Fn(f64) -> f64,
{
    require_positive("epsilon", epsilon)?;
    require_finite("a", a)?;
    require_finite("b", b)?;
    if a == b {
        return Err(MathError::invalid_input(format!(
            "bracket [{a}, {b}] is empty"
        )));
    }

    let mut lo = a.min(b);
    let mut hi = a.max(b);

    let mut f_lo = evaluate(&f, "f", lo)?;
    let f_hi = evaluate(&f, "f", hi)?;

    // Handle case where endpoint is the root
    if f_lo == 0.0 {
        debug!("bisection: lower endpoint {lo} is an exact root");
        return Ok(BisectionRun::exact(lo));
    }
    if f_hi == 0.0 {
        debug!("bisection: upper endpoint {hi} is an exact root");
        return Ok(BisectionRun::exact(hi));
    }

    // Signs, not the product: f(lo) * f(hi) underflows for tiny values
    if !strictly_opposite(f_lo, f_hi) {
        return Err(MathError::InvalidBracket {
            a: lo,
            b: hi,
            fa: f_lo,
            fb: f_hi,
        });
    }

    let mut history = Vec::new();

    while hi - lo > epsilon {
        let mid = (lo + hi) / 2.0;
        if mid <= lo || mid >= hi {
            warn!(
                "bisection: bracket [{lo}, {hi}] cannot be split further, width {} > epsilon {epsilon}",
                hi - lo
            );
            break;
        }
        let f_mid = evaluate(&f, "f", mid)?;

        if f_mid == 0.0 {
            lo = mid;
            hi = mid;
        } else if strictly_opposite(f_mid, f_lo) {
            hi = mid;
        } else {
            lo = mid;
            f_lo = f_mid;
        }

        history.push(BisectionStep {
            a: lo,
            b: hi,
            midpoint: mid,
        });
        trace!("bisection step {}: [{lo}, {hi}]", history.len());
    }

    let run = BisectionRun {
        root: (lo + hi) / 2.0,
        iterations: u32::try_from(history.len()).unwrap_or(u32::MAX),
        bracket: (lo, hi),
        history,
    };
    debug!(
        "bisection finished after {} iterations: root {}, width {:.2e}",
        run.iterations,
        run.root,
        run.width()
    );
    Ok(run)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sqrt_2() {
        let f = |x: f64| x * x - 2.0;

        let run = bisection(f, 0.0, 2.0, 1e-6).unwrap();

        assert_relative_eq!(run.root, std::f64::consts::SQRT_2, epsilon = 1e-6);
        assert_eq!(run.iterations, 21);
        assert_eq!(run.history.len(), 21);
        assert!(run.width() <= 1e-6);
    }

    #[test]
    fn test_history_records_bracket_after_each_step() {
        let f = |x: f64| x * x - 2.0;

        let run = bisection(f, 0.0, 2.0, 0.25).unwrap();

        // m = 1: f(1) < 0 like f(0), keep right half
        // m = 1.5: f(1.5) > 0, keep left half
        // m = 1.25: f(1.25) < 0, keep right half
        assert_eq!(
            run.history,
            vec![
                BisectionStep { a: 1.0, b: 2.0, midpoint: 1.0 },
                BisectionStep { a: 1.0, b: 1.5, midpoint: 1.5 },
                BisectionStep { a: 1.25, b: 1.5, midpoint: 1.25 },
            ]
        );
        assert_relative_eq!(run.root, 1.375);
        assert_eq!(run.midpoints(), vec![1.0, 1.5, 1.25]);
    }

    #[test]
    fn test_reversed_bracket() {
        let f = |x: f64| x * x - 2.0;

        // Reversed bracket should still work
        let run = bisection(f, 2.0, 0.0, 1e-10).unwrap();

        assert_relative_eq!(run.root, std::f64::consts::SQRT_2, epsilon = 1e-10);
    }

    #[test]
    fn test_invalid_bracket() {
        let f = |x: f64| x * x - 2.0;

        // Both endpoints have same sign
        let result = bisection(f, 2.0, 3.0, 1e-6);

        assert!(matches!(result, Err(MathError::InvalidBracket { .. })));
    }

    #[test]
    fn test_same_sign_tiny_values_rejected() {
        let result = bisection(|x| 1e-200 * (x * x + 1.0), 0.0, 1.0, 1e-6);
        assert!(matches!(result, Err(MathError::InvalidBracket { .. })));

        let result = bisection(|x| -1e-200 * (x * x + 1.0), -1.0, 1.0, 1e-6);
        assert!(matches!(result, Err(MathError::InvalidBracket { .. })));
    }

    #[test]
    fn test_opposite_tiny_values_accepted() {
        let run = bisection(|x| 1e-200 * (x - 0.25), 0.0, 1.0, 1e-6).unwrap();
        assert!((run.root - 0.25).abs() <= 1e-6);
    }

    #[test]
    fn test_rejects_non_positive_epsilon() {
        let f = |x: f64| x - 1.0;

        assert!(matches!(
            bisection(f, 0.0, 2.0, 0.0),
            Err(MathError::InvalidInput { .. })
        ));
        assert!(matches!(
            bisection(f, 0.0, 2.0, -1e-3),
            Err(MathError::InvalidInput { .. })
        ));
        assert!(matches!(
            bisection(f, 1.0, 1.0, 1e-3),
            Err(MathError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_root_at_endpoint() {
        let f = |x: f64| x - 1.0;

        let run = bisection(f, 0.0, 1.0, 1e-10).unwrap();

        assert_relative_eq!(run.root, 1.0);
        assert_eq!(run.iterations, 0);
        assert!(run.history.is_empty());
    }

    #[test]
    fn test_exact_root_at_midpoint() {
        let f = |x: f64| x - 1.0;

        let run = bisection(f, 0.0, 2.0, 1e-10).unwrap();

        assert_relative_eq!(run.root, 1.0);
        assert_eq!(run.iterations, 1);
        assert_relative_eq!(run.width(), 0.0);
    }

    #[test]
    fn test_negative_root() {
        let f = |x: f64| x + 1.0;

        let run = bisection(f, -2.5, 0.0, 1e-10).unwrap();

        assert_relative_eq!(run.root, -1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_residual_bounded_by_epsilon() {
        let f = |x: f64| x * x * x - x - 2.0;

        // |f'| <= 11 on [1, 2] and the root is within epsilon / 2 of the midpoint
        for eps in [1e-2, 1e-4, 1e-6, 1e-8] {
            let run = bisection(f, 1.0, 2.0, eps).unwrap();
            assert!(run.width() <= eps);
            assert!(f(run.root).abs() <= 11.0 * eps / 2.0);
        }
    }

    #[test]
    fn test_stops_at_float_resolution() {
        let f = |x: f64| x * x - 2.0;

        // Epsilon far below the spacing of doubles near sqrt(2)
        let run = bisection(f, 1.0, 2.0, 1e-300).unwrap();

        assert_relative_eq!(run.root, std::f64::consts::SQRT_2, epsilon = 1e-15);
        assert!(run.iterations < 64);
    }

    #[test]
    fn test_domain_error() {
        let f = |x: f64| 1.0 / x - 1.0;

        // f(0) is infinite
        let result = bisection(f, 0.0, 2.0, 1e-6);

        assert!(matches!(
            result,
            Err(MathError::DomainError { function: "f", .. })
        ));
    }
}
