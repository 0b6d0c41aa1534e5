//! Root-finding algorithms.
//!
//! This module provides three classical iterative solvers:
//!
//! - [`bisection`]: Halves a bracketing interval until it is narrower than epsilon
//! - [`fixed_point`]: Iterates `x_{n+1} = φ(x_n)` until successive iterates agree
//! - [`newton_raphson`]: Quadratic convergence when the derivative is available
//!
//! # Choosing a Solver
//!
//! | Solver | Speed | Reliability | Requires |
//! |--------|-------|-------------|----------|
//! | Bisection | Slow (linear) | Guaranteed | Bracket |
//! | Fixed point | Linear in general | Needs a contraction | φ with \|φ'\| < 1 |
//! | Newton-Raphson | Fastest (quadratic) | May stall or diverge | Derivative |
//!
//! The open methods return an [`IterationResult`] whose [`Termination`]
//! tells a converged run apart from one that hit a zero derivative or ran out
//! of iterations. Bisection cannot fail to converge on a valid bracket and
//! returns the lighter [`BisectionRun`].
//!
//! # Example
//!
//! ```rust
//! use nonlin_math::solvers::{fixed_point, SolverConfig};
//!
//! // Heron's iteration for sqrt(2)
//! let phi = |x: f64| 0.5 * (x + 2.0 / x);
//! let config = SolverConfig::default().with_tolerance(1e-6);
//!
//! let result = fixed_point(phi, 1.0, &config).unwrap();
//! assert!(result.converged());
//! assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-5);
//! ```

mod bisection;
mod fixed_point;
mod newton;

pub use bisection::{bisection, BisectionRun, BisectionStep};
pub use fixed_point::fixed_point;
pub use newton::{newton_raphson, DERIVATIVE_FLOOR};

use std::fmt;

use serde::Serialize;

use crate::error::{MathError, MathResult};

/// Default step-size tolerance for the open methods.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum iterations for the open methods.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Default residual tolerance `|f(x)|` for Newton-Raphson.
pub const DEFAULT_RESIDUAL_TOLERANCE: f64 = 1e-10;

/// Configuration for the fixed-point and Newton-Raphson solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Tolerance on the step `|x_{n+1} - x_n|`.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
    /// Tolerance on the residual `|f(x_n)|` (Newton-Raphson only).
    pub residual_tolerance: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            residual_tolerance: DEFAULT_RESIDUAL_TOLERANCE,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration with the default residual tolerance.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
            residual_tolerance: DEFAULT_RESIDUAL_TOLERANCE,
        }
    }

    /// Sets the step tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the residual tolerance.
    #[must_use]
    pub fn with_residual_tolerance(mut self, residual_tolerance: f64) -> Self {
        self.residual_tolerance = residual_tolerance;
        self
    }

    /// Checks that both tolerances are finite and strictly positive.
    pub fn validate(&self) -> MathResult<()> {
        require_positive("tolerance", self.tolerance)?;
        require_positive("residual tolerance", self.residual_tolerance)
    }
}

pub(crate) fn require_positive(name: &str, value: f64) -> MathResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(MathError::invalid_input(format!(
            "{name} must be finite and positive, got {value}"
        )))
    }
}

pub(crate) fn require_finite(name: &str, value: f64) -> MathResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(MathError::invalid_input(format!(
            "{name} must be finite, got {value}"
        )))
    }
}

/// How an open-method run ended.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Termination {
    /// The stopping criterion was met.
    Converged,
    /// `|f'(x)|` fell below [`DERIVATIVE_FLOOR`].
    DerivativeDegenerate {
        /// Zero-based iteration at which the derivative was evaluated.
        iteration: u32,
        /// The offending derivative value.
        derivative: f64,
    },
    /// The iteration budget ran out.
    MaxIterationsReached {
        /// The exhausted budget.
        max_iterations: u32,
    },
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Converged => write!(f, "Converged successfully"),
            Self::DerivativeDegenerate {
                iteration,
                derivative,
            } => write!(
                f,
                "Derivative too small at iteration {iteration}: df(x) = {derivative}"
            ),
            Self::MaxIterationsReached { max_iterations } => write!(
                f,
                "Maximum iterations ({max_iterations}) reached without convergence"
            ),
        }
    }
}

/// Result of a fixed-point or Newton-Raphson run.
///
/// `sequence` holds every iterate including `x0`, `errors` the step sizes
/// `|x_{n+1} - x_n|`, so `sequence.len() == iterations + 1` and
/// `errors.len() == iterations`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IterationResult {
    /// Best available root estimate.
    pub root: f64,
    /// Number of completed steps.
    pub iterations: u32,
    /// Why the run stopped.
    pub termination: Termination,
    /// All iterates, starting with `x0`.
    pub sequence: Vec<f64>,
    /// Step size of every completed step.
    pub errors: Vec<f64>,
}

impl IterationResult {
    /// Returns `true` if the stopping criterion was met.
    pub fn converged(&self) -> bool {
        matches!(self.termination, Termination::Converged)
    }

    /// Human-readable diagnostic for the termination.
    pub fn message(&self) -> String {
        self.termination.to_string()
    }

    /// Last step size, if any step was taken.
    pub fn final_error(&self) -> Option<f64> {
        self.errors.last().copied()
    }
}

/// Identifies one of the three solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Method {
    /// Interval halving.
    Bisection,
    /// Successive approximations `x = φ(x)`.
    FixedPoint,
    /// Newton-Raphson.
    NewtonRaphson,
}

impl Method {
    /// All methods in menu order.
    pub const ALL: [Method; 3] = [Method::Bisection, Method::FixedPoint, Method::NewtonRaphson];

    /// Returns the display name of the method.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bisection => "Bisection",
            Self::FixedPoint => "Fixed point",
            Self::NewtonRaphson => "Newton-Raphson",
        }
    }

    /// Textbook order of convergence (1 = linear, 2 = quadratic).
    pub fn theoretical_order(self) -> u32 {
        match self {
            Self::Bisection | Self::FixedPoint => 1,
            Self::NewtonRaphson => 2,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
