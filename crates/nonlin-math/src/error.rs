//! Error types for the iterative solvers.

use thiserror::Error;

/// A specialized Result type for solver operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur while running a solver or analyzing its output.
///
/// A zero derivative in Newton-Raphson and an exhausted iteration budget are
/// not errors: they are reported through
/// [`Termination`](crate::solvers::Termination) on a successful result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },

    /// Invalid bracket for bisection.
    #[error("Invalid bracket: f({a}) = {fa:.2e} and f({b}) = {fb:.2e} have same sign")]
    InvalidBracket {
        /// Lower bound of bracket.
        a: f64,
        /// Upper bound of bracket.
        b: f64,
        /// Function value at a.
        fa: f64,
        /// Function value at b.
        fb: f64,
    },

    /// A supplied function produced a non-finite value.
    #[error("Domain error: {function}({x}) = {value}")]
    DomainError {
        /// Which callable failed (`f`, `df` or `phi`).
        function: &'static str,
        /// The argument it was evaluated at.
        x: f64,
        /// The non-finite value it returned.
        value: f64,
    },

    /// Insufficient data points for operation.
    #[error("Insufficient data: need at least {required}, got {actual}")]
    InsufficientData {
        /// Minimum required points.
        required: usize,
        /// Actual number of points.
        actual: usize,
    },
}

impl MathError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates a domain error.
    #[must_use]
    pub fn domain_error(function: &'static str, x: f64, value: f64) -> Self {
        Self::DomainError { function, x, value }
    }

    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }
}

/// Evaluates `func` at `x`, rejecting NaN and infinite results.
pub(crate) fn evaluate<F>(func: &F, name: &'static str, x: f64) -> MathResult<f64>
where
    F: Fn(f64) -> f64,
{
    let value = func(x);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(MathError::domain_error(name, x, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MathError::domain_error("phi", 0.0, f64::INFINITY);
        assert_eq!(err.to_string(), "Domain error: phi(0) = inf");

        let err = MathError::insufficient_data(1, 0);
        assert!(err.to_string().contains("at least 1"));
    }

    #[test]
    fn test_evaluate_rejects_non_finite() {
        let reciprocal = |x: f64| 1.0 / x;

        assert_eq!(evaluate(&reciprocal, "f", 2.0), Ok(0.5));
        assert!(matches!(
            evaluate(&reciprocal, "f", 0.0),
            Err(MathError::DomainError { function: "f", .. })
        ));

        let log = |x: f64| x.ln();
        assert!(evaluate(&log, "f", -1.0).is_err());
    }
}
