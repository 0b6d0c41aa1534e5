//! Empirical order-of-convergence estimation.

use serde::Serialize;

use crate::error::{MathError, MathResult};

/// Errors are clamped to at least this value before taking logarithms.
pub const ORDER_ERROR_FLOOR: f64 = 1e-15;

/// Maximum number of log-ratios averaged by [`estimate_order`].
pub const ORDER_WINDOW: usize = 5;

/// Order reported when there is not enough data to estimate one.
pub const DEFAULT_ORDER: f64 = 1.0;

/// Estimates the order of convergence `p` in `e_{n+1} ≈ C·e_n^p`.
///
/// Takes the last `min(5, len - 1) + 1` errors, clamps them to
/// [`ORDER_ERROR_FLOOR`], and averages the ratios `ln(e_{i+1}) / ln(e_i)`.
/// Returns [`DEFAULT_ORDER`] when fewer than three errors are given or no
/// ratio is defined.
///
/// The ratio of logarithms ignores the constant `C`, so it is a rough
/// estimate: expect about ±0.2 on typical sequences, and values well above
/// 1 for short linearly converging sequences whose errors are still large.
///
/// # Example
///
/// ```rust
/// use nonlin_math::analysis::estimate_order;
///
/// let quadratic = [0.5, 0.25, 0.0625, 0.0039, 1.5e-5];
/// assert!(estimate_order(&quadratic) > 1.5);
///
/// assert_eq!(estimate_order(&[0.1, 0.01]), 1.0);
/// ```
pub fn estimate_order(errors: &[f64]) -> f64 {
    if errors.len() < 3 {
        return DEFAULT_ORDER;
    }

    let window = ORDER_WINDOW.min(errors.len() - 1);
    let logs: Vec<f64> = errors[errors.len() - window - 1..]
        .iter()
        .map(|e| e.max(ORDER_ERROR_FLOOR).ln())
        .collect();

    let orders: Vec<f64> = logs
        .windows(2)
        .filter(|pair| pair[0] != 0.0)
        .map(|pair| pair[1] / pair[0])
        .collect();

    if orders.is_empty() {
        DEFAULT_ORDER
    } else {
        orders.iter().sum::<f64>() / orders.len() as f64
    }
}

/// Summary statistics of an iteration sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConvergenceReport {
    /// Number of steps (`sequence.len() - 1`).
    pub iterations: usize,
    /// `|x_{i+1} - x_i|` for every step.
    pub successive_errors: Vec<f64>,
    /// Last iterate.
    pub final_value: f64,
    /// Ratio of the last two successive errors.
    pub convergence_rate: Option<f64>,
    /// `|x_i - root|` for every iterate, when the exact root is known.
    pub absolute_errors: Option<Vec<f64>>,
    /// Last absolute error, when the exact root is known.
    pub final_error: Option<f64>,
    /// [`estimate_order`] of the absolute errors after `x0`, when the exact
    /// root is known.
    pub estimated_order: Option<f64>,
}

/// Analyzes a sequence of iterates, optionally against the exact root.
///
/// # Errors
///
/// [`MathError::InsufficientData`] if `sequence` is empty.
///
/// # Example
///
/// ```rust
/// use nonlin_math::analysis::analyze;
///
/// let newton = [1.0, 1.5, 1.416666667, 1.414215686, 1.414213562];
/// let report = analyze(&newton, Some(std::f64::consts::SQRT_2)).unwrap();
///
/// assert_eq!(report.iterations, 4);
/// assert!(report.estimated_order.unwrap() > 1.5);
/// ```
pub fn analyze(sequence: &[f64], exact_root: Option<f64>) -> MathResult<ConvergenceReport> {
    let Some(&final_value) = sequence.last() else {
        return Err(MathError::insufficient_data(1, 0));
    };

    let successive_errors: Vec<f64> = sequence.windows(2).map(|w| (w[1] - w[0]).abs()).collect();

    let convergence_rate = match successive_errors.as_slice() {
        [.., previous, last] if *previous != 0.0 => Some(last / previous),
        _ => None,
    };

    let absolute_errors =
        exact_root.map(|root| sequence.iter().map(|x| (x - root).abs()).collect::<Vec<_>>());
    let final_error = absolute_errors.as_ref().and_then(|e| e.last().copied());
    let estimated_order = absolute_errors.as_ref().map(|e| estimate_order(&e[1..]));

    Ok(ConvergenceReport {
        iterations: sequence.len() - 1,
        successive_errors,
        final_value,
        convergence_rate,
        absolute_errors,
        final_error,
        estimated_order,
    })
}
