//! Post-processing of solver output.
//!
//! - [`analyze`] and [`estimate_order`]: convergence statistics of an
//!   iteration sequence
//! - [`ComparisonReport`]: per-method summaries for side-by-side display and
//!   persistence

mod comparison;
mod convergence;

pub use comparison::{ComparisonReport, MethodSummary};
pub use convergence::{
    analyze, estimate_order, ConvergenceReport, DEFAULT_ORDER, ORDER_ERROR_FLOOR, ORDER_WINDOW,
};
