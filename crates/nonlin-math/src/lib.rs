//! # Nonlin Math
//!
//! Iterative solvers for a single nonlinear equation `f(x) = 0`.
//!
//! This crate provides:
//!
//! - **Solvers**: Bisection (dichotomy), fixed-point iteration (successive
//!   approximations) and Newton-Raphson
//! - **Analysis**: Empirical order-of-convergence estimation and
//!   per-method comparison summaries
//! - **Functions**: A small catalog of test equations with known roots
//!
//! ## Example
//!
//! ```rust
//! use nonlin_math::prelude::*;
//!
//! let sqrt2 = TestFunction::get(TestFunctionKind::Sqrt2);
//! let df = sqrt2.df.unwrap();
//!
//! let result = newton_raphson(sqrt2.f, df, 1.0, &SolverConfig::default()).unwrap();
//! assert!(result.converged());
//!
//! let report = analyze(&result.sequence, sqrt2.exact_root).unwrap();
//! assert!(report.final_error.unwrap() < 1e-9);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod analysis;
pub mod error;
pub mod functions;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::analysis::{
        analyze, estimate_order, ComparisonReport, ConvergenceReport, MethodSummary,
    };
    pub use crate::error::{MathError, MathResult};
    pub use crate::functions::{TestFunction, TestFunctionKind};
    pub use crate::solvers::{
        bisection, fixed_point, newton_raphson, BisectionRun, IterationResult, Method,
        SolverConfig, Termination,
    };
}

pub use error::{MathError, MathResult};
