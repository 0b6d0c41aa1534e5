//! CLI error types.

use thiserror::Error;

use nonlin_math::MathError;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Unrecognised menu entry.
    #[error("Invalid choice: {0:?}. Please try again.")]
    InvalidChoice(String),

    /// The selected test function lacks a form the method needs.
    #[error("{function} has no {form}")]
    MissingForm {
        /// Formula of the test function.
        function: &'static str,
        /// The missing form (derivative or fixed-point function).
        form: &'static str,
    },

    /// Solver or analysis error.
    #[error(transparent)]
    Math(#[from] MathError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// CSV output error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
