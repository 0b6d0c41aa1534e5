//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{BisectionArgs, CompareArgs, FixedPointArgs, NewtonArgs};

/// Nonlin - Solve f(x) = 0 with bisection, fixed-point and Newton-Raphson iterations
#[derive(Parser)]
#[command(name = "nonlin")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Print every iterate after the summary
    #[arg(long, global = true)]
    pub trace: bool,

    /// Record the run summary in the results directory
    #[arg(long, global = true)]
    pub save: bool,

    /// Directory holding comparison.json
    #[arg(
        long,
        global = true,
        env = "NONLIN_RESULTS_DIR",
        default_value = "results"
    )]
    pub results_dir: PathBuf,

    /// Runs the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Collects the global flags shared by every command.
    pub fn options(&self) -> RunOptions {
        RunOptions {
            format: self.format,
            trace: self.trace,
            save: self.save,
            results_dir: self.results_dir.clone(),
        }
    }
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Interactive menu (default)
    Menu,

    /// Halve a bracketing interval until it is narrower than epsilon
    Bisection(BisectionArgs),

    /// Iterate x = phi(x) (successive approximations)
    FixedPoint(FixedPointArgs),

    /// Newton-Raphson iteration
    Newton(NewtonArgs),

    /// Run all three methods and compare them
    Compare(CompareArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV of the iterates
    Csv,
}

/// Global settings handed to every command.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    /// How results are printed.
    pub format: OutputFormat,
    /// Print the per-iteration table.
    pub trace: bool,
    /// Persist summaries after each run.
    pub save: bool,
    /// Where summaries are persisted.
    pub results_dir: PathBuf,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            trace: false,
            save: false,
            results_dir: PathBuf::from("results"),
        }
    }
}
