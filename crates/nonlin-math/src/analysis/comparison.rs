//! Side-by-side comparison of solver runs.

use std::collections::BTreeMap;
use std::fmt::{self, Write as _};

use serde::{Serialize, Serializer};

use crate::solvers::{BisectionRun, IterationResult, Method};

/// The headline numbers of one solver run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MethodSummary {
    /// Which solver produced the run.
    #[serde(skip)]
    pub method: Method,
    /// Number of iterations performed.
    pub iterations: u32,
    /// Whether the run met its stopping criterion.
    pub converged: bool,
    /// Root estimate.
    pub final_value: f64,
}

impl MethodSummary {
    /// Summarizes an open-method run.
    pub fn from_iteration(method: Method, result: &IterationResult) -> Self {
        Self {
            method,
            iterations: result.iterations,
            converged: result.converged(),
            final_value: result.root,
        }
    }
}

impl From<&BisectionRun> for MethodSummary {
    fn from(run: &BisectionRun) -> Self {
        Self {
            method: Method::Bisection,
            iterations: run.iterations,
            converged: true,
            final_value: run.root,
        }
    }
}

/// Summaries of several runs, in the order they were added.
///
/// Serializes as `{ "<method>": { iterations, converged, final_value } }`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonReport {
    summaries: Vec<MethodSummary>,
}

impl ComparisonReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a summary, replacing an earlier one for the same method.
    pub fn push(&mut self, summary: MethodSummary) {
        self.summaries.retain(|s| s.method != summary.method);
        self.summaries.push(summary);
    }

    /// Summaries in insertion order.
    pub fn summaries(&self) -> &[MethodSummary] {
        &self.summaries
    }

    /// Returns the summary for `method`, if present.
    pub fn get(&self, method: Method) -> Option<&MethodSummary> {
        self.summaries.iter().find(|s| s.method == method)
    }

    /// Returns `true` if no run has been added.
    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }

    /// Renders the fixed-width comparison table.
    pub fn render(&self) -> String {
        let rule = "=".repeat(70);
        let mut out = String::new();
        let _ = writeln!(out, "\n{rule}\n  COMPARISON OF METHODS\n{rule}\n");
        let _ = writeln!(
            out,
            "{:<30} {:>12} {:>12} {:>15}",
            "Method", "Iterations", "Converged", "Final Value"
        );
        let _ = writeln!(out, "{}", "-".repeat(70));
        for summary in &self.summaries {
            let _ = writeln!(
                out,
                "{:<30} {:>12} {:>12} {:>15.10}",
                summary.method.name(),
                summary.iterations,
                if summary.converged { "Yes" } else { "No" },
                summary.final_value
            );
        }
        out
    }
}

impl FromIterator<MethodSummary> for ComparisonReport {
    fn from_iter<I: IntoIterator<Item = MethodSummary>>(iter: I) -> Self {
        let mut report = Self::new();
        for summary in iter {
            report.push(summary);
        }
        report
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl Serialize for ComparisonReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let by_name: BTreeMap<&str, &MethodSummary> = self
            .summaries
            .iter()
            .map(|s| (s.method.name(), s))
            .collect();
        by_name.serialize(serializer)
    }
}
