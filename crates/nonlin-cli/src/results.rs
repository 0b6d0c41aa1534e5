//! Persistence of run summaries as `comparison.json`.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use nonlin_math::analysis::{ComparisonReport, MethodSummary};

use crate::error::CliResult;

/// File name of the summary dump inside the results directory.
pub const RESULTS_FILE: &str = "comparison.json";

/// One method's entry in the dump.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StoredSummary {
    /// Number of iterations performed.
    pub iterations: u32,
    /// Whether the run met its stopping criterion.
    pub converged: bool,
    /// Root estimate.
    pub final_value: f64,
}

impl From<&MethodSummary> for StoredSummary {
    fn from(summary: &MethodSummary) -> Self {
        Self {
            iterations: summary.iterations,
            converged: summary.converged,
            final_value: summary.final_value,
        }
    }
}

/// `{ method: { iterations, converged, final_value } }` backed by a JSON file.
///
/// Entries already on disk are kept; recording a method again replaces its
/// entry.
#[derive(Debug)]
pub struct ResultStore {
    path: PathBuf,
    entries: BTreeMap<String, StoredSummary>,
}

impl ResultStore {
    /// Opens the store in `dir`, loading an existing dump if there is one.
    pub fn open(dir: impl AsRef<Path>) -> CliResult<Self> {
        let path = dir.as_ref().join(RESULTS_FILE);
        let entries = if path.is_file() {
            debug!(path = %path.display(), "loading saved results");
            serde_json::from_str(&fs::read_to_string(&path)?)?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, entries })
    }

    /// Records one run.
    pub fn record(&mut self, summary: &MethodSummary) {
        self.entries
            .insert(summary.method.name().to_string(), summary.into());
    }

    /// Records every run of a comparison.
    pub fn record_all(&mut self, report: &ComparisonReport) {
        for summary in report.summaries() {
            self.record(summary);
        }
    }

    /// Writes the dump, creating the results directory if needed.
    pub fn save(&self) -> CliResult<&Path> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&self.entries)?)?;
        info!(path = %self.path.display(), entries = self.entries.len(), "results saved");
        Ok(&self.path)
    }

    /// Stored entries keyed by method name.
    pub fn entries(&self) -> &BTreeMap<String, StoredSummary> {
        &self.entries
    }
}
