//! Result types for batch runs.
//!
//! A batch never stops on a per-file error; each one is recorded here with
//! the offending path so nothing is lost silently.

use std::path::PathBuf;

use crate::error::Error;

/// A source file that could not be processed.
#[derive(Debug)]
pub struct FileFailure {
    /// Source document path.
    pub path: PathBuf,

    /// What went wrong.
    pub error: Error,
}

/// Outcome of one source tree → target tree batch.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Files attempted (always the full input set).
    pub attempted: usize,

    /// Artifacts written.
    pub written: usize,

    /// Documents without the queried element. Not failures.
    pub no_match: usize,

    /// Per-file failures, in input order.
    pub failures: Vec<FileFailure>,
}

impl BatchReport {
    /// True when every file was processed without error.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Outcome of a full A/B run.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub source_a: BatchReport,
    pub source_b: BatchReport,
}

impl RunSummary {
    /// Failures across both batches.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.source_a.failures.len() + self.source_b.failures.len()
    }
}
