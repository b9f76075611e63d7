//! Full A/B run and the downstream diff tool hand-off.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{info, warn};

use crate::batch::process_tree;
use crate::config::{Config, DiffToolConfig};
use crate::discover::compile_pattern;
use crate::element::ElementQuery;
use crate::error::{Error, Result};
use crate::mapping::{resolve_root, roots_overlap};
use crate::reset::reset_tree;
use crate::result::RunSummary;

/// Comparison tool run against the two finished target trees.
pub trait DiffTool {
    /// Compare `target_a` with `target_b`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DiffTool`] if the tool cannot be run.
    fn compare(&self, target_a: &Path, target_b: &Path) -> Result<()>;
}

/// Runs an external program with the two target roots as final arguments.
#[derive(Debug, Clone)]
pub struct CommandDiffTool {
    config: DiffToolConfig,
}

impl CommandDiffTool {
    #[must_use]
    pub fn new(config: DiffToolConfig) -> Self {
        Self { config }
    }
}

impl DiffTool for CommandDiffTool {
    fn compare(&self, target_a: &Path, target_b: &Path) -> Result<()> {
        info!("Running {} on {} and {}", self.config.program, target_a.display(), target_b.display());
        let status = Command::new(&self.config.program)
            .args(&self.config.args)
            .arg(target_a)
            .arg(target_b)
            .status()
            .map_err(|err| Error::DiffTool(format!("{}: {err}", self.config.program)))?;

        // diff-style tools exit 1 when inputs differ; only >1 is a failure.
        match status.code() {
            Some(0 | 1) => Ok(()),
            Some(code) => Err(Error::DiffTool(format!(
                "{} exited with status {code}",
                self.config.program
            ))),
            None => Err(Error::DiffTool(format!(
                "{} terminated by signal",
                self.config.program
            ))),
        }
    }
}

/// Reject a configuration where resetting a target would delete a source
/// root or the other target.
fn check_roots_disjoint(config: &Config) -> Result<()> {
    let resolve = |path: &PathBuf| {
        resolve_root(path).map_err(|source| Error::Cleanup {
            path: path.clone(),
            source,
        })
    };

    let sources = [
        (&config.source_a, resolve(&config.source_a)?),
        (&config.source_b, resolve(&config.source_b)?),
    ];
    let target_a = resolve(&config.target_a)?;
    let target_b = resolve(&config.target_b)?;

    for (target, resolved) in [(&config.target_a, &target_a), (&config.target_b, &target_b)] {
        for (source, source_resolved) in &sources {
            if roots_overlap(resolved, source_resolved) {
                return Err(Error::OverlappingRoots {
                    target: target.clone(),
                    other: (*source).clone(),
                });
            }
        }
    }

    if roots_overlap(&target_a, &target_b) {
        return Err(Error::OverlappingRoots {
            target: config.target_a.clone(),
            other: config.target_b.clone(),
        });
    }
    Ok(())
}

/// Reset both target roots, then extract `query` from source A and source B.
///
/// The pattern is validated and both targets are cleared before anything is
/// written. A missing source root, or a target overlapping a source or the
/// other target, aborts the run before any reset; per-file failures are in
/// the returned summary.
///
/// # Errors
///
/// [`Error::InvalidPattern`], [`Error::DirectoryNotFound`],
/// [`Error::OverlappingRoots`] or [`Error::Cleanup`].
pub fn run(config: &Config, query: ElementQuery) -> Result<RunSummary> {
    compile_pattern(&config.pattern)?;
    for root in [&config.source_a, &config.source_b] {
        if !root.is_dir() {
            return Err(Error::DirectoryNotFound(root.clone()));
        }
    }
    check_roots_disjoint(config)?;

    reset_tree(&config.target_a)?;
    reset_tree(&config.target_b)?;

    let options = config.options();
    info!("Extracting {} from {}", query, config.source_a.display());
    let source_a = process_tree(query, &config.source_a, &config.target_a, &options)?;
    info!("Extracting {} from {}", query, config.source_b.display());
    let source_b = process_tree(query, &config.source_b, &config.target_b, &options)?;

    let summary = RunSummary { source_a, source_b };
    if summary.failure_count() > 0 {
        warn!("{} files failed", summary.failure_count());
    }
    Ok(summary)
}

/// [`run`], then hand both target roots to `diff` if the run succeeded.
///
/// The diff tool is never invoked after a fatal error.
///
/// # Errors
///
/// Any error from [`run`], or [`Error::DiffTool`].
pub fn run_and_compare(
    config: &Config,
    query: ElementQuery,
    diff: Option<&dyn DiffTool>,
) -> Result<RunSummary> {
    let summary = run(config, query)?;
    if let Some(diff) = diff {
        diff.compare(&config.target_a, &config.target_b)?;
    }
    Ok(summary)
}
