//! Batch processor.
//!
//! enumerate → query → write, for every document under one source root.

use std::path::{Path, PathBuf};

use chrono::Local;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::artifact::write_artifact;
use crate::discover::discover_files;
use crate::element::ElementQuery;
use crate::error::Result;
use crate::mapping::PathMapping;
use crate::options::Options;
use crate::query::query_file;
use crate::result::{BatchReport, FileFailure};

/// What happened to one source file.
#[derive(Debug)]
enum FileOutcome {
    Written,
    NoMatch,
}

fn process_file(query: ElementQuery, source: &Path, mapping: &PathMapping) -> Result<FileOutcome> {
    let (dir, file) = mapping.map_with_dir(source)?;
    let matched = query_file(source, query)?;

    // Stamped when the artifact is written, not when the batch started.
    if write_artifact(&dir, &file, matched.as_ref(), &Local::now())? {
        debug!("Wrote {}", file.display());
        Ok(FileOutcome::Written)
    } else {
        debug!("No {} in {}", query, source.display());
        Ok(FileOutcome::NoMatch)
    }
}

/// Run `query` over `files`, writing artifacts under the mapping's target
/// root.
///
/// Every file is attempted. Failures are logged and collected in the
/// returned report; they never stop the batch. With `options.parallel` the
/// files are processed on the rayon pool, with the same report (failures
/// keep input order).
#[must_use]
pub fn process_batch(
    query: ElementQuery,
    files: &[PathBuf],
    mapping: &PathMapping,
    options: &Options,
) -> BatchReport {
    let run = |source: &PathBuf| process_file(query, source, mapping);

    let outcomes: Vec<_> = if options.parallel {
        files.par_iter().map(run).collect()
    } else {
        files.iter().map(run).collect()
    };

    let mut report = BatchReport {
        attempted: files.len(),
        ..BatchReport::default()
    };

    for (source, outcome) in files.iter().zip(outcomes) {
        match outcome {
            Ok(FileOutcome::Written) => report.written += 1,
            Ok(FileOutcome::NoMatch) => report.no_match += 1,
            Err(error) => {
                warn!("Failed to process {}: {}", source.display(), error);
                report.failures.push(FileFailure {
                    path: source.clone(),
                    error,
                });
            }
        }
    }

    info!(
        source = %mapping.source_root.display(),
        target = %mapping.target_root.display(),
        attempted = report.attempted,
        written = report.written,
        no_match = report.no_match,
        failed = report.failures.len(),
        "Batch complete"
    );
    report
}

/// Discover documents under `source_root` and run [`process_batch`] into
/// `target_root`.
///
/// # Errors
///
/// Returns [`Error::DirectoryNotFound`](crate::Error::DirectoryNotFound) if
/// the source root is missing and
/// [`Error::InvalidPattern`](crate::Error::InvalidPattern) for a bad glob.
/// Per-file errors, including entries discovery could not read, are in the
/// report.
pub fn process_tree(
    query: ElementQuery,
    source_root: &Path,
    target_root: &Path,
    options: &Options,
) -> Result<BatchReport> {
    let found = discover_files(source_root, &options.pattern)?;
    let mapping = PathMapping::new(source_root, target_root);
    let mut report = process_batch(query, &found.files, &mapping, options);

    if !found.failures.is_empty() {
        report.attempted += found.failures.len();
        let mut failures = found.failures;
        failures.append(&mut report.failures);
        report.failures = failures;
    }
    Ok(report)
}
