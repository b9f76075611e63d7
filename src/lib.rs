//! # content-compare
//!
//! Extracts one structural HTML element (`<head>`, `<title>`, `<h1>`, ...)
//! from every document in two parallel directory trees and writes a text
//! artifact per matched document into mirrored target trees, ready for an
//! external diff tool.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use content_compare::{run, Config, ElementQuery};
//!
//! let query: ElementQuery = "t".parse()?;
//! let summary = run(&Config::default(), query)?;
//! println!(
//!     "A: {} written, B: {} written, {} failures",
//!     summary.source_a.written,
//!     summary.source_b.written,
//!     summary.failure_count(),
//! );
//! # Ok::<(), content_compare::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! - **Reset**: both target roots are emptied so no stale artifact survives
//! - **Discover**: every `*.htm*` file under a source root, recursively
//! - **Query**: lenient parse, first matching element in document order
//! - **Write**: timestamp, outer markup and inner markup at the mirrored path
//!
//! Per-file failures are collected in a [`BatchReport`] and never stop a
//! batch. A missing source root or a failed reset aborts the run.

mod error;
mod options;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Character decoding of source documents.
pub mod encoding;

/// The enumerated element vocabulary.
pub mod element;

/// Recursive HTML file discovery.
pub mod discover;

/// Parse-and-select for a single document.
pub mod query;

/// Artifact rendering and writing.
pub mod artifact;

/// Source-to-target path mirroring.
pub mod mapping;

/// Target tree reset.
pub mod reset;

/// Batch processing over a source tree.
pub mod batch;

/// Run configuration.
pub mod config;

/// Full A/B run and diff tool hand-off.
pub mod compare;

// Public API - re-exports
pub use artifact::{render_artifact, write_artifact};
pub use batch::{process_batch, process_tree};
pub use compare::{run, run_and_compare, CommandDiffTool, DiffTool};
pub use config::{Config, DiffToolConfig};
pub use discover::{discover_files, Discovery};
pub use element::ElementQuery;
pub use error::{Error, Result};
pub use mapping::PathMapping;
pub use options::Options;
pub use query::{query_file, query_html, MatchedElement};
pub use reset::reset_tree;
pub use result::{BatchReport, FileFailure, RunSummary};
