//! Error types for content-compare.
//!
//! Per-file errors (`Read`, `Walk`, `Write`, `OutsideSourceRoot`) are collected in a
//! [`BatchReport`](crate::BatchReport) and never abort a batch. The rest are
//! fatal for the run.

use std::path::PathBuf;

/// Error type for extraction runs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A configured source root does not exist.
    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// Selector code outside the supported vocabulary.
    #[error("Invalid selection: {0:?}")]
    InvalidSelection(String),

    /// File-name glob could not be compiled.
    #[error("Invalid file pattern {pattern:?}: {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Source document could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Entry under a source root could not be examined during discovery.
    #[error("Failed to read directory entry {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Artifact directory or file could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source file does not live under the batch's source root.
    #[error("{} is not under source root {}", path.display(), root.display())]
    OutsideSourceRoot { path: PathBuf, root: PathBuf },

    /// Target root could not be cleared.
    #[error("Failed to clear {}: {source}", path.display())]
    Cleanup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A target root equals, contains, or lies inside another configured
    /// root, so resetting it would destroy documents or the other tree.
    #[error("Target root {} overlaps {}", target.display(), other.display())]
    OverlappingRoots { target: PathBuf, other: PathBuf },

    /// Configuration file unreadable or malformed.
    #[error("Invalid configuration {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// External diff tool could not be launched or reported failure.
    #[error("Diff tool failed: {0}")]
    DiffTool(String),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
