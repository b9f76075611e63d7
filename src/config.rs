//! Run configuration: source/target directories, file pattern and diff tool.
//!
//! Loaded from an optional JSON file; command-line flags override it.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::discover::DEFAULT_PATTERN;
use crate::error::{Error, Result};
use crate::options::Options;

/// Base directory holding the four trees when nothing else is configured.
pub const DEFAULT_BASE_DIR: &str = "ContentCompare";

/// External diff program invoked after both trees are written.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DiffToolConfig {
    /// Executable name or path.
    pub program: String,

    /// Arguments placed before the two target roots.
    #[serde(default)]
    pub args: Vec<String>,
}

/// Directories and knobs for a full A/B run.
///
/// # Example
///
/// ```rust
/// use content_compare::Config;
///
/// let config: Config = serde_json::from_str(r#"{
///     "source_a": "/data/old",
///     "source_b": "/data/new",
///     "parallel": true
/// }"#).unwrap();
/// assert!(config.parallel);
/// assert_eq!(config.pattern, "*.htm*");
/// assert!(config.target_a.ends_with("TargetA"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub source_a: PathBuf,
    pub source_b: PathBuf,
    pub target_a: PathBuf,
    pub target_b: PathBuf,

    /// File-name glob for source documents.
    pub pattern: String,

    /// Process files on a worker pool.
    pub parallel: bool,

    /// Optional diff tool run against the two target roots.
    pub diff_tool: Option<DiffToolConfig>,
}

impl Default for Config {
    fn default() -> Self {
        let base = Path::new(DEFAULT_BASE_DIR);
        Self {
            source_a: base.join("SourceA"),
            source_b: base.join("SourceB"),
            target_a: base.join("TargetA"),
            target_b: base.join("TargetB"),
            pattern: DEFAULT_PATTERN.to_string(),
            parallel: false,
            diff_tool: None,
        }
    }
}

impl Config {
    /// Load a JSON configuration file. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the file cannot be read or parsed.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|err| Error::Config {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        serde_json::from_str(&text).map_err(|err| Error::Config {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    /// Batch options derived from this configuration.
    #[must_use]
    pub fn options(&self) -> Options {
        Options {
            pattern: self.pattern.clone(),
            parallel: self.parallel,
        }
    }
}
