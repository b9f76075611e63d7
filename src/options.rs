//! Per-batch processing options.

use crate::discover::DEFAULT_PATTERN;

/// Configuration options for a batch run.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use content_compare::Options;
///
/// let options = Options {
///     parallel: true,
///     ..Options::default()
/// };
/// assert_eq!(options.pattern, "*.htm*");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// File-name glob selecting source documents (case-insensitive).
    ///
    /// Default: `"*.htm*"`
    pub pattern: String,

    /// Process files on a rayon worker pool.
    ///
    /// Output is identical to a sequential run; only wall time changes.
    ///
    /// Default: `false`
    pub parallel: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_string(),
            parallel: false,
        }
    }
}
