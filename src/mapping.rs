//! Source-to-target path mirroring.

use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Rewrites source paths onto a parallel target tree.
///
/// The source root prefix is replaced by the target root; every remaining
/// component (subdirectories and file name) is kept, so distinct source files
/// always map to distinct artifacts.
///
/// # Example
///
/// ```rust
/// use std::path::Path;
/// use content_compare::PathMapping;
///
/// let mapping = PathMapping::new("cc/SourceA", "cc/TargetA");
/// let target = mapping.map(Path::new("cc/SourceA/docs/index.html"))?;
/// assert_eq!(target, Path::new("cc/TargetA/docs/index.html"));
/// # Ok::<(), content_compare::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMapping {
    pub source_root: PathBuf,
    pub target_root: PathBuf,
}

impl PathMapping {
    #[must_use]
    pub fn new(source_root: impl Into<PathBuf>, target_root: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
            target_root: target_root.into(),
        }
    }

    /// Target path for `source`.
    ///
    /// Matching is component-wise, so `SourceA2/x.html` is not treated as
    /// living under `SourceA`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutsideSourceRoot`] if `source` is not under the
    /// source root.
    pub fn map(&self, source: &Path) -> Result<PathBuf> {
        let relative = source
            .strip_prefix(&self.source_root)
            .map_err(|_| Error::OutsideSourceRoot {
                path: source.to_path_buf(),
                root: self.source_root.clone(),
            })?;
        Ok(self.target_root.join(relative))
    }

    /// Target file path and the directory that must exist to hold it.
    ///
    /// # Errors
    ///
    /// See [`PathMapping::map`].
    pub fn map_with_dir(&self, source: &Path) -> Result<(PathBuf, PathBuf)> {
        let file = self.map(source)?;
        let dir = file
            .parent()
            .map_or_else(|| self.target_root.clone(), Path::to_path_buf);
        Ok((dir, file))
    }
}

/// Absolute form of `path` with symlinks resolved as far as it exists.
///
/// The longest existing ancestor is canonicalized and the missing tail is
/// appended, so a target root that has not been created yet still compares
/// correctly against existing source roots.
///
/// # Errors
///
/// Returns the I/O error if the path cannot be made absolute or an existing
/// ancestor cannot be canonicalized.
pub fn resolve_root(path: &Path) -> io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    let mut existing = absolute.as_path();
    let mut tail = Vec::new();

    while !existing.exists() {
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                tail.push(name.to_os_string());
                existing = parent;
            }
            _ => return Ok(absolute),
        }
    }

    let mut resolved = existing.canonicalize()?;
    for name in tail.into_iter().rev() {
        resolved.push(name);
    }
    Ok(resolved)
}

/// True when one path equals or contains the other, component-wise.
#[must_use]
pub fn roots_overlap(a: &Path, b: &Path) -> bool {
    a.starts_with(b) || b.starts_with(a)
}
