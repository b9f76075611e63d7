//! Output tree reset.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Remove every file and subdirectory inside `root`, leaving `root` empty.
///
/// A missing `root` is created. Only the given path is touched; the process
/// working directory is never changed.
///
/// # Errors
///
/// Returns [`Error::Cleanup`] naming the entry that could not be removed (or
/// the root, if it cannot be listed or created).
pub fn reset_tree(root: &Path) -> Result<()> {
    let cleanup_err = |path: &Path| {
        let path = path.to_path_buf();
        move |source: std::io::Error| Error::Cleanup { path, source }
    };

    if !root.exists() {
        debug!("Creating target root {}", root.display());
        return fs::create_dir_all(root).map_err(cleanup_err(root));
    }

    let mut removed = 0usize;
    for entry in fs::read_dir(root).map_err(cleanup_err(root))? {
        let entry = entry.map_err(cleanup_err(root))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(cleanup_err(&path))?;

        // Symlinked directories are unlinked, never followed.
        if file_type.is_dir() {
            fs::remove_dir_all(&path).map_err(cleanup_err(&path))?;
        } else {
            fs::remove_file(&path).map_err(cleanup_err(&path))?;
        }
        removed += 1;
    }

    debug!("Cleared {} entries from {}", removed, root.display());
    Ok(())
}
