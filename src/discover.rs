//! Recursive discovery of HTML documents under a source root.

use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::result::FileFailure;

/// Default file-name pattern, matching `.htm` and `.html`.
pub const DEFAULT_PATTERN: &str = "*.htm*";

/// Compile a file-name glob, case-insensitively.
///
/// # Errors
///
/// Returns [`Error::InvalidPattern`] if the glob does not compile.
pub fn compile_pattern(pattern: &str) -> Result<GlobMatcher> {
    GlobBuilder::new(pattern)
        .case_insensitive(true)
        .literal_separator(true)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|err| Error::InvalidPattern {
            pattern: pattern.to_string(),
            message: err.to_string(),
        })
}

/// Documents found under a source root, plus the entries that could not be
/// examined.
#[derive(Debug, Default)]
pub struct Discovery {
    /// Matching regular files, sorted by path.
    pub files: Vec<PathBuf>,

    /// Entries the walk could not read: dangling links, unreadable
    /// directories, link loops.
    pub failures: Vec<FileFailure>,
}

/// Whether a walk error can hide documents and so must be reported.
///
/// A dangling link whose name does not match the pattern is not a
/// document; anything else (unreadable directory, loop, matching name) is.
fn is_reportable(err: &walkdir::Error, matcher: &GlobMatcher) -> bool {
    if err.loop_ancestor().is_some() {
        return true;
    }
    let Some(path) = err.path() else {
        return true;
    };
    let is_link = path
        .symlink_metadata()
        .is_ok_and(|meta| meta.file_type().is_symlink());
    !is_link || path.file_name().is_some_and(|name| matcher.is_match(name))
}

/// List every regular file under `root` whose file name matches `pattern`.
///
/// Descends into all subdirectories, following links. Files are sorted by
/// path so repeated runs visit them in the same order. Entries that cannot
/// be read are returned as failures rather than dropped.
///
/// # Errors
///
/// Returns [`Error::DirectoryNotFound`] if `root` is missing or not a
/// directory, and [`Error::InvalidPattern`] for a bad glob.
///
/// # Example
///
/// ```no_run
/// use content_compare::discover::{discover_files, DEFAULT_PATTERN};
///
/// let found = discover_files("ContentCompare/SourceA", DEFAULT_PATTERN)?;
/// println!("{} documents, {} unreadable", found.files.len(), found.failures.len());
/// # Ok::<(), content_compare::Error>(())
/// ```
pub fn discover_files(root: impl AsRef<Path>, pattern: &str) -> Result<Discovery> {
    let root = root.as_ref();
    if !root.is_dir() {
        return Err(Error::DirectoryNotFound(root.to_path_buf()));
    }

    let matcher = compile_pattern(pattern)?;
    let mut found = Discovery::default();

    for entry in WalkDir::new(root).min_depth(1).follow_links(true) {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                warn!("Failed to read directory entry: {}", err);
                if is_reportable(&err, &matcher) {
                    let path = err.path().map_or_else(|| root.to_path_buf(), Path::to_path_buf);
                    found.failures.push(FileFailure {
                        path: path.clone(),
                        error: Error::Walk {
                            path,
                            source: err.into(),
                        },
                    });
                }
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        if matcher.is_match(entry.file_name()) {
            found.files.push(entry.into_path());
        }
    }

    found.files.sort();
    debug!(
        "Discovered {} files under {} ({} unreadable)",
        found.files.len(),
        root.display(),
        found.failures.len()
    );
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, rel: &str) {
        let path = dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "<html></html>").unwrap();
    }

    #[test]
    fn finds_nested_htm_and_html() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "index.html");
        touch(temp.path(), "a/page.htm");
        touch(temp.path(), "a/b/c/deep.HTML");
        touch(temp.path(), "a/notes.txt");
        touch(temp.path(), "style.css");

        let files = discover_files(temp.path(), DEFAULT_PATTERN).unwrap().files;
        let rel: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(temp.path()).unwrap().to_path_buf())
            .collect();

        assert_eq!(
            rel,
            vec![
                PathBuf::from("a/b/c/deep.HTML"),
                PathBuf::from("a/page.htm"),
                PathBuf::from("index.html"),
            ]
        );
    }

    #[test]
    fn directory_named_like_html_is_not_a_file() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("site.html")).unwrap();
        touch(temp.path(), "site.html/inner.htm");

        let files = discover_files(temp.path(), DEFAULT_PATTERN).unwrap().files;
        assert_eq!(files, vec![temp.path().join("site.html/inner.htm")]);
    }

    #[test]
    fn empty_root_yields_empty_list() {
        let temp = TempDir::new().unwrap();
        let found = discover_files(temp.path(), DEFAULT_PATTERN).unwrap();
        assert!(found.files.is_empty());
        assert!(found.failures.is_empty());
    }

    #[test]
    fn missing_root_is_directory_not_found() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");
        let result = discover_files(&missing, DEFAULT_PATTERN);
        assert!(matches!(result, Err(Error::DirectoryNotFound(p)) if p == missing));
    }

    #[test]
    fn custom_pattern_is_honoured() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "a.xhtml");
        touch(temp.path(), "b.html");

        let files = discover_files(temp.path(), "*.xhtml").unwrap().files;
        assert_eq!(files, vec![temp.path().join("a.xhtml")]);
    }

    #[test]
    fn bad_pattern_is_rejected() {
        let result = compile_pattern("*.{htm");
        assert!(matches!(result, Err(Error::InvalidPattern { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn dangling_document_link_is_a_failure() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "ok.html");
        std::os::unix::fs::symlink(temp.path().join("gone.html"), temp.path().join("broken.html"))
            .unwrap();

        let found = discover_files(temp.path(), DEFAULT_PATTERN).unwrap();

        assert_eq!(found.files, vec![temp.path().join("ok.html")]);
        assert_eq!(found.failures.len(), 1);
        assert_eq!(found.failures[0].path, temp.path().join("broken.html"));
        assert!(matches!(found.failures[0].error, Error::Walk { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn dangling_non_document_link_is_ignored() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "ok.html");
        std::os::unix::fs::symlink(temp.path().join("gone.css"), temp.path().join("style.css"))
            .unwrap();

        let found = discover_files(temp.path(), DEFAULT_PATTERN).unwrap();

        assert_eq!(found.files.len(), 1);
        assert!(found.failures.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn link_loop_is_a_failure() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "a/page.html");
        std::os::unix::fs::symlink(temp.path(), temp.path().join("a/back")).unwrap();

        let found = discover_files(temp.path(), DEFAULT_PATTERN).unwrap();

        assert_eq!(found.files, vec![temp.path().join("a/page.html")]);
        assert_eq!(found.failures.len(), 1);
        assert_eq!(found.failures[0].path, temp.path().join("a/back"));
    }
}
