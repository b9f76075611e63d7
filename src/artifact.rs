//! Artifact writer.
//!
//! One text file per matched document, recording a timestamp and the
//! element's outer and inner markup under labeled sections.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Local};

use crate::error::{Error, Result};
use crate::query::MatchedElement;

/// Timestamp layout written on the first line of every artifact.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render the artifact text for `element`.
///
/// # Example
///
/// ```rust
/// use chrono::{Local, TimeZone};
/// use content_compare::{render_artifact, MatchedElement};
///
/// let element = MatchedElement {
///     outer_html: "<h1>Hello</h1>".into(),
///     inner_html: "Hello".into(),
/// };
/// let at = Local.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
/// let text = render_artifact(&element, &at);
/// assert_eq!(
///     text,
///     "\nTimestamp 2024-05-01 09:30:00\n\nTag:\n\n<h1>Hello</h1>\n\nContent:\n\nHello\n"
/// );
/// ```
#[must_use]
pub fn render_artifact(element: &MatchedElement, timestamp: &DateTime<Local>) -> String {
    format!(
        "\nTimestamp {}\n\nTag:\n\n{}\n\nContent:\n\n{}\n",
        timestamp.format(TIMESTAMP_FORMAT),
        element.outer_html,
        element.inner_html,
    )
}

/// Write the artifact for `element` to `file`, creating `dir` first.
///
/// Returns `Ok(false)` without touching the filesystem when there is no
/// element. An existing file at `file` is overwritten. `timestamp` is the
/// creation time recorded in the artifact; the batch passes the time of
/// each write.
///
/// # Errors
///
/// Returns [`Error::Write`] if the directory or file cannot be created or
/// written.
pub fn write_artifact(
    dir: &Path,
    file: &Path,
    element: Option<&MatchedElement>,
    timestamp: &DateTime<Local>,
) -> Result<bool> {
    let Some(element) = element else {
        return Ok(false);
    };

    // create_dir_all treats an existing directory as success, including one
    // created by another worker between its checks.
    fs::create_dir_all(dir).map_err(|source| Error::Write {
        path: dir.to_path_buf(),
        source,
    })?;

    let write_err = |source: std::io::Error| Error::Write {
        path: file.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(File::create(file).map_err(write_err)?);
    writer
        .write_all(render_artifact(element, timestamp).as_bytes())
        .map_err(write_err)?;
    // Flush explicitly; errors swallowed by Drop would lose data silently.
    writer.flush().map_err(write_err)?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn hello() -> MatchedElement {
        MatchedElement {
            outer_html: "<h1>Hello</h1>".to_string(),
            inner_html: "Hello".to_string(),
        }
    }

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2021, 3, 4, 17, 5, 9).unwrap()
    }

    #[test]
    fn absent_element_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("sub");
        let file = dir.join("page.html");

        let written = write_artifact(&dir, &file, None, &fixed_time()).unwrap();

        assert!(!written);
        assert!(!dir.exists());
    }

    #[test]
    fn creates_nested_directories() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("a/b/c");
        let file = dir.join("page.html");

        assert!(write_artifact(&dir, &file, Some(&hello()), &fixed_time()).unwrap());

        let text = std::fs::read_to_string(&file).unwrap();
        assert_eq!(
            text,
            "\nTimestamp 2021-03-04 17:05:09\n\nTag:\n\n<h1>Hello</h1>\n\nContent:\n\nHello\n"
        );
    }

    #[test]
    fn overwrites_existing_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("page.html");
        std::fs::write(&file, "stale content that is much longer than the new one ".repeat(20))
            .unwrap();

        write_artifact(temp.path(), &file, Some(&hello()), &fixed_time()).unwrap();

        let text = std::fs::read_to_string(&file).unwrap();
        assert!(!text.contains("stale"));
        assert!(text.ends_with("Hello\n"));
    }

    #[test]
    fn directory_blocked_by_file_is_write_error() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let dir = blocker.join("sub");

        let result = write_artifact(&dir, &dir.join("x.html"), Some(&hello()), &fixed_time());
        assert!(matches!(result, Err(Error::Write { path, .. }) if path == dir));
    }

    #[test]
    fn sections_appear_in_order() {
        let text = render_artifact(&hello(), &fixed_time());
        let ts = text.find("Timestamp").unwrap();
        let tag = text.find("Tag:").unwrap();
        let content = text.find("Content:").unwrap();
        assert!(ts < tag && tag < content);
    }
}
