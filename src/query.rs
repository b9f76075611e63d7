//! HTML query engine.
//!
//! Parses one document leniently and returns the first element matching an
//! [`ElementQuery`], serialized as outer and inner markup.

use std::fs;
use std::path::Path;

use tracing::trace;

use crate::dom;
use crate::element::ElementQuery;
use crate::encoding::decode_document;
use crate::error::{Error, Result};

/// The first element matching a query, detached from its document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedElement {
    /// Tag, attributes and serialized subtree.
    pub outer_html: String,

    /// Serialized descendants only.
    pub inner_html: String,
}

/// Evaluate `query` against an in-memory document.
///
/// Malformed markup never fails; `None` means the element is not present.
///
/// # Example
///
/// ```rust
/// use content_compare::{query_html, ElementQuery};
///
/// let html = "<html><body><h1>Hello</h1></body></html>";
/// let matched = query_html(html, ElementQuery::H1).unwrap();
/// assert_eq!(matched.outer_html, "<h1>Hello</h1>");
/// assert_eq!(matched.inner_html, "Hello");
/// ```
#[must_use]
pub fn query_html(html: &str, query: ElementQuery) -> Option<MatchedElement> {
    let doc = dom::parse(html);
    let sel = dom::first_match(&doc, query.css())?;

    Some(MatchedElement {
        outer_html: dom::outer_html(&sel).to_string(),
        inner_html: dom::inner_html(&sel).to_string(),
    })
}

/// Read, decode and query one file.
///
/// # Errors
///
/// Returns [`Error::Read`] if the file cannot be read. Markup problems are
/// never errors.
pub fn query_file(path: &Path, query: ElementQuery) -> Result<Option<MatchedElement>> {
    let bytes = fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let html = decode_document(&bytes);
    let matched = query_html(&html, query);
    trace!(
        path = %path.display(),
        query = %query,
        matched = matched.is_some(),
        "Queried document"
    );
    Ok(matched)
}
