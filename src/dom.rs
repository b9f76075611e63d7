//! DOM Operations Adapter
//!
//! Thin layer over the `dom_query` crate: lenient parsing, first-match
//! selection and markup serialization.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

pub use tendril::StrTendril;

/// Parse HTML into a document tree.
///
/// Parsing never fails: html5ever recovers from malformed markup and always
/// produces a tree (inserting `html`, `head` and `body` when missing).
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// First element matching a CSS selector, in document order.
///
/// Returns `None` when nothing matches.
#[must_use]
pub fn first_match<'a>(doc: &'a Document, css: &str) -> Option<Selection<'a>> {
    doc.select(css)
        .nodes()
        .first()
        .map(|node| Selection::from(*node))
}

/// Get inner HTML content
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn inner_html(sel: &Selection) -> StrTendril {
    sel.inner_html()
}

/// Get outer HTML content
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn outer_html(sel: &Selection) -> StrTendril {
    sel.html()
}
