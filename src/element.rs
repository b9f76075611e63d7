//! Element queries.
//!
//! The fixed vocabulary of structural elements a run can isolate. Each
//! variant is chosen by a single-character code and evaluated as a CSS
//! selector against the parsed document.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The structural element extracted from every document in a run.
///
/// Chosen once at the boundary (see [`FromStr`]) and passed by value through
/// the batch.
///
/// # Example
///
/// ```rust
/// use content_compare::ElementQuery;
///
/// let query: ElementQuery = "1".parse()?;
/// assert_eq!(query, ElementQuery::H1);
/// assert_eq!(query.xpath(), "//h1");
/// assert!("x".parse::<ElementQuery>().is_err());
/// # Ok::<(), content_compare::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementQuery {
    Head,
    Title,
    Meta,
    Link,
    Body,
    Footer,
    Image,
    H1,
    H2,
    H3,
}

impl ElementQuery {
    /// Every supported query, in menu order.
    pub const ALL: [ElementQuery; 10] = [
        Self::Head,
        Self::Title,
        Self::Meta,
        Self::Link,
        Self::Body,
        Self::Footer,
        Self::Image,
        Self::H1,
        Self::H2,
        Self::H3,
    ];

    /// Single-character selection code (lowercase).
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Head => 'h',
            Self::Title => 't',
            Self::Meta => 'm',
            Self::Link => 'l',
            Self::Body => 'b',
            Self::Footer => 'f',
            Self::Image => 'i',
            Self::H1 => '1',
            Self::H2 => '2',
            Self::H3 => '3',
        }
    }

    /// HTML tag name matched by this query.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Head => "head",
            Self::Title => "title",
            Self::Meta => "meta",
            Self::Link => "link",
            Self::Body => "body",
            Self::Footer => "footer",
            Self::Image => "img",
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
        }
    }

    /// CSS selector evaluated against the document.
    #[must_use]
    pub const fn css(self) -> &'static str {
        // Bare tag selectors; first match in document order is the `//tag` result.
        self.tag()
    }

    /// XPath-style label used in logs and the menu.
    #[must_use]
    pub const fn xpath(self) -> &'static str {
        match self {
            Self::Head => "//head",
            Self::Title => "//title",
            Self::Meta => "//meta",
            Self::Link => "//link",
            Self::Body => "//body",
            Self::Footer => "//footer",
            Self::Image => "//img",
            Self::H1 => "//h1",
            Self::H2 => "//h2",
            Self::H3 => "//h3",
        }
    }

    /// Look up a query by its selection code, ignoring ASCII case.
    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        let code = code.to_ascii_lowercase();
        Self::ALL.into_iter().find(|q| q.code() == code)
    }

    /// Menu listing every element and its code, one per line.
    #[must_use]
    pub fn menu() -> String {
        let mut out = String::from("Choose HTML element to isolate\n\n");
        for query in Self::ALL {
            out.push_str(&format!("<{}> = \"{}\"\n", query.tag(), query.code()));
        }
        out
    }
}

impl fmt::Display for ElementQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.xpath())
    }
}

impl FromStr for ElementQuery {
    type Err = Error;

    /// Parse a selection code. Surrounding whitespace is ignored; anything
    /// other than exactly one known code character is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Self::from_code(c).ok_or_else(|| Error::InvalidSelection(s.to_string()))
            }
            _ => Err(Error::InvalidSelection(s.to_string())),
        }
    }
}
