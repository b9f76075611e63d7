//! Character decoding of source documents.
//!
//! Legacy pages are often saved in windows-1252 or ISO-8859-1. Bytes are
//! decoded to UTF-8 before parsing so artifacts from both trees compare on
//! characters, not raw bytes.

use std::borrow::Cow;
use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8, WINDOWS_1252, X_USER_DEFINED};
use regex::bytes::Regex;

/// Bytes inspected for a charset declaration.
const SNIFF_LIMIT: usize = 1024;

/// Matches both `<meta charset=...>` and the `http-equiv` form
/// `content="text/html; charset=..."`.
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]*?charset\s*=\s*["']?([A-Za-z0-9_.:-]+)"#).expect("valid regex")
});

/// Determine the document encoding.
///
/// A byte-order mark wins, then the first charset declaration in the
/// leading bytes, then UTF-8. Only a BOM can select UTF-16: a declared
/// UTF-16 label in byte-readable markup means UTF-8, and `x-user-defined`
/// means windows-1252.
#[must_use]
pub fn sniff_encoding(bytes: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return encoding;
    }

    let head = &bytes[..bytes.len().min(SNIFF_LIMIT)];
    META_CHARSET_RE
        .captures(head)
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_bytes()))
        .map_or(UTF_8, declared_encoding)
}

/// Adjust an encoding named by a `<meta>` declaration.
fn declared_encoding(encoding: &'static Encoding) -> &'static Encoding {
    if encoding == UTF_16LE || encoding == UTF_16BE {
        UTF_8
    } else if encoding == X_USER_DEFINED {
        WINDOWS_1252
    } else {
        encoding
    }
}

/// Decode document bytes to UTF-8.
///
/// Malformed sequences become U+FFFD rather than errors.
///
/// # Examples
///
/// ```
/// use content_compare::encoding::decode_document;
///
/// let html = b"<meta charset=\"windows-1252\"><p>Caf\xE9</p>";
/// assert!(decode_document(html).contains("Caf\u{e9}"));
/// ```
#[must_use]
pub fn decode_document(bytes: &[u8]) -> Cow<'_, str> {
    let encoding = sniff_encoding(bytes);
    // decode() strips a BOM and falls back to replacement characters.
    let (decoded, _used, _had_errors) = encoding.decode(bytes);
    decoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_declaration_is_utf8() {
        assert_eq!(sniff_encoding(b"<html><body>x</body></html>"), UTF_8);
    }

    #[test]
    fn meta_charset_declaration() {
        let html = br#"<head><META CHARSET="ISO-8859-1"></head>"#;
        // WHATWG maps ISO-8859-1 to windows-1252
        assert_eq!(sniff_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn http_equiv_declaration() {
        let html = br#"<meta http-equiv="Content-Type" content="text/html; charset=shift_jis">"#;
        assert_eq!(sniff_encoding(html).name(), "Shift_JIS");
    }

    #[test]
    fn unknown_label_falls_back_to_utf8() {
        let html = br#"<meta charset="klingon">"#;
        assert_eq!(sniff_encoding(html), UTF_8);
    }

    #[test]
    fn declared_utf16_is_read_as_utf8() {
        for label in ["utf-16", "UTF-16LE", "utf-16be"] {
            let html = format!(r#"<meta charset="{label}"><h1>Hello</h1>"#);
            assert_eq!(sniff_encoding(html.as_bytes()), UTF_8, "{label}");
            assert!(decode_document(html.as_bytes()).contains("<h1>Hello</h1>"));
        }
    }

    #[test]
    fn utf16_bom_still_selects_utf16() {
        let mut html = vec![0xFF, 0xFE];
        for unit in "<h1>x</h1>".encode_utf16() {
            html.extend_from_slice(&unit.to_le_bytes());
        }
        assert_eq!(sniff_encoding(&html), UTF_16LE);
        assert_eq!(decode_document(&html), "<h1>x</h1>");
    }

    #[test]
    fn x_user_defined_is_windows_1252() {
        let html = br#"<meta charset="x-user-defined">"#;
        assert_eq!(sniff_encoding(html), WINDOWS_1252);
    }

    #[test]
    fn bom_overrides_declaration() {
        let mut html = vec![0xEF, 0xBB, 0xBF];
        html.extend_from_slice(br#"<meta charset="windows-1252"><p>x</p>"#);
        assert_eq!(sniff_encoding(&html), UTF_8);
        assert!(decode_document(&html).starts_with("<meta"));
    }

    #[test]
    fn declaration_past_sniff_limit_is_ignored() {
        let mut html = vec![b' '; SNIFF_LIMIT];
        html.extend_from_slice(br#"<meta charset="windows-1252">"#);
        assert_eq!(sniff_encoding(&html), UTF_8);
    }

    #[test]
    fn windows_1252_quotes_decode() {
        let html = b"<meta charset=\"windows-1252\"><p>\x93Hi\x94</p>";
        assert!(decode_document(html).contains("\u{201C}Hi\u{201D}"));
    }

    #[test]
    fn invalid_utf8_is_replaced_not_rejected() {
        let decoded = decode_document(b"<p>ok \xFF\xFE end</p>");
        assert!(decoded.contains("ok"));
        assert!(decoded.contains('\u{FFFD}'));
        assert!(decoded.contains("end"));
    }
}
