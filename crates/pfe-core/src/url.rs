//! URL helpers for document references.
//!
//! Escaping follows `encodeURIComponent`: ASCII alphanumerics and
//! `-_.!~*'()` are kept, everything else is percent-encoded.

use std::borrow::Cow;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Characters escaped inside a single path segment.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a file name for use as one path segment.
pub fn encode_segment(name: &str) -> String {
    utf8_percent_encode(name, SEGMENT).to_string()
}

/// Decode a percent-encoded segment. Invalid UTF-8 is replaced, never rejected.
pub fn decode_segment(segment: &str) -> String {
    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}

/// Join a base path and a file name, escaping the name.
///
/// ```ignore
/// assert_eq!(document_url("/PFE/", "my report.pdf"), "/PFE/my%20report.pdf");
/// ```
pub fn document_url(base_path: &str, name: &str) -> String {
    format!("{}{}", with_trailing_slash(base_path), encode_segment(name))
}

/// Last path segment of a reference, without query or fragment.
pub fn last_segment(url: &str) -> &str {
    let end = url.find(['?', '#']).unwrap_or(url.len());
    let path = &url[..end];
    path.rsplit('/').next().unwrap_or(path)
}

/// Check for an `http://` or `https://` scheme, ignoring case.
pub fn is_full_url(href: &str) -> bool {
    let lower = href.get(..8).unwrap_or(href).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Resolve an href scraped from a directory index against `base_path`.
///
/// Absolute paths and full URLs pass through; a leading `./` is dropped and
/// bare relative names are placed under `base_path`.
pub fn normalize_href<'a>(href: &'a str, base_path: &str) -> Cow<'a, str> {
    if href.starts_with('/') || is_full_url(href) {
        return Cow::Borrowed(href);
    }

    let relative = href.strip_prefix("./").unwrap_or(href);
    Cow::Owned(format!("{}{}", with_trailing_slash(base_path), relative))
}

fn with_trailing_slash(base_path: &str) -> Cow<'_, str> {
    if base_path.ends_with('/') {
        Cow::Borrowed(base_path)
    } else {
        Cow::Owned(format!("{}/", base_path))
    }
}
