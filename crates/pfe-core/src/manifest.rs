//! Manifest (`files.json`) and directory-index parsing.

use regex::Regex;
use serde_json::Value;

use crate::entry::{ListingEntry, RawEntry};
use crate::url;

/// Outcome of parsing a manifest body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestBody {
    /// The body was a JSON array; holds every usable record.
    Listing(Vec<ListingEntry>),
    /// Valid JSON, but not an array. Treated as an empty listing.
    NotAnArray,
}

impl ManifestBody {
    /// Entries to use for this manifest (empty for [`ManifestBody::NotAnArray`]).
    pub fn into_entries(self) -> Vec<ListingEntry> {
        match self {
            Self::Listing(entries) => entries,
            Self::NotAnArray => Vec::new(),
        }
    }
}

/// Parse a manifest body.
///
/// Returns `Err` only when the text is not JSON at all. Records that are
/// not objects or carry neither a `name` nor a `url` are skipped, and a
/// repeated `url` keeps its first record.
pub fn parse_manifest(body: &str, base_path: &str) -> Result<ManifestBody, serde_json::Error> {
    let value: Value = serde_json::from_str(body)?;

    let Value::Array(items) = value else {
        return Ok(ManifestBody::NotAnArray);
    };

    let total = items.len();
    let mut entries: Vec<ListingEntry> = Vec::with_capacity(total);
    for (index, item) in items.into_iter().enumerate() {
        let Some(entry) = serde_json::from_value::<RawEntry>(item)
            .ok()
            .and_then(|raw| raw.into_entry(base_path))
        else {
            tracing::warn!(index, "skipping manifest record without a usable name or url");
            continue;
        };

        if entries.iter().any(|e| e.url == entry.url) {
            tracing::warn!(index, url = %entry.url, "skipping duplicate manifest record");
            continue;
        }
        entries.push(entry);
    }

    tracing::debug!(total, kept = entries.len(), "parsed manifest");
    Ok(ManifestBody::Listing(entries))
}

/// Build the href pattern for a document extension.
///
/// Matches `href="…​.ext"` and `href='…​.ext'`, ignoring case.
pub fn href_pattern(extension: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        r#"(?i)href\s*=\s*["']([^"']+\.{})["']"#,
        regex::escape(extension)
    ))
}

/// Extract document entries from a directory-index page.
///
/// Hrefs are normalized under `base_path`; the display name is the decoded
/// last segment. Duplicate URLs keep their first occurrence.
pub fn scrape_index(html: &str, pattern: &Regex, base_path: &str) -> Vec<ListingEntry> {
    let mut entries: Vec<ListingEntry> = Vec::new();

    for captures in pattern.captures_iter(html) {
        let Some(href) = captures.get(1) else {
            continue;
        };
        let href = url::normalize_href(href.as_str(), base_path);
        if entries.iter().any(|e| e.url == href) {
            continue;
        }

        let name = url::decode_segment(url::last_segment(&href));
        if name.is_empty() {
            continue;
        }
        entries.push(ListingEntry::new(name, href.into_owned()));
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_manifest_array() {
        let body = r#"[{"name":"A.pdf","url":"/PFE/A.pdf"},{"name":"b.pdf","url":"/PFE/b.pdf","title":"Bee"}]"#;
        let parsed = parse_manifest(body, "/PFE/").unwrap();
        assert_eq!(
            parsed,
            ManifestBody::Listing(vec![
                ListingEntry::new("A.pdf", "/PFE/A.pdf"),
                ListingEntry::new("b.pdf", "/PFE/b.pdf").with_title("Bee"),
            ])
        );
    }

    #[test]
    fn test_parse_manifest_empty_array() {
        let parsed = parse_manifest("[]", "/PFE/").unwrap();
        assert_eq!(parsed, ManifestBody::Listing(Vec::new()));
    }

    #[test]
    fn test_parse_manifest_not_an_array() {
        let parsed = parse_manifest(r#"{"files":[]}"#, "/PFE/").unwrap();
        assert_eq!(parsed, ManifestBody::NotAnArray);
        assert!(parsed.into_entries().is_empty());
    }

    #[test]
    fn test_parse_manifest_invalid_json() {
        assert!(parse_manifest("<html>404</html>", "/PFE/").is_err());
    }

    #[test]
    fn test_parse_manifest_skips_malformed_records() {
        let body = r#"[42, {"title":"orphan"}, {"name": 7, "url": "/PFE/x.pdf"}, {"name":"ok.pdf"}]"#;
        let entries = parse_manifest(body, "/PFE/").unwrap().into_entries();
        assert_eq!(
            entries,
            vec![
                ListingEntry::new("x.pdf", "/PFE/x.pdf"),
                ListingEntry::new("ok.pdf", "/PFE/ok.pdf"),
            ]
        );
    }

    #[test]
    fn test_parse_manifest_drops_repeated_urls() {
        let body = r#"[
            {"name":"a.pdf","url":"/PFE/a.pdf"},
            {"name":"b.pdf","url":"/PFE/b.pdf"},
            {"name":"a.pdf","url":"/PFE/a.pdf","title":"Again"},
            {"name":"a.pdf"}
        ]"#;
        let entries = parse_manifest(body, "/PFE/").unwrap().into_entries();
        assert_eq!(
            entries,
            vec![
                ListingEntry::new("a.pdf", "/PFE/a.pdf"),
                ListingEntry::new("b.pdf", "/PFE/b.pdf"),
            ]
        );
    }

    #[test]
    fn test_scrape_index() {
        let html = r#"
            <a href="../">Parent</a>
            <a href="c.pdf">c.pdf</a>
            <a href='./Rapport%20Final.PDF'>Rapport Final.PDF</a>
            <a href="/archive/old.pdf">old</a>
            <a href="https://cdn.example.org/ext.pdf">ext</a>
            <a href="notes.txt">notes</a>
        "#;
        let pattern = href_pattern("pdf").unwrap();
        let entries = scrape_index(html, &pattern, "/PFE/");
        assert_eq!(
            entries,
            vec![
                ListingEntry::new("c.pdf", "/PFE/c.pdf"),
                ListingEntry::new("Rapport Final.PDF", "/PFE/Rapport%20Final.PDF"),
                ListingEntry::new("old.pdf", "/archive/old.pdf"),
                ListingEntry::new("ext.pdf", "https://cdn.example.org/ext.pdf"),
            ]
        );
    }

    #[test]
    fn test_scrape_index_dedupes_links() {
        let html = r#"<a href="c.pdf"><img src="pdf.png"></a> <a href="c.pdf">c.pdf</a> <a href="./c.pdf">again</a>"#;
        let pattern = href_pattern("pdf").unwrap();
        let entries = scrape_index(html, &pattern, "/PFE/");
        assert_eq!(entries, vec![ListingEntry::new("c.pdf", "/PFE/c.pdf")]);
    }

    #[test]
    fn test_scrape_index_no_matches() {
        let pattern = href_pattern("pdf").unwrap();
        assert!(scrape_index("<html>empty</html>", &pattern, "/PFE/").is_empty());
    }
}
