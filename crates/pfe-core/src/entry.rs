//! Listing entries: one record per discoverable document.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::url;

/// One discoverable document.
///
/// Entries are produced once by discovery (or by the manifest generator) and
/// never mutated afterwards; the catalog only reorders copies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingEntry {
    /// File identifier, also the display fallback.
    pub name: String,
    /// Resolvable reference (absolute path or full URL).
    pub url: String,
    /// Human-readable label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Pre-rendered preview image reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl ListingEntry {
    /// Create an entry with only the required fields.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            title: None,
            thumbnail: None,
        }
    }

    /// Builder-style title setter.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Key used for sorting and filtering: `title`, falling back to `name`.
    pub fn display_key(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }

    /// Title shown on the card.
    ///
    /// Uses `title` when present, otherwise derives one from `name`.
    pub fn display_title(&self, extension: &str) -> String {
        match &self.title {
            Some(title) => title.clone(),
            None => title_from_filename(&self.name, extension),
        }
    }
}

/// Turn a file name into a readable title.
///
/// Strips `.{extension}` (any case) and collapses runs of `-` / `_` into a
/// single space: `"rapport_final--v2.PDF"` becomes `"rapport final v2"`.
pub fn title_from_filename(filename: &str, extension: &str) -> String {
    let suffix_len = extension.len() + 1;
    let stem = match filename.len().checked_sub(suffix_len) {
        Some(cut)
            if filename.is_char_boundary(cut)
                && filename[cut..].starts_with('.')
                && filename[cut + 1..].eq_ignore_ascii_case(extension) =>
        {
            &filename[..cut]
        }
        _ => filename,
    };

    let mut title = String::with_capacity(stem.len());
    let mut in_separator = false;
    for c in stem.chars() {
        if c == '-' || c == '_' {
            if !in_separator {
                title.push(' ');
                in_separator = true;
            }
        } else {
            title.push(c);
            in_separator = false;
        }
    }
    title
}

/// Loosely-typed manifest record, before validation.
///
/// Every field is optional and a field of the wrong JSON type reads as
/// absent, so one bad field never costs the rest of its record.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawEntry {
    #[serde(default, deserialize_with = "lenient_string")]
    name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    thumbnail: Option<String>,
}

/// Keep string values, drop anything else.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(value) => Some(value),
        _ => None,
    })
}

impl RawEntry {
    /// Fill in whatever is missing, or give up if neither `name` nor `url`
    /// is usable.
    pub(crate) fn into_entry(self, base_path: &str) -> Option<ListingEntry> {
        let name = non_empty(self.name);
        let url = non_empty(self.url);

        let (name, url) = match (name, url) {
            (Some(name), Some(url)) => (name, url),
            (Some(name), None) => {
                let url = url::document_url(base_path, &name);
                (name, url)
            }
            (None, Some(url)) => {
                let name = url::decode_segment(url::last_segment(&url));
                if name.is_empty() {
                    return None;
                }
                (name, url)
            }
            (None, None) => return None,
        };

        Some(ListingEntry {
            name,
            url,
            title: non_empty(self.title),
            thumbnail: non_empty(self.thumbnail),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
