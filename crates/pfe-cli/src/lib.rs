//! Build-time manifest generator.
//!
//! Scans a directory for documents and writes the `files.json` listing
//! consumed by the web catalog's manifest strategy.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use pfe_core::ListingEntry;
use pfe_core::url::document_url;
use thiserror::Error;

/// Generator settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManifestOptions {
    /// Public path the documents are served under.
    pub base_path: String,
    /// Document extension, without the dot.
    pub extension: String,
}

impl Default for ManifestOptions {
    fn default() -> Self {
        Self {
            base_path: "/PFE/".to_string(),
            extension: "pdf".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("directory not found: {}", .0.display())]
    SourceMissing(PathBuf),
    #[error("failed to read {}: {source}", path.display())]
    ReadDir { path: PathBuf, source: io::Error },
    #[error("failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// List the documents in `source`.
///
/// Order is whatever the directory enumeration yields; the catalog sorts
/// for display.
pub fn collect_entries(
    source: &Path,
    options: &ManifestOptions,
) -> Result<Vec<ListingEntry>, GenerateError> {
    if !source.is_dir() {
        return Err(GenerateError::SourceMissing(source.to_path_buf()));
    }

    let read_err = |e| GenerateError::ReadDir {
        path: source.to_path_buf(),
        source: e,
    };
    let suffix = format!(".{}", options.extension.to_lowercase());

    let mut entries = Vec::new();
    for dir_entry in fs::read_dir(source).map_err(read_err)? {
        let dir_entry = dir_entry.map_err(read_err)?;

        let file_name = dir_entry.file_name();
        let Some(name) = file_name.to_str() else {
            tracing::warn!(name = ?file_name, "skipping file with a non UTF-8 name");
            continue;
        };
        if !name.to_lowercase().ends_with(&suffix) {
            continue;
        }
        if !dir_entry.file_type().map_err(read_err)?.is_file() {
            continue;
        }

        tracing::debug!(name, "found document");
        entries.push(ListingEntry::new(
            name,
            document_url(&options.base_path, name),
        ));
    }

    Ok(entries)
}

/// Render entries as pretty-printed JSON.
pub fn render_manifest(entries: &[ListingEntry]) -> Result<String, GenerateError> {
    Ok(serde_json::to_string_pretty(entries)?)
}

/// Scan `source` and write the manifest to `output`.
///
/// Returns the number of documents listed.
pub fn generate(
    source: &Path,
    output: &Path,
    options: &ManifestOptions,
) -> Result<usize, GenerateError> {
    let entries = collect_entries(source, options)?;
    let json = render_manifest(&entries)?;

    fs::write(output, json).map_err(|e| GenerateError::Write {
        path: output.to_path_buf(),
        source: e,
    })?;

    Ok(entries.len())
}
