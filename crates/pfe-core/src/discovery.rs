//! Discovery resolver.
//!
//! Obtains the document listing without a backend by trying, in order:
//!
//! 1. the generated manifest (`files.json`),
//! 2. the server's directory index, scraped for document links,
//!
//! and stops at the first strategy that succeeds. Transport failures are
//! absorbed and only the exhaustion of both strategies is reported.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use regex::Regex;

use crate::entry::ListingEntry;
use crate::error::{DiscoveryError, FetchError};
use crate::manifest::{self, ManifestBody};

/// Where the resolver looks for documents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiscoveryConfig {
    /// Generated manifest resource.
    pub manifest_url: String,
    /// Directory listing resource.
    pub index_url: String,
    /// Public base path prepended to relative document names.
    pub base_path: String,
    /// Document extension, without the dot.
    pub extension: String,
    /// Command suggested to the user when nothing was found.
    pub regenerate_command: String,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            manifest_url: "/PFE/files.json".to_string(),
            index_url: "/PFE/".to_string(),
            base_path: "/PFE/".to_string(),
            extension: "pdf".to_string(),
            regenerate_command: "cargo run -p pfe-cli --bin pfe-manifest".to_string(),
        }
    }
}

/// Network seam used by the resolver.
///
/// Implementations must bypass HTTP caches and map any non-2xx status to
/// [`FetchError::HttpError`].
#[allow(async_fn_in_trait)]
pub trait Fetcher {
    /// GET `url` and return the body as text.
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError>;
}

/// Strategy that produced a listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiscoverySource {
    Manifest,
    DirectoryIndex,
}

/// Successful resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Discovered {
    pub source: DiscoverySource,
    pub entries: Vec<ListingEntry>,
}

/// Ordered fallback chain over a [`Fetcher`].
pub struct Resolver<F> {
    config: DiscoveryConfig,
    fetcher: F,
    href: Regex,
}

impl<F: Fetcher> Resolver<F> {
    /// Create a resolver. Fails only if the configured extension cannot be
    /// turned into an href pattern.
    pub fn new(config: DiscoveryConfig, fetcher: F) -> Result<Self, DiscoveryError> {
        let href = manifest::href_pattern(&config.extension)
            .map_err(|e| DiscoveryError::InvalidPattern(e.to_string()))?;
        Ok(Self {
            config,
            fetcher,
            href,
        })
    }

    pub fn config(&self) -> &DiscoveryConfig {
        &self.config
    }

    /// Run the fallback chain once.
    ///
    /// Strategy 2 never starts before strategy 1 has settled.
    pub async fn resolve(&self) -> Result<Discovered, DiscoveryError> {
        if let Some(entries) = self.from_manifest().await {
            return Ok(Discovered {
                source: DiscoverySource::Manifest,
                entries,
            });
        }

        if let Some(entries) = self.from_directory_index().await {
            return Ok(Discovered {
                source: DiscoverySource::DirectoryIndex,
                entries,
            });
        }

        tracing::warn!(
            manifest = %self.config.manifest_url,
            index = %self.config.index_url,
            "document discovery exhausted"
        );
        Err(DiscoveryError::Exhausted {
            manifest_url: self.config.manifest_url.clone(),
            index_url: self.config.index_url.clone(),
            command: self.config.regenerate_command.clone(),
        })
    }

    /// Strategy 1. `Some` (possibly empty) on HTTP success with a JSON body.
    async fn from_manifest(&self) -> Option<Vec<ListingEntry>> {
        let body = match self.fetcher.fetch_text(&self.config.manifest_url).await {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!(url = %self.config.manifest_url, error = %e, "manifest unavailable");
                return None;
            }
        };

        match manifest::parse_manifest(&body, &self.config.base_path) {
            Ok(ManifestBody::Listing(entries)) => Some(entries),
            Ok(ManifestBody::NotAnArray) => {
                tracing::warn!(url = %self.config.manifest_url, "manifest is not a JSON array, using an empty listing");
                Some(Vec::new())
            }
            Err(e) => {
                tracing::debug!(url = %self.config.manifest_url, error = %e, "manifest is not JSON");
                None
            }
        }
    }

    /// Strategy 2. `Some` only when at least one document link was found.
    async fn from_directory_index(&self) -> Option<Vec<ListingEntry>> {
        let html = match self.fetcher.fetch_text(&self.config.index_url).await {
            Ok(html) => html,
            Err(e) => {
                tracing::debug!(url = %self.config.index_url, error = %e, "directory index unavailable");
                return None;
            }
        };

        let entries = manifest::scrape_index(&html, &self.href, &self.config.base_path);
        if entries.is_empty() {
            tracing::debug!(url = %self.config.index_url, "directory index lists no documents");
            None
        } else {
            Some(entries)
        }
    }
}

// =============================================================================
// Mount lifecycle
// =============================================================================

/// Teardown flag shared between a mounted view and its async work.
///
/// Cloning shares the flag. Once torn down it stays torn down.
#[derive(Clone, Debug)]
pub struct MountGuard(Arc<AtomicBool>);

impl MountGuard {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    /// Mark the owning view as destroyed.
    pub fn tear_down(&self) {
        self.0.store(false, Ordering::Release);
    }

    pub fn is_live(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve and hand the outcome to `apply`, unless the view was torn down
/// while the resolver was suspended.
///
/// Returns `true` if `apply` ran.
pub async fn populate<F, A>(resolver: &Resolver<F>, guard: &MountGuard, apply: A) -> bool
where
    F: Fetcher,
    A: FnOnce(Result<Discovered, DiscoveryError>),
{
    let outcome = resolver.resolve().await;

    if !guard.is_live() {
        tracing::debug!("view torn down during discovery, discarding result");
        return false;
    }

    apply(outcome);
    true
}
