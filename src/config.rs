//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

use pfe_core::DiscoveryConfig;

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the navbar.
pub const APP_NAME: &str = "PFE Book Hub";

// =============================================================================
// Discovery Configuration
// =============================================================================

/// Public path the documents are served under.
pub const PFE_BASE_PATH: &str = "/PFE/";

/// Generated manifest, fetched first.
pub const MANIFEST_URL: &str = "/PFE/files.json";

/// Directory index, scraped when the manifest is unavailable.
pub const INDEX_URL: &str = "/PFE/";

/// Document extension (without the dot).
pub const DOCUMENT_EXTENSION: &str = "pdf";

/// Command shown in the empty state to regenerate the manifest.
pub const REGENERATE_COMMAND: &str = "cargo run -p pfe-cli --bin pfe-manifest";

/// Interval between background catalog refreshes, in milliseconds.
pub const CATALOG_REFRESH_MS: u64 = 5 * 60 * 1000;

/// Build the resolver configuration from the constants above.
pub fn discovery_config() -> DiscoveryConfig {
    DiscoveryConfig {
        manifest_url: MANIFEST_URL.to_string(),
        index_url: INDEX_URL.to_string(),
        base_path: PFE_BASE_PATH.to_string(),
        extension: DOCUMENT_EXTENSION.to_string(),
        regenerate_command: REGENERATE_COMMAND.to_string(),
    }
}

// =============================================================================
// Catalog Configuration
// =============================================================================

/// Number of cards per catalog page.
pub const PAGE_SIZE: usize = 12;

/// DOM id of the preview overlay content (fullscreen target).
pub const PREVIEW_CONTENT_ID: &str = "pfe-preview-content";

// =============================================================================
// Service Worker
// =============================================================================

/// Service worker script, registered in release builds only.
pub const SERVICE_WORKER_URL: &str = "/sw.js";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
