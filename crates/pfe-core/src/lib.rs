//! Platform-independent core of the PFE catalog.
//!
//! - [`discovery`] - Manifest / directory-index fallback chain
//! - [`catalog`] - Search, sort and pagination over discovered entries
//! - [`preview`] - Inline vs. new-tab preview state machine
//! - [`prefs`] - Theme and locale resolution
//! - [`i18n`] - Catalog UI strings
//!
//! Browser access is kept behind the [`Fetcher`], [`PreviewHost`] and
//! [`PreferenceStore`] traits so everything here runs natively in tests.

pub mod catalog;
pub mod discovery;
mod entry;
pub mod error;
pub mod i18n;
pub mod manifest;
pub mod prefs;
pub mod preview;
pub mod thumbnail;
pub mod url;

pub use catalog::{CatalogPage, CatalogState, derive_page};
pub use discovery::{
    Discovered, DiscoveryConfig, DiscoverySource, Fetcher, MountGuard, Resolver, populate,
};
pub use entry::{ListingEntry, title_from_filename};
pub use error::{DiscoveryError, FetchError, PreferenceError, PreviewError};
pub use prefs::{EnvironmentPreferences, Locale, PreferenceStore, Preferences, Theme};
pub use preview::{
    EnvironmentClass, EnvironmentSignals, PreviewController, PreviewHost, PreviewState,
    classify_environment, focus_trap_target,
};
pub use thumbnail::{NoThumbnails, Thumbnail, ThumbnailProvider};
