//! Browser adapters and utilities.
//!
//! Provides:
//! - [`BrowserFetcher`] - Cache-bypassing Fetch API client for discovery
//! - [`LocalStore`] - localStorage preference store
//! - [`dom`] - Window, document and body helpers
//! - [`logging`] - `tracing` subscriber writing to the browser console
//! - [`register_service_worker`] - Release-only service worker hook

pub mod dom;
mod fetch;
pub mod logging;
mod storage;
mod sw;

pub use fetch::BrowserFetcher;
pub use storage::LocalStore;
pub use sw::register_service_worker;
