//! Error types for the catalog pipeline.
//!
//! - [`FetchError`] - Transport failures of a single discovery fetch
//! - [`DiscoveryError`] - Resolution outcome when no listing could be obtained
//! - [`PreviewError`] - Browser refused a preview side effect
//! - [`PreferenceError`] - Key-value preference store failures

use thiserror::Error;

/// Network/fetch-related errors for a single GET.
///
/// Every variant is absorbed by the resolver and turned into a fallthrough
/// to the next strategy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("failed to create request")]
    RequestCreationFailed,
    /// Network request failed (offline, CORS, etc.)
    #[error("network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("failed to read response")]
    ResponseReadFailed,
    /// Response body was not text
    #[error("invalid response content")]
    InvalidContent,
}

/// Failure of a full discovery pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiscoveryError {
    /// Neither the manifest nor the directory index produced entries.
    #[error(
        "no documents found automatically: add `{manifest_url}` by hand or regenerate it with `{command}`"
    )]
    Exhausted {
        manifest_url: String,
        index_url: String,
        command: String,
    },
    /// The configured document extension does not yield a valid href pattern.
    #[error("invalid document extension pattern: {0}")]
    InvalidPattern(String),
}

impl DiscoveryError {
    /// Remediation command shown next to the empty state, if any.
    pub fn command(&self) -> Option<&str> {
        match self {
            Self::Exhausted { command, .. } => Some(command),
            Self::InvalidPattern(_) => None,
        }
    }
}

/// Preview side-effect failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreviewError {
    /// A new browsing context could not be opened (popup blocker, sandbox).
    #[error("new browsing context was blocked")]
    Blocked,
    /// The fullscreen request was rejected.
    #[error("fullscreen unavailable: {0}")]
    Fullscreen(String),
}

/// Preference store errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreferenceError {
    /// localStorage not available.
    #[error("localStorage not available")]
    StorageUnavailable,
    /// Failed to save to localStorage.
    #[error("failed to save preference `{0}`")]
    SaveFailed(String),
}
