//! localStorage-backed preference store.

use pfe_core::{PreferenceError, PreferenceStore};

use super::dom;

/// [`PreferenceStore`] over `window.localStorage`.
///
/// Reads return `None` when storage is unavailable (private mode, sandboxed
/// iframes), so preferences fall back to environment and defaults.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Option<String> {
        dom::local_storage()?.get_item(key).ok()?
    }

    fn save(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let storage = dom::local_storage().ok_or(PreferenceError::StorageUnavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| PreferenceError::SaveFailed(key.to_string()))
    }
}
