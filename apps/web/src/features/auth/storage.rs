use portal_auth::{KeyValueStore, StorageError};
use web_sys::Storage;

/// `window.localStorage`. Every call re-resolves the handle; a missing or
/// blocked store reads as empty.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn handle() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::handle()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::handle().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|err| StorageError::Write {
                key: key.to_string(),
                reason: format!("{err:?}"),
            })
    }

    fn remove(&self, key: &str) {
        let Some(storage) = Self::handle() else {
            tracing::warn!(key, "localStorage unavailable, entry not removed");
            return;
        };
        if let Err(err) = storage.remove_item(key) {
            tracing::warn!(key, error = ?err, "failed to remove localStorage entry");
        }
    }
}
