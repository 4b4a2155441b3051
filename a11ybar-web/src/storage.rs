//! `localStorage` backing for persisted flags.

use crate::dom;
use a11ybar_core::{FlagStore, PRESENCE_MARKER};

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage error: {0}")]
    Storage(String),
}

/// Flags stored as bare keys in the origin's `localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFlagStore;

impl LocalFlagStore {
    fn storage() -> Result<web_sys::Storage, WebStorageError> {
        let win = dom::window()
            .ok_or_else(|| WebStorageError::Unavailable("window unavailable".to_string()))?;
        win.local_storage()
            .map_err(|e| WebStorageError::Unavailable(dom::js_error_message(&e)))?
            .ok_or_else(|| WebStorageError::Unavailable("localStorage disabled".to_string()))
    }
}

impl FlagStore for LocalFlagStore {
    type Error = WebStorageError;

    fn contains(&self, key: &str) -> Result<bool, Self::Error> {
        Self::storage()?
            .get_item(key)
            .map(|value| value.is_some())
            .map_err(|e| WebStorageError::Storage(dom::js_error_message(&e)))
    }

    fn mark(&self, key: &str) -> Result<(), Self::Error> {
        Self::storage()?
            .set_item(key, PRESENCE_MARKER)
            .map_err(|e| WebStorageError::Storage(dom::js_error_message(&e)))
    }

    fn clear(&self, key: &str) -> Result<(), Self::Error> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| WebStorageError::Storage(dom::js_error_message(&e)))
    }
}
