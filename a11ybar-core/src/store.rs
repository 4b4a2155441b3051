//! Persistence of feature flags.
//!
//! A flag is stored as key presence: the key exists while the flag is on and
//! is deleted when it goes off. The value written is a marker and never read.

use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;

/// Value written under a key while its flag is on.
pub const PRESENCE_MARKER: &str = "1";

/// Key/value backend for persisted flags.
/// Platform-specific implementations should provide this
pub trait FlagStore {
    type Error: std::error::Error + 'static;

    /// Whether `key` is present.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn contains(&self, key: &str) -> Result<bool, Self::Error>;

    /// Write the presence marker under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    fn mark(&self, key: &str) -> Result<(), Self::Error>;

    /// Delete `key`. Deleting a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the delete.
    fn clear(&self, key: &str) -> Result<(), Self::Error>;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MemoryStoreError {
    #[error("storage disabled")]
    Disabled,
}

/// In-memory [`FlagStore`]. Can be switched off to behave like a browser with
/// storage disabled.
#[derive(Debug, Default)]
pub struct MemoryStore {
    keys: RefCell<BTreeSet<String>>,
    disabled: Cell<bool>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that fails every call.
    #[must_use]
    pub fn disabled() -> Self {
        let store = Self::default();
        store.disabled.set(true);
        store
    }

    pub fn set_disabled(&self, disabled: bool) {
        self.disabled.set(disabled);
    }

    /// Snapshot of the keys currently present.
    #[must_use]
    pub fn keys(&self) -> BTreeSet<String> {
        self.keys.borrow().clone()
    }

    fn check(&self) -> Result<(), MemoryStoreError> {
        if self.disabled.get() {
            Err(MemoryStoreError::Disabled)
        } else {
            Ok(())
        }
    }
}

impl FlagStore for MemoryStore {
    type Error = MemoryStoreError;

    fn contains(&self, key: &str) -> Result<bool, Self::Error> {
        self.check()?;
        Ok(self.keys.borrow().contains(key))
    }

    fn mark(&self, key: &str) -> Result<(), Self::Error> {
        self.check()?;
        self.keys.borrow_mut().insert(key.to_string());
        Ok(())
    }

    fn clear(&self, key: &str) -> Result<(), Self::Error> {
        self.check()?;
        self.keys.borrow_mut().remove(key);
        Ok(())
    }
}

impl<S: FlagStore + ?Sized> FlagStore for &S {
    type Error = S::Error;

    fn contains(&self, key: &str) -> Result<bool, Self::Error> {
        (**self).contains(key)
    }

    fn mark(&self, key: &str) -> Result<(), Self::Error> {
        (**self).mark(key)
    }

    fn clear(&self, key: &str) -> Result<(), Self::Error> {
        (**self).clear(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_and_clear_toggle_presence() {
        let store = MemoryStore::new();
        assert_eq!(store.contains("bigCursor"), Ok(false));
        store.mark("bigCursor").unwrap();
        assert_eq!(store.contains("bigCursor"), Ok(true));
        store.clear("bigCursor").unwrap();
        store.clear("bigCursor").unwrap();
        assert_eq!(store.contains("bigCursor"), Ok(false));
    }

    #[test]
    fn disabled_store_fails_every_call() {
        let store = MemoryStore::disabled();
        assert_eq!(store.contains("magnify"), Err(MemoryStoreError::Disabled));
        assert_eq!(store.mark("magnify"), Err(MemoryStoreError::Disabled));
        assert_eq!(store.clear("magnify"), Err(MemoryStoreError::Disabled));
        store.set_disabled(false);
        assert_eq!(store.contains("magnify"), Ok(false));
    }
}
