//! Key-value persistence behind every stored preference and record list.
//!
//! SYSTEM CONTEXT
//! ==============
//! All state in `crate::state` survives reloads through a [`Store`]. In the
//! browser the backend is `localStorage`; tests and server rendering use the
//! in-memory backend so the same store logic runs natively.
//!
//! DESIGN
//! ======
//! Every value is JSON encoded, preferences included. Reads go through one
//! safe path: a missing key or a value that no longer parses yields the
//! caller's fallback. A corrupted value is logged and left in place; the next
//! successful write replaces it.
//!
//! ERROR HANDLING
//! ==============
//! Writes report [`StorageError`] (quota, serialization, unavailable
//! backend). Callers log and carry on; a failed write never blocks the UI.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use serde::de::DeserializeOwned;

// =============================================================================
// KEYS
// =============================================================================

pub mod keys {
    pub const PROFILE: &str = "user_profile_v2";
    pub const LEGACY_XP: &str = "user_xp";
    pub const THEME: &str = "app_theme";
    pub const LANGUAGE: &str = "app_lang";
    pub const CURRENCY: &str = "wise_currency";
    pub const FAVORITES: &str = "favorites";
    pub const HISTORY: &str = "tool_history";
    pub const RECENTS: &str = "recents";
    pub const EXPENSES: &str = "expenses";
    pub const TODOS: &str = "todos";
    pub const HABITS: &str = "habits";
    pub const GOALS: &str = "goals";
    pub const TIME_BLOCKS: &str = "timeblocks";
    pub const ASSIGNMENTS: &str = "assignments";
    pub const DAILY_NOTE: &str = "dailyNote";
    pub const DAY_SAVINGS: &str = "daySavings";
}

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage is not available in this environment")]
    Unavailable,
    #[error("storage rejected write for {key}: {reason}")]
    Write { key: String, reason: String },
    #[error("failed to encode value for {key}: {source}")]
    Encode { key: String, source: serde_json::Error },
    #[error("stored value for {key} is not valid: {source}")]
    Decode { key: String, source: serde_json::Error },
}

// =============================================================================
// BACKENDS
// =============================================================================

/// Raw string storage. Implementations must be cheap to call repeatedly.
pub trait KeyValueBackend: Send + Sync {
    fn get_raw(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend refuses the write.
    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str);
}

/// Browser `localStorage`. The handle is looked up on each call so the
/// backend itself stays `Send + Sync`; outside the browser every read misses.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueBackend for LocalStorage {
    fn get_raw(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage.set_item(key, value).map_err(|e| StorageError::Write {
                key: key.to_owned(),
                reason: format!("{e:?}"),
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// Process-local map, shared between clones.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueBackend for MemoryStorage {
    fn get_raw(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.get(key).cloned()
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.remove(key);
    }
}

// =============================================================================
// STORE
// =============================================================================

/// Cloneable JSON view over a backend.
#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn KeyValueBackend>,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").finish_non_exhaustive()
    }
}

impl Store {
    pub fn new(backend: impl KeyValueBackend + 'static) -> Self {
        Self { backend: Arc::new(backend) }
    }

    /// Store backed by `localStorage` in the browser.
    #[must_use]
    pub fn browser() -> Self {
        Self::new(LocalStorage)
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::new())
    }

    /// Decode `key`, distinguishing a missing key from a corrupted value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Decode`] when the stored text is not valid
    /// JSON for `T`.
    pub fn try_get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.backend.get_raw(key) else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StorageError::Decode { key: key.to_owned(), source })
    }

    /// Decode `key`, or return `fallback` when it is missing or unreadable.
    pub fn get<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        match self.try_get(key) {
            Ok(Some(value)) => value,
            Ok(None) => fallback,
            Err(e) => {
                log::warn!("storage: using default for {key}: {e}");
                fallback
            }
        }
    }

    /// # Errors
    ///
    /// Returns [`StorageError`] when encoding fails or the backend refuses
    /// the write.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value).map_err(|source| StorageError::Encode { key: key.to_owned(), source })?;
        self.backend.set_raw(key, &raw)
    }

    /// Write and log instead of returning the error.
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        if let Err(e) = self.set(key, value) {
            log::warn!("storage: write failed: {e}");
        }
    }

    pub fn remove(&self, key: &str) {
        self.backend.remove(key);
    }

    /// Raw text under `key`, bypassing JSON decoding.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.backend.get_raw(key)
    }
}
