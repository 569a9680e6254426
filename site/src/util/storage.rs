//! Key-value preference storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The theme controller persists one string under one key. Access goes
//! through [`PreferenceStore`] so the controller can be exercised against an
//! in-memory store in tests and against `localStorage` in the browser.

/// Failure writing a preference. Reads never fail; a missing or unreadable
/// value is simply absent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("preference storage is unavailable")]
    Unavailable,
    #[error("preference write rejected: {0}")]
    Rejected(String),
}

pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing store is missing or refuses
    /// the write (quota, private browsing).
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Browser `localStorage`. Outside `hydrate` builds it stores nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
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

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|e| StorageError::Rejected(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }
}
