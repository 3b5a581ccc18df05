//! Key-value storage backing the persisted session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login page writes the session, the navigation guard and HTTP client
//! read it, and logout clears it. All of them go through [`SessionStore`] so
//! the browser's `localStorage` can be swapped for [`MemoryStore`] in tests.
//!
//! TRADE-OFFS
//! ==========
//! Storage writes are best-effort: a full or disabled `localStorage` is
//! logged and ignored rather than surfaced to callers.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Synchronous string key-value store scoped to the current origin.
pub trait SessionStore {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);
    /// Delete `key` if present.
    fn remove(&self, key: &str);
}

impl<S: SessionStore + ?Sized> SessionStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }
}

/// Browser `localStorage` for the page origin.
///
/// The storage handle is looked up on every call, so the type itself carries
/// no browser objects and can live in Leptos context. Outside the `csr`
/// build every operation is a no-op.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LocalStorageStore;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                leptos::logging::warn!("localStorage unavailable; dropping write to {key}");
                return;
            };
            if storage.set_item(key, value).is_err() {
                leptos::logging::warn!("localStorage rejected write to {key}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}

/// In-process store. Clones share the same underlying map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `pairs`.
    pub fn with_entries<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::new();
        for (key, value) in pairs {
            store.set(key, value);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned map is still a valid map; keep serving it.
        self.entries.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.lock().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.lock().remove(key);
    }
}
