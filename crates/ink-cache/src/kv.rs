//! Key-Value store wrapper with automatic serialization.
//!
//! On wasm32 this wraps Spin's Key-Value Store. On native targets it is
//! backed by a process-local map with the same behavior, so session and
//! cart round-trips are exercised by plain `cargo test` without a Spin
//! host.

use serde::{de::DeserializeOwned, Serialize};

use crate::CacheError;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::collections::HashMap;
    use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

    type StoreMap = HashMap<String, Vec<u8>>;

    // One map per named store, shared across Cache handles like Spin's
    // stores are shared across component invocations.
    static STORES: OnceLock<Mutex<HashMap<String, StoreMap>>> = OnceLock::new();

    pub(super) fn stores() -> MutexGuard<'static, HashMap<String, StoreMap>> {
        STORES
            .get_or_init(|| Mutex::new(HashMap::new()))
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Type-safe cache backed by Spin's Key-Value Store.
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`.
pub struct Cache {
    #[cfg(target_arch = "wasm32")]
    store: spin_sdk::key_value::Store,
    #[cfg(not(target_arch = "wasm32"))]
    name: String,
}

#[cfg(target_arch = "wasm32")]
impl Cache {
    /// Open the default Key-Value store.
    pub fn open_default() -> Result<Self, CacheError> {
        let store = spin_sdk::key_value::Store::open_default()
            .map_err(|e| CacheError::OpenError(e.to_string()))?;
        Ok(Self { store })
    }

    /// Open a named Key-Value store.
    pub fn open(name: &str) -> Result<Self, CacheError> {
        let store = spin_sdk::key_value::Store::open(name)
            .map_err(|e| CacheError::OpenError(e.to_string()))?;
        Ok(Self { store })
    }

    /// Get a value. Returns `None` if the key doesn't exist.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.store.get(key) {
            Ok(Some(bytes)) => {
                let value: T = serde_json::from_slice(&bytes)?;
                Ok(Some(value))
            }
            Ok(None) => Ok(None),
            Err(e) => Err(CacheError::StoreError(e.to_string())),
        }
    }

    /// Set a value.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let bytes = serde_json::to_vec(value)?;
        self.store
            .set(key, &bytes)
            .map_err(|e| CacheError::StoreError(e.to_string()))
    }

    /// Delete a value.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.store
            .delete(key)
            .map_err(|e| CacheError::StoreError(e.to_string()))
    }

    /// Check if a key exists.
    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        self.store
            .exists(key)
            .map_err(|e| CacheError::StoreError(e.to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Cache {
    /// Open the default Key-Value store.
    pub fn open_default() -> Result<Self, CacheError> {
        Self::open("default")
    }

    /// Open a named Key-Value store.
    pub fn open(name: &str) -> Result<Self, CacheError> {
        Ok(Self {
            name: name.to_string(),
        })
    }

    /// Get a value. Returns `None` if the key doesn't exist.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        let stores = native::stores();
        match stores.get(&self.name).and_then(|s| s.get(key)) {
            Some(bytes) => {
                let value: T = serde_json::from_slice(bytes)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a value.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let bytes = serde_json::to_vec(value)?;
        native::stores()
            .entry(self.name.clone())
            .or_default()
            .insert(key.to_string(), bytes);
        Ok(())
    }

    /// Delete a value.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        if let Some(store) = native::stores().get_mut(&self.name) {
            store.remove(key);
        }
        Ok(())
    }

    /// Check if a key exists.
    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        let stores = native::stores();
        Ok(stores
            .get(&self.name)
            .map(|s| s.contains_key(key))
            .unwrap_or(false))
    }
}

/// Helper to build cache keys with namespacing.
///
/// ```
/// use ink_cache::cache_key;
/// let key = cache_key!("session", "sess_abc");
/// assert_eq!(key, "session:sess_abc");
/// ```
#[macro_export]
macro_rules! cache_key {
    ($prefix:expr, $($part:expr),+) => {{
        let mut key = String::from($prefix);
        $(
            key.push(':');
            key.push_str(&$part.to_string());
        )+
        key
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Payload {
        name: String,
        count: u32,
    }

    #[test]
    fn test_set_get_round_trip() {
        let cache = Cache::open("kv-test-round-trip").unwrap();
        let value = Payload {
            name: "encres".to_string(),
            count: 3,
        };
        cache.set("k1", &value).unwrap();

        let loaded: Option<Payload> = cache.get("k1").unwrap();
        assert_eq!(loaded, Some(value));
    }

    #[test]
    fn test_get_missing_returns_none() {
        let cache = Cache::open("kv-test-missing").unwrap();
        let loaded: Option<Payload> = cache.get("absent").unwrap();
        assert_eq!(loaded, None);
    }

    #[test]
    fn test_delete_and_exists() {
        let cache = Cache::open("kv-test-delete").unwrap();
        cache.set("k1", &1_u32).unwrap();
        assert!(cache.exists("k1").unwrap());

        cache.delete("k1").unwrap();
        assert!(!cache.exists("k1").unwrap());
        // Deleting again is harmless.
        cache.delete("k1").unwrap();
    }

    #[test]
    fn test_named_stores_are_isolated() {
        let a = Cache::open("kv-test-iso-a").unwrap();
        let b = Cache::open("kv-test-iso-b").unwrap();
        a.set("shared-key", &"a".to_string()).unwrap();

        let from_b: Option<String> = b.get("shared-key").unwrap();
        assert_eq!(from_b, None);
    }

    #[test]
    fn test_cache_key_macro() {
        assert_eq!(cache_key!("session", "abc"), "session:abc");
        assert_eq!(cache_key!("cart", "user", 42), "cart:user:42");
    }
}
