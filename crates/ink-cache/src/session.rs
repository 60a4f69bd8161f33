//! Visitor sessions on top of the Key-Value store.
//!
//! A session carries one visitor's state (the storefront stores the cart
//! snapshot there) under `session:{id}`, with a version counter for
//! optimistic updates.

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{cache_key, Cache, CacheError};

/// Maximum retry attempts for optimistic concurrency control.
const MAX_UPDATE_RETRIES: u32 = 3;

/// Length of a generated session ID: "sess_" plus 18 random bytes in
/// unpadded URL-safe base64 (24 chars).
const SESSION_ID_LEN: usize = 29;

/// A unique session identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    /// Create a session ID from a trusted string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new cryptographically secure session ID.
    pub fn generate() -> Self {
        use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
        use rand::Rng;

        let bytes: [u8; 18] = rand::thread_rng().gen();
        Self(format!("sess_{}", URL_SAFE_NO_PAD.encode(bytes)))
    }

    /// Parse an untrusted string (e.g., a cookie value) as a session ID.
    ///
    /// Accepts exactly the shape `generate` produces; anything else —
    /// wrong length, wrong prefix, characters outside the URL-safe
    /// base64 alphabet — is rejected so arbitrary client input never
    /// becomes part of a store key.
    pub fn parse(value: &str) -> Option<Self> {
        let rest = value.strip_prefix("sess_")?;
        if value.len() != SESSION_ID_LEN {
            return None;
        }
        if !rest
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
        {
            return None;
        }
        Some(Self(value.to_string()))
    }

    /// Get the session ID as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SessionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Session record stored in the cache, generic over the payload type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData<T> {
    /// The session ID.
    pub id: SessionId,
    /// The payload.
    pub data: T,
    /// Version for optimistic concurrency control.
    pub version: u64,
    /// When the session was created (Unix timestamp).
    pub created_at: u64,
    /// When the session was last written (Unix timestamp).
    pub last_accessed: u64,
}

/// Session manager over a Key-Value store.
pub struct Session<T> {
    cache: Cache,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Session<T>
where
    T: Serialize + DeserializeOwned + Default + Clone,
{
    /// Create a session manager using the default store.
    pub fn new() -> Result<Self, CacheError> {
        Ok(Self {
            cache: Cache::open_default()?,
            _phantom: std::marker::PhantomData,
        })
    }

    /// Create a session manager using a named store.
    pub fn with_store(name: &str) -> Result<Self, CacheError> {
        Ok(Self {
            cache: Cache::open(name)?,
            _phantom: std::marker::PhantomData,
        })
    }

    /// Get the payload if the session exists.
    pub fn get(&self, id: &SessionId) -> Result<Option<T>, CacheError> {
        let key = session_key(id);
        Ok(self.cache.get::<SessionData<T>>(&key)?.map(|s| s.data))
    }

    /// Get the payload, creating the session with a default payload on
    /// first sight. After this call the record (and its `created_at`)
    /// exists in the store.
    pub fn get_or_create(&self, id: &SessionId) -> Result<T, CacheError> {
        let key = session_key(id);
        if let Some(existing) = self.cache.get::<SessionData<T>>(&key)? {
            return Ok(existing.data);
        }
        let data = T::default();
        self.write(id, &data, 1, None)?;
        Ok(data)
    }

    /// Set the payload (unconditional write, version bumped).
    pub fn set(&self, id: &SessionId, data: &T) -> Result<(), CacheError> {
        let key = session_key(id);
        let current = self.cache.get::<SessionData<T>>(&key)?;
        let version = current.as_ref().map(|s| s.version + 1).unwrap_or(1);
        let created_at = current.map(|s| s.created_at);
        self.write(id, data, version, created_at)
    }

    /// Update the payload with a closure, using optimistic concurrency
    /// control: read, apply, write with a bumped version, verify; retried
    /// up to three times if a concurrent writer got in between.
    pub fn update<F>(&self, id: &SessionId, f: F) -> Result<T, CacheError>
    where
        F: Fn(&mut T),
    {
        let key = session_key(id);

        for _attempt in 0..MAX_UPDATE_RETRIES {
            let current = self.cache.get::<SessionData<T>>(&key)?;
            let (mut data, expected_version, created_at) = match current {
                Some(s) => (s.data, s.version, Some(s.created_at)),
                None => (T::default(), 0, None),
            };

            f(&mut data);

            let new_version = expected_version + 1;
            self.write(id, &data, new_version, created_at)?;

            // Without CAS in the store this read-back is the best
            // verification available.
            match self.cache.get::<SessionData<T>>(&key)? {
                Some(written) if written.version != new_version => continue,
                _ => return Ok(data),
            }
        }

        Err(CacheError::ConcurrentModification(
            "max retries exceeded".to_string(),
        ))
    }

    /// Delete a session.
    pub fn delete(&self, id: &SessionId) -> Result<(), CacheError> {
        self.cache.delete(&session_key(id))
    }

    /// Check if a session exists.
    pub fn exists(&self, id: &SessionId) -> Result<bool, CacheError> {
        self.cache.exists(&session_key(id))
    }

    fn write(
        &self,
        id: &SessionId,
        data: &T,
        version: u64,
        created_at: Option<u64>,
    ) -> Result<(), CacheError> {
        let now = current_timestamp();
        let record = SessionData {
            id: id.clone(),
            data: data.clone(),
            version,
            created_at: created_at.unwrap_or(now),
            last_accessed: now,
        };
        self.cache.set(&session_key(id), &record)
    }
}

fn session_key(id: &SessionId) -> String {
    cache_key!("session", id)
}

fn current_timestamp() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
