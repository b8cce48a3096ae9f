//! # Key-Value Storage Port
//!
//! The local store the client keeps its cart and session in. Values are JSON
//! documents addressed by a short key. Writes replace the whole document and
//! carry no transaction semantics.

use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Key holding the serialized cart.
pub const CART_KEY: &str = "cart";
/// Key holding the cached session user.
pub const USER_KEY: &str = "user";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode value for '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}

/// Defines the contract for a string-valued key-value store.
pub trait KeyValueStore {
    /// Returns the raw document stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replaces the document stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Deletes `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// Encodes `value` as JSON and stores it under `key`.
pub fn save_json<S, T>(store: &S, key: &str, value: &T) -> Result<(), StorageError>
where
    S: KeyValueStore + ?Sized,
    T: Serialize,
{
    let encoded = serde_json::to_string(value).map_err(|source| StorageError::Encode {
        key: key.to_string(),
        source,
    })?;
    store.set(key, &encoded)
}

/// Outcome of reading an optional JSON document.
#[derive(Debug)]
pub enum Loaded<T> {
    Found(T),
    Missing,
    /// The document exists but does not decode as `T`.
    Malformed(serde_json::Error),
}

/// Reads and decodes the document under `key`.
///
/// Decoding failures are reported as [`Loaded::Malformed`] instead of an
/// error so callers can fall back to a default.
pub fn load_json<S, T>(store: &S, key: &str) -> Result<Loaded<T>, StorageError>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    let Some(raw) = store.get(key)? else {
        return Ok(Loaded::Missing);
    };

    Ok(match serde_json::from_str(&raw) {
        Ok(value) => Loaded::Found(value),
        Err(err) => Loaded::Malformed(err),
    })
}
