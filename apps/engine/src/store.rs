//! Key-value persistence abstraction.
//!
//! The engine never touches a concrete storage backend; everything goes
//! through [`KeyValueStore`], an opaque async get/set interface with
//! "absent key" semantics (a missing key is simply not in the result map,
//! never an error). Two store instances exist per engine: a device-local
//! scope and a cross-device-synced scope.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tokio::sync::RwLock;

/// Storage keys shared by the engine and its UI collaborators.
pub mod keys {
    pub const LEARNED_WORDS: &str = "learnedWords";
    pub const DAILY_WORDS: &str = "dailyWords";
    pub const LAST_UPDATE: &str = "lastUpdate";
    pub const TOTAL_WORDS_COUNT: &str = "totalWordsCount";
    pub const SELECTED_LEVEL: &str = "selectedLevel";
    pub const USER_SETTINGS: &str = "userSettings";
}

/// Errors from the persistence collaborator.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("invalid stored value for {key}: {source}")]
    InvalidValue {
        key: String,
        source: serde_json::Error,
    },
}

/// Opaque asynchronous key-value store.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Fetch the requested keys. Missing keys are absent from the map.
    async fn get(&self, keys: &[&str]) -> Result<HashMap<String, Value>, StoreError>;

    /// Write all entries. The write is observed as a unit by subsequent
    /// `get` calls on the same store.
    async fn set(&self, entries: HashMap<String, Value>) -> Result<(), StoreError>;
}

/// In-memory store used in tests and as the default local scope.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, keys: &[&str]) -> Result<HashMap<String, Value>, StoreError> {
        let values = self.values.read().await;
        Ok(keys
            .iter()
            .filter_map(|k| values.get(*k).map(|v| (k.to_string(), v.clone())))
            .collect())
    }

    async fn set(&self, entries: HashMap<String, Value>) -> Result<(), StoreError> {
        let mut values = self.values.write().await;
        values.extend(entries);
        Ok(())
    }
}

/// Decode one key out of a fetched map, `None` when absent.
pub fn decode<T: DeserializeOwned>(
    map: &HashMap<String, Value>,
    key: &str,
) -> Result<Option<T>, StoreError> {
    match map.get(key) {
        None => Ok(None),
        Some(value) => serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|source| StoreError::InvalidValue {
                key: key.to_string(),
                source,
            }),
    }
}

/// Encode a value for storage. Engine types serialize infallibly.
pub fn encode<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).expect("engine value serializes")
}
