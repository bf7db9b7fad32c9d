use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Durable key-value storage contract.
///
/// The progress subsystem persists its whole snapshot under a single fixed
/// key, so the surface is deliberately small: point reads and wholesale
/// writes, no scans, no transactions.
#[async_trait]
pub trait KeyValueRepository: Send + Sync {
    /// Fetch the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing store cannot be read. A missing
    /// key is `Ok(None)`, not an error.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be written.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl KeyValueRepository for InMemoryRepository {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Aggregates the key-value repository behind a trait object for easy backend
/// swapping.
#[derive(Clone)]
pub struct Storage {
    pub kv: Arc<dyn KeyValueRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let kv: Arc<dyn KeyValueRepository> = Arc::new(InMemoryRepository::new());
        Self { kv }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_key_reads_as_none() {
        let repo = InMemoryRepository::new();
        assert!(repo.get("absent").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn set_overwrites_previous_value() {
        let repo = InMemoryRepository::new();
        repo.set("k", "one").await.unwrap();
        repo.set("k", "two").await.unwrap();
        assert_eq!(repo.get("k").await.unwrap().as_deref(), Some("two"));
    }

    #[tokio::test]
    async fn in_memory_storage_aggregate_round_trips() {
        let storage = Storage::in_memory();
        storage.kv.set("progress", "[]").await.unwrap();
        assert_eq!(
            storage.kv.get("progress").await.unwrap().as_deref(),
            Some("[]")
        );
    }
}
