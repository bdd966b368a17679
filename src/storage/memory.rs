use super::store::KeyValueStore;
use crate::error::StoreError;

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// In-process key-value store.
///
/// Used directly by a single search process, and as the backing map of a
/// standalone store node (see [`super::handlers`]).
pub struct MemoryStore {
    data: DashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn get_local(&self, key: &str) -> Option<Vec<u8>> {
        self.data.get(key).map(|value| value.value().clone())
    }

    pub fn store_local(&self, key: String, value: Vec<u8>) {
        self.data.insert(key, value);
    }

    pub fn local_keys(&self) -> Vec<String> {
        self.data.iter().map(|entry| entry.key().clone()).collect()
    }

    pub fn local_entry_count(&self) -> usize {
        self.data.len()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            data: DashMap::new(),
        }
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.get_local(key))
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        self.store_local(key.to_string(), value);
        Ok(())
    }

    async fn keys(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.local_keys())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
