//! Key-Value Store Seam
//!
//! The cache talks to its backing store only through [`KeyValueStore`], so the
//! same cache-aside logic runs against an in-process map or a remote store node.

use crate::error::StoreError;
use async_trait::async_trait;

/// Minimal byte-oriented key-value store.
///
/// Values never expire; `set` overwrites unconditionally (last writer wins).
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the raw value for `key`, or `None` if the key is absent.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError>;

    /// Enumerates every key currently held by the store.
    async fn keys(&self) -> Result<Vec<String>, StoreError>;

    /// Cheap connectivity check.
    async fn ping(&self) -> Result<(), StoreError>;
}
