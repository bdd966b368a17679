use super::store::KeyValueStore;
use crate::error::CacheError;
use crate::search::types::OccurrenceRecord;

use std::sync::Arc;

/// Occurrence records persisted in a key-value store, keyed by the raw word.
///
/// Keys are case-sensitive and carry no namespace prefix. Entries never expire.
#[derive(Clone)]
pub struct CacheStore {
    store: Arc<dyn KeyValueStore>,
}

impl CacheStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Arc<Self> {
        Arc::new(Self { store })
    }

    /// Reads the record cached for `word`.
    ///
    /// `Ok(None)` means the key is absent. Bytes that fail to decode are an
    /// error, not a miss.
    pub async fn lookup(&self, word: &str) -> Result<Option<OccurrenceRecord>, CacheError> {
        match self.store.get(word).await? {
            Some(bytes) => decode_record(word, &bytes).map(Some),
            None => Ok(None),
        }
    }

    /// Overwrites the record for `word`, with no expiration and no version check.
    pub async fn store(&self, word: &str, record: &OccurrenceRecord) -> Result<(), CacheError> {
        let bytes = encode_record(record)?;
        self.store.set(word, bytes).await?;
        Ok(())
    }

    /// Every word that currently has a cached record.
    pub async fn cached_words(&self) -> Result<Vec<String>, CacheError> {
        Ok(self.store.keys().await?)
    }

    pub async fn ping(&self) -> Result<(), CacheError> {
        Ok(self.store.ping().await?)
    }
}

pub fn encode_record(record: &OccurrenceRecord) -> Result<Vec<u8>, CacheError> {
    bincode::serialize(record).map_err(CacheError::Encode)
}

pub fn decode_record(word: &str, bytes: &[u8]) -> Result<OccurrenceRecord, CacheError> {
    bincode::deserialize(bytes).map_err(|source| CacheError::Decode {
        word: word.to_string(),
        source,
    })
}
