//! Error Taxonomy
//!
//! Typed errors for the storage, cache, search, and query layers. Startup and
//! binary plumbing keep using `anyhow`; these types exist where callers need to
//! tell failure kinds apart (e.g. an unreachable store degrades to a recompute,
//! while a corrupt cache entry fails the request).

use thiserror::Error;

/// Failure talking to the external key-value store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Transport failure, timeout, or a non-success status from the store.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The store answered, but the reply could not be understood.
    #[error("store protocol error: {0}")]
    Protocol(String),
}

/// Failure reading or writing an occurrence record in the cache.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Stored bytes exist for `word` but do not decode into a record.
    #[error("failed to decode cached record for '{word}': {source}")]
    Decode {
        word: String,
        #[source]
        source: bincode::Error,
    },

    #[error("failed to encode record: {0}")]
    Encode(#[source] bincode::Error),
}

/// Failure inside the search engine itself (not per-file I/O, which is skipped).
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search worker failed: {0}")]
    WorkerFailed(String),
}

/// Failure of a whole query as seen by the caller.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    #[error("cached entry is unreadable: {0}")]
    CorruptEntry(#[source] CacheError),

    #[error("failed to refresh cache: {0}")]
    CacheWrite(#[source] CacheError),

    #[error(transparent)]
    Search(#[from] SearchError),
}

impl QueryError {
    /// Whether the failure was caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        matches!(self, QueryError::InvalidQuery(_))
    }
}
