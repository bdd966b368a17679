use super::types::{AnswerSource, QueryReply};
use crate::corpus::index::CorpusIndex;
use crate::error::{CacheError, QueryError};
use crate::search::engine::SearchEngine;
use crate::search::types::{OccurrenceRecord, SearchMode, SearchQuery};
use crate::storage::cache::CacheStore;

use std::sync::Arc;
use std::time::Instant;

/// Cache-aside front door for word queries.
///
/// 1. Unless the query bypasses the cache, a cached record is returned as is.
/// 2. Otherwise (bypass, miss, or unreachable store) the current corpus snapshot
///    is scanned and the fresh record always overwrites the cache entry.
///
/// A cached value that fails to decode fails the query. So does a failed cache
/// write after a successful scan; the computed answer is discarded in that case.
pub struct QueryCoordinator {
    index: Arc<CorpusIndex>,
    engine: Arc<SearchEngine>,
    cache: Arc<CacheStore>,
    default_parallelism: usize,
}

impl QueryCoordinator {
    pub fn new(
        index: Arc<CorpusIndex>,
        engine: Arc<SearchEngine>,
        cache: Arc<CacheStore>,
        default_parallelism: usize,
    ) -> Arc<Self> {
        Arc::new(Self {
            index,
            engine,
            cache,
            default_parallelism: default_parallelism.max(1),
        })
    }

    pub fn default_parallelism(&self) -> usize {
        self.default_parallelism
    }

    pub async fn execute(&self, query: &SearchQuery) -> Result<QueryReply, QueryError> {
        let started = Instant::now();

        if query.word.is_empty() {
            return Err(QueryError::InvalidQuery(
                "Please provide a word to search".to_string(),
            ));
        }

        if !query.bypass_cache {
            match self.cache.lookup(&query.word).await {
                Ok(Some(record)) => {
                    tracing::debug!("Cache hit for '{}'", query.word);
                    return Ok(reply(&query.word, record, AnswerSource::Cache, started));
                }
                Ok(None) => {
                    tracing::debug!("Cache miss for '{}'", query.word);
                }
                Err(CacheError::Store(e)) => {
                    tracing::warn!("Cache unavailable for '{}', recomputing: {}", query.word, e);
                }
                Err(e) => {
                    tracing::error!("Corrupt cache entry for '{}': {}", query.word, e);
                    return Err(QueryError::CorruptEntry(e));
                }
            }
        }

        let snapshot = self.index.snapshot();
        let record = self.engine.search(query, snapshot).await?;

        if let Err(e) = self.cache.store(&query.word, &record).await {
            tracing::error!("Failed to cache result for '{}': {}", query.word, e);
            return Err(QueryError::CacheWrite(e));
        }

        let source = match query.mode {
            SearchMode::Sequential => AnswerSource::Sequential,
            SearchMode::Parallel => AnswerSource::Parallel,
        };
        tracing::info!(
            "Computed '{}' ({:?}): {} occurrences in {} files",
            query.word,
            source,
            record.count,
            record.files.len()
        );

        Ok(reply(&query.word, record, source, started))
    }
}

fn reply(word: &str, record: OccurrenceRecord, source: AnswerSource, started: Instant) -> QueryReply {
    QueryReply {
        word: word.to_string(),
        count: record.count,
        files: record.files,
        query_duration_ms: started.elapsed().as_secs_f64() * 1000.0,
        search_mode: source,
    }
}
