use super::types::{OccurrenceRecord, SearchMode, SearchQuery};
use crate::error::SearchError;

use memchr::memmem;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Counts non-overlapping occurrences of `needle` in `haystack`, scanning left to right.
///
/// Plain substring semantics: "cat" matches inside "concatenate". An empty
/// needle counts as zero.
pub fn count_occurrences(haystack: &[u8], needle: &[u8]) -> u64 {
    if needle.is_empty() {
        return 0;
    }
    memmem::find_iter(haystack, needle).count() as u64
}

/// Splits `files` into contiguous chunks of `len / parallelism` (at least 1);
/// the last chunk absorbs any remainder.
///
/// 10 files with parallelism 3 gives chunk size 3 and chunks `[3, 3, 3, 1]`.
pub fn split_into_chunks<T>(files: &[T], parallelism: usize) -> Vec<&[T]> {
    let chunk_size = (files.len() / parallelism.max(1)).max(1);
    files.chunks(chunk_size).collect()
}

/// Scans `files` in order and accumulates the occurrences of `word`.
///
/// Unreadable files are skipped: they are neither counted nor listed, and the
/// scan carries on. Matching files keep snapshot order.
pub async fn sequential_search(word: &str, files: &[PathBuf]) -> OccurrenceRecord {
    let needle = word.as_bytes();
    let mut record = OccurrenceRecord::default();

    for path in files {
        let content = match tokio::fs::read(path).await {
            Ok(content) => content,
            Err(e) => {
                tracing::trace!("Skipping unreadable file {}: {}", path.display(), e);
                continue;
            }
        };

        let hits = count_occurrences(&content, needle);
        if hits > 0 {
            record.count += hits;
            record.files.push(path_key(path));
        }
    }

    record
}

/// The string form of a corpus path, as stored in occurrence records.
pub fn path_key(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Runs word searches over corpus snapshots.
///
/// Owns the global worker budget: every chunk of every parallel query holds one
/// permit while it scans, so concurrent requests cannot spawn unbounded work.
pub struct SearchEngine {
    workers: Arc<Semaphore>,
    max_workers: usize,
}

impl SearchEngine {
    /// Creates an engine allowing at most `max_workers` chunk scans in flight.
    pub fn new(max_workers: usize) -> Arc<Self> {
        let max_workers = max_workers.max(1);
        Arc::new(Self {
            workers: Arc::new(Semaphore::new(max_workers)),
            max_workers,
        })
    }

    pub fn max_workers(&self) -> usize {
        self.max_workers
    }

    /// Number of worker permits not currently held.
    pub fn idle_workers(&self) -> usize {
        self.workers.available_permits()
    }

    /// Dispatches to the sequential or parallel scan according to `query.mode`.
    pub async fn search(
        &self,
        query: &SearchQuery,
        snapshot: Vec<PathBuf>,
    ) -> Result<OccurrenceRecord, SearchError> {
        match query.mode {
            SearchMode::Sequential => Ok(sequential_search(&query.word, &snapshot).await),
            SearchMode::Parallel => {
                self.parallel_search(&query.word, snapshot, query.parallelism)
                    .await
            }
        }
    }

    /// Scans the snapshot in contiguous chunks, one concurrent task per chunk.
    ///
    /// Counts are summed, so the total is independent of completion order. The
    /// file list is concatenated in completion order and must be treated as an
    /// unordered set.
    pub async fn parallel_search(
        &self,
        word: &str,
        snapshot: Vec<PathBuf>,
        parallelism: usize,
    ) -> Result<OccurrenceRecord, SearchError> {
        let word: Arc<str> = Arc::from(word);
        let chunks = split_into_chunks(&snapshot, parallelism);

        tracing::debug!(
            "Parallel search for '{}': {} files in {} chunks",
            word,
            snapshot.len(),
            chunks.len()
        );

        let mut workers = JoinSet::new();
        for chunk in chunks {
            let chunk = chunk.to_vec();
            let word = word.clone();
            let permits = self.workers.clone();

            workers.spawn(async move {
                let _permit = permits
                    .acquire_owned()
                    .await
                    .map_err(|e| SearchError::WorkerFailed(e.to_string()))?;
                Ok::<_, SearchError>(sequential_search(&word, &chunk).await)
            });
        }

        let mut record = OccurrenceRecord::default();
        while let Some(joined) = workers.join_next().await {
            let partial = joined.map_err(|e| SearchError::WorkerFailed(e.to_string()))??;
            record.merge(partial);
        }

        Ok(record)
    }
}
