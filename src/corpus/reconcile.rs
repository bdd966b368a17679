use super::index::CorpusIndex;
use crate::error::CacheError;
use crate::search::engine::{count_occurrences, path_key};
use crate::storage::cache::CacheStore;

use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Outcome of reconciling one newly created file against the cache.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Cached words whose record was incremented.
    pub updated: Vec<String>,
    /// Cached words whose record already listed the file (replayed event).
    pub already_counted: Vec<String>,
    /// Cached words listed by the store but missing when re-read.
    pub vanished: Vec<String>,
    /// Cached words whose update failed and was abandoned.
    pub failed: Vec<String>,
    /// Whether the path was new to the corpus index.
    pub indexed: bool,
}

/// Keeps cached occurrence records consistent when files appear in the corpus.
pub struct Reconciler {
    index: Arc<CorpusIndex>,
    cache: Arc<CacheStore>,
}

impl Reconciler {
    pub fn new(index: Arc<CorpusIndex>, cache: Arc<CacheStore>) -> Arc<Self> {
        Arc::new(Self { index, cache })
    }

    /// Folds the content of a newly created file into every cached record.
    ///
    /// For each cached word occurring in the file, the record's count grows by
    /// the file's occurrences and the file is appended. A record that already
    /// lists the file is left alone, so replaying a creation event does not
    /// double-count. A failure on one word never stops the pass. The path is
    /// always added to the index at the end; directories are ignored.
    pub async fn on_created(&self, path: &Path) -> ReconcileReport {
        let mut report = ReconcileReport::default();

        if let Ok(metadata) = tokio::fs::metadata(path).await
            && metadata.is_dir()
        {
            tracing::debug!("Ignoring created directory {}", path.display());
            return report;
        }

        match tokio::fs::read(path).await {
            Ok(content) => self.apply(path, &content, &mut report).await,
            Err(e) => {
                tracing::warn!("Cannot read created file {}: {}", path.display(), e);
            }
        }

        report.indexed = self.index.add(PathBuf::from(path));
        report
    }

    async fn apply(&self, path: &Path, content: &[u8], report: &mut ReconcileReport) {
        let words = match self.cache.cached_words().await {
            Ok(words) => words,
            Err(e) => {
                tracing::error!("Cannot list cached words for {}: {}", path.display(), e);
                return;
            }
        };

        let file = path_key(path);
        for word in words {
            let hits = count_occurrences(content, word.as_bytes());
            if hits == 0 {
                continue;
            }

            match self.update_word(&word, &file, hits).await {
                Ok(WordUpdate::Applied) => {
                    tracing::debug!("Reconciled '{}' += {} from {}", word, hits, file);
                    report.updated.push(word);
                }
                Ok(WordUpdate::AlreadyCounted) => {
                    tracing::debug!("'{}' already counts {}, skipping", word, file);
                    report.already_counted.push(word);
                }
                Ok(WordUpdate::Vanished) => {
                    tracing::warn!("Cached word '{}' was listed but could not be read back", word);
                    report.vanished.push(word);
                }
                Err(e) => {
                    tracing::error!("Failed to reconcile '{}' with {}: {}", word, file, e);
                    report.failed.push(word);
                }
            }
        }

        tracing::info!(
            "Reconciled {}: {} updated, {} vanished, {} failed",
            file,
            report.updated.len(),
            report.vanished.len(),
            report.failed.len()
        );
    }

    async fn update_word(
        &self,
        word: &str,
        file: &str,
        hits: u64,
    ) -> Result<WordUpdate, CacheError> {
        let Some(mut record) = self.cache.lookup(word).await? else {
            return Ok(WordUpdate::Vanished);
        };
        if record.contains_file(file) {
            return Ok(WordUpdate::AlreadyCounted);
        }

        record.count += hits;
        record.files.push(file.to_string());
        self.cache.store(word, &record).await?;
        Ok(WordUpdate::Applied)
    }
}

enum WordUpdate {
    Applied,
    AlreadyCounted,
    /// Listed by the store, absent on the follow-up read.
    Vanished,
}
