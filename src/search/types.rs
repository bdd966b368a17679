use serde::{Deserialize, Serialize};

/// How the engine walks the corpus snapshot on a cache miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    Sequential,
    Parallel,
}

impl SearchMode {
    /// Parses the `searchMode` query parameter.
    ///
    /// Accepts the historical names (`simple`, `concurrent`) alongside the
    /// descriptive ones. Returns `None` for anything else.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "simple" | "sequential" => Some(SearchMode::Sequential),
            "concurrent" | "parallel" => Some(SearchMode::Parallel),
            _ => None,
        }
    }
}

/// A single word query, already validated and defaulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub word: String,
    pub mode: SearchMode,
    /// Always >= 1.
    pub parallelism: usize,
    /// Forces recomputation and cache refresh.
    pub bypass_cache: bool,
}

impl SearchQuery {
    pub fn new(word: impl Into<String>, mode: SearchMode, parallelism: usize, bypass_cache: bool) -> Self {
        Self {
            word: word.into(),
            mode,
            parallelism: parallelism.max(1),
            bypass_cache,
        }
    }

    pub fn sequential(word: impl Into<String>) -> Self {
        Self::new(word, SearchMode::Sequential, 1, false)
    }

    pub fn parallel(word: impl Into<String>, parallelism: usize) -> Self {
        Self::new(word, SearchMode::Parallel, parallelism, false)
    }

    pub fn bypassing_cache(mut self) -> Self {
        self.bypass_cache = true;
        self
    }
}

/// Total occurrences of a word plus every file that contributed at least one.
///
/// This is also the cached value, so field order and types are part of the
/// persisted format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccurrenceRecord {
    pub count: u64,
    pub files: Vec<String>,
}

impl OccurrenceRecord {
    pub fn new(count: u64, files: Vec<String>) -> Self {
        Self { count, files }
    }

    /// Folds another partial result into this one.
    pub fn merge(&mut self, other: OccurrenceRecord) {
        self.count += other.count;
        self.files.extend(other.files);
    }

    pub fn contains_file(&self, path: &str) -> bool {
        self.files.iter().any(|f| f == path)
    }
}
