use crate::error::QueryError;
use crate::search::types::{SearchMode, SearchQuery};
use serde::{Deserialize, Serialize};

/// Which path produced an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerSource {
    Cache,
    Sequential,
    Parallel,
}

/// Raw `/search` query string, before validation.
///
/// Parameter names follow the public API (`forceSearch`, `searchMode`,
/// `concurrentThreads`); everything is optional here so validation errors can be
/// reported with a proper message.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub word: Option<String>,
    #[serde(rename = "forceSearch")]
    pub force_search: Option<String>,
    #[serde(rename = "searchMode")]
    pub search_mode: Option<String>,
    #[serde(rename = "concurrentThreads")]
    pub concurrent_threads: Option<String>,
}

impl SearchParams {
    /// Validates the parameters and applies defaults.
    ///
    /// Only the literal `true` enables `forceSearch`. A parallelism of 0 is
    /// raised to 1.
    pub fn into_query(self, default_parallelism: usize) -> Result<SearchQuery, QueryError> {
        let word = match self.word {
            Some(word) if !word.is_empty() => word,
            _ => {
                return Err(QueryError::InvalidQuery(
                    "Please provide a word to search".to_string(),
                ));
            }
        };

        let bypass_cache = self.force_search.as_deref() == Some("true");

        let mode = match self.search_mode.as_deref() {
            None | Some("") => SearchMode::Sequential,
            Some(raw) => SearchMode::parse(raw).ok_or_else(|| {
                QueryError::InvalidQuery(format!("Unknown search mode '{}'", raw))
            })?,
        };

        let parallelism = match self.concurrent_threads.as_deref() {
            None | Some("") => default_parallelism,
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|_| QueryError::InvalidQuery("Invalid concurrent threads".to_string()))?,
        };

        Ok(SearchQuery::new(word, mode, parallelism, bypass_cache))
    }
}

/// The answer to a word query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryReply {
    pub word: String,
    pub count: u64,
    pub files: Vec<String>,
    /// Wall-clock time of the whole operation, cache round trips included.
    pub query_duration_ms: f64,
    pub search_mode: AnswerSource,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Usage text served by `/help`.
pub fn help_text(default_parallelism: usize) -> String {
    format!(
        "Search API
    Usage: /search?word=<word>
    Parameters:
        word: the word to search (required, case-sensitive, matched as a substring)
        forceSearch: true to skip the cache, recompute, and refresh the cached entry (default false)
        searchMode: simple | concurrent (default simple; sequential | parallel also accepted)
        concurrentThreads: number of chunks to split the corpus into in concurrent mode (default {default_parallelism})
    Example: /search?word=hello&forceSearch=true&searchMode=concurrent&concurrentThreads=100
"
    )
}
