//! Search Module Tests
//!
//! Validates occurrence counting and both scan strategies against real files.
//!
//! ## Test Scopes
//! - **Counting**: Substring semantics (non-overlapping, case-sensitive, not word-aware).
//! - **Chunking**: Partition sizes for the parallel scan.
//! - **Scans**: Sequential ordering, unreadable-file tolerance, and agreement
//!   between the sequential and parallel strategies.

#[cfg(test)]
mod tests {
    use crate::search::engine::{SearchEngine, count_occurrences, sequential_search, split_into_chunks};
    use crate::search::types::{OccurrenceRecord, SearchMode, SearchQuery};
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn make_corpus(contents: &[&str]) -> (TempDir, Vec<PathBuf>) {
        let dir = tempfile::tempdir().unwrap();
        let files = contents
            .iter()
            .enumerate()
            .map(|(i, content)| {
                let path = dir.path().join(format!("doc_{:02}.txt", i));
                std::fs::write(&path, content).unwrap();
                path
            })
            .collect();
        (dir, files)
    }

    fn sorted(mut files: Vec<String>) -> Vec<String> {
        files.sort();
        files
    }

    // ============================================================
    // COUNTING
    // ============================================================

    #[test]
    fn test_count_is_substring_based() {
        // "cat" also matches inside "concatenate"
        assert_eq!(count_occurrences(b"cat concatenate cat", b"cat"), 3);
    }

    #[test]
    fn test_count_is_non_overlapping() {
        assert_eq!(count_occurrences(b"aaaa", b"aa"), 2);
        assert_eq!(count_occurrences(b"aaa", b"aa"), 1);
    }

    #[test]
    fn test_count_is_case_sensitive() {
        assert_eq!(count_occurrences(b"Rust rust RUST", b"rust"), 1);
    }

    #[test]
    fn test_count_edge_cases() {
        assert_eq!(count_occurrences(b"", b"word"), 0);
        assert_eq!(count_occurrences(b"anything", b""), 0);
        assert_eq!(count_occurrences(b"ab", b"abc"), 0);
    }

    #[test]
    fn test_count_on_non_utf8_content() {
        let content = [0xff, 0xfe, b'f', b'o', b'o', 0x00, b'f', b'o', b'o'];
        assert_eq!(count_occurrences(&content, b"foo"), 2);
    }

    // ============================================================
    // CHUNKING
    // ============================================================

    #[test]
    fn test_chunks_ten_files_parallelism_three() {
        let files: Vec<u32> = (0..10).collect();
        let chunks = split_into_chunks(&files, 3);

        let sizes: Vec<usize> = chunks.iter().map(|c| c.len()).collect();
        assert_eq!(sizes, vec![3, 3, 3, 1]);
    }

    #[test]
    fn test_chunks_are_contiguous_and_complete() {
        let files: Vec<u32> = (0..17).collect();
        let chunks = split_into_chunks(&files, 4);

        let rejoined: Vec<u32> = chunks.concat();
        assert_eq!(rejoined, files);
    }

    #[test]
    fn test_chunk_size_clamped_to_one() {
        let files: Vec<u32> = (0..3).collect();
        let chunks = split_into_chunks(&files, 50);

        // Fewer chunks than requested parallelism
        assert_eq!(chunks.len(), 3);
        assert!(chunks.iter().all(|c| c.len() == 1));
    }

    #[test]
    fn test_chunks_zero_parallelism_and_empty_input() {
        let files: Vec<u32> = (0..5).collect();
        assert_eq!(split_into_chunks(&files, 0).len(), 1);

        let empty: Vec<u32> = Vec::new();
        assert!(split_into_chunks(&empty, 4).is_empty());
    }

    // ============================================================
    // SEQUENTIAL SCAN
    // ============================================================

    #[tokio::test]
    async fn test_sequential_keeps_snapshot_order() {
        let (_dir, files) = make_corpus(&["foo", "bar", "foo foo", "nothing", "xfoox"]);

        let record = sequential_search("foo", &files).await;

        assert_eq!(record.count, 4);
        let expected: Vec<String> = [&files[0], &files[2], &files[4]]
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect();
        assert_eq!(record.files, expected);
    }

    #[tokio::test]
    async fn test_unreadable_file_is_skipped() {
        let (dir, mut files) = make_corpus(&["word and word"]);
        files.insert(0, dir.path().join("missing.txt"));

        let record = sequential_search("word", &files).await;

        assert_eq!(record.count, 2);
        assert_eq!(record.files, vec![files[1].to_string_lossy().into_owned()]);
    }

    #[tokio::test]
    async fn test_directory_in_snapshot_is_skipped() {
        let (dir, mut files) = make_corpus(&["word"]);
        let sub = dir.path().join("word");
        std::fs::create_dir(&sub).unwrap();
        files.push(sub);

        let record = sequential_search("word", &files).await;
        assert_eq!(record.count, 1);
        assert_eq!(record.files.len(), 1);
    }

    #[tokio::test]
    async fn test_empty_snapshot() {
        let record = sequential_search("anything", &[]).await;
        assert_eq!(record, OccurrenceRecord::default());
    }

    // ============================================================
    // PARALLEL SCAN
    // ============================================================

    #[tokio::test]
    async fn test_parallel_count_matches_sequential_for_any_parallelism() {
        let (_dir, files) = make_corpus(&[
            "alpha beta alpha",
            "gamma",
            "alphaalpha",
            "",
            "beta alpha",
            "alpha",
            "no match here",
        ]);
        let engine = SearchEngine::new(4);
        let expected = sequential_search("alpha", &files).await;

        for parallelism in 1..=files.len() + 5 {
            let record = engine
                .parallel_search("alpha", files.clone(), parallelism)
                .await
                .unwrap();

            assert_eq!(record.count, expected.count, "parallelism {}", parallelism);
            assert_eq!(
                sorted(record.files),
                sorted(expected.files.clone()),
                "parallelism {}",
                parallelism
            );
        }
    }

    #[tokio::test]
    async fn test_parallel_with_unreadable_files() {
        let (dir, mut files) = make_corpus(&["hit hit", "miss", "hit"]);
        files.push(dir.path().join("gone.txt"));
        let engine = SearchEngine::new(2);

        let record = engine.parallel_search("hit", files, 2).await.unwrap();

        assert_eq!(record.count, 3);
        assert_eq!(record.files.len(), 2);
    }

    #[tokio::test]
    async fn test_parallel_empty_snapshot() {
        let engine = SearchEngine::new(2);
        let record = engine.parallel_search("x", Vec::new(), 8).await.unwrap();
        assert_eq!(record, OccurrenceRecord::default());
    }

    #[tokio::test]
    async fn test_worker_permits_are_released() {
        let (_dir, files) = make_corpus(&["a", "b", "a", "c", "a", "d"]);
        let engine = SearchEngine::new(2);

        engine.parallel_search("a", files, 6).await.unwrap();

        assert_eq!(engine.max_workers(), 2);
        assert_eq!(engine.idle_workers(), 2);
    }

    #[tokio::test]
    async fn test_search_dispatches_on_mode() {
        let (_dir, files) = make_corpus(&["x", "xx"]);
        let engine = SearchEngine::new(2);

        let seq = engine
            .search(&SearchQuery::sequential("x"), files.clone())
            .await
            .unwrap();
        let par = engine
            .search(&SearchQuery::parallel("x", 2), files)
            .await
            .unwrap();

        assert_eq!(seq.count, 3);
        assert_eq!(par.count, 3);
    }

    // ============================================================
    // TYPES
    // ============================================================

    #[test]
    fn test_query_parallelism_defaults_to_at_least_one() {
        let query = SearchQuery::new("w", SearchMode::Parallel, 0, false);
        assert_eq!(query.parallelism, 1);
    }

    #[test]
    fn test_search_mode_parse() {
        assert_eq!(SearchMode::parse("simple"), Some(SearchMode::Sequential));
        assert_eq!(SearchMode::parse("sequential"), Some(SearchMode::Sequential));
        assert_eq!(SearchMode::parse("concurrent"), Some(SearchMode::Parallel));
        assert_eq!(SearchMode::parse("parallel"), Some(SearchMode::Parallel));
        assert_eq!(SearchMode::parse("fast"), None);
    }

    #[test]
    fn test_record_merge() {
        let mut record = OccurrenceRecord::new(2, vec!["a".to_string()]);
        record.merge(OccurrenceRecord::new(3, vec!["b".to_string()]));

        assert_eq!(record.count, 5);
        assert!(record.contains_file("a"));
        assert!(record.contains_file("b"));
    }
}
