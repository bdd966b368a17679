//! Storage Module Tests
//!
//! Validates the cache codec, the in-process store, and the store node protocol.
//!
//! ## Test Scopes
//! - **MemoryStore**: Put/Get/Keys semantics and overwrite behaviour.
//! - **CacheStore**: Record round-trip, miss vs. corrupt entry distinction.
//! - **Store node**: `RemoteStore` against a real node bound to a local port.

#[cfg(test)]
mod tests {
    use crate::error::{CacheError, StoreError};
    use crate::search::types::OccurrenceRecord;
    use crate::storage::cache::{CacheStore, decode_record, encode_record};
    use crate::storage::handlers::store_node_router;
    use crate::storage::memory::MemoryStore;
    use crate::storage::remote::RemoteStore;
    use crate::storage::store::KeyValueStore;
    use std::time::Duration;

    fn record(count: u64, files: &[&str]) -> OccurrenceRecord {
        OccurrenceRecord::new(count, files.iter().map(|f| f.to_string()).collect())
    }

    async fn spawn_store_node() -> (String, std::sync::Arc<MemoryStore>) {
        let store = MemoryStore::new();
        let app = store_node_router(store.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{}", addr), store)
    }

    // ============================================================
    // MEMORY STORE
    // ============================================================

    #[tokio::test]
    async fn test_memory_store_put_get() {
        let store = MemoryStore::new();

        store.set("rust", vec![1, 2, 3]).await.unwrap();

        assert_eq!(store.get("rust").await.unwrap(), Some(vec![1, 2, 3]));
        assert_eq!(store.get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_memory_store_keys_are_case_sensitive() {
        let store = MemoryStore::new();
        store.set("Word", vec![1]).await.unwrap();
        store.set("word", vec![2]).await.unwrap();
        store.set("*", vec![3]).await.unwrap();

        let mut keys = store.keys().await.unwrap();
        keys.sort();
        assert_eq!(keys, vec!["*", "Word", "word"]);
        assert_eq!(store.local_entry_count(), 3);
    }

    #[tokio::test]
    async fn test_memory_store_overwrites() {
        let store = MemoryStore::new();
        store.set("k", vec![1]).await.unwrap();
        store.set("k", vec![9, 9]).await.unwrap();

        assert_eq!(store.get_local("k"), Some(vec![9, 9]));
        assert_eq!(store.local_entry_count(), 1);
    }

    // ============================================================
    // CACHE STORE
    // ============================================================

    #[tokio::test]
    async fn test_cache_round_trip() {
        let cache = CacheStore::new(MemoryStore::new());
        let original = record(5, &["a", "b"]);

        cache.store("foo", &original).await.unwrap();
        let restored = cache.lookup("foo").await.unwrap();

        assert_eq!(restored, Some(original));
    }

    #[tokio::test]
    async fn test_cache_miss_is_none() {
        let cache = CacheStore::new(MemoryStore::new());
        assert!(cache.lookup("never-stored").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_cache_zero_count_record() {
        let cache = CacheStore::new(MemoryStore::new());
        cache.store("empty", &OccurrenceRecord::default()).await.unwrap();

        let restored = cache.lookup("empty").await.unwrap().unwrap();
        assert_eq!(restored.count, 0);
        assert!(restored.files.is_empty());
    }

    #[tokio::test]
    async fn test_cache_corrupt_entry_is_an_error() {
        let store = MemoryStore::new();
        store.store_local("broken".to_string(), vec![0xff, 0x01]);
        let cache = CacheStore::new(store);

        let result = cache.lookup("broken").await;

        assert!(matches!(result, Err(CacheError::Decode { ref word, .. }) if word == "broken"));
    }

    #[tokio::test]
    async fn test_cache_lists_words() {
        let cache = CacheStore::new(MemoryStore::new());
        cache.store("one", &record(1, &["x"])).await.unwrap();
        cache.store("two", &record(2, &["y"])).await.unwrap();

        let mut words = cache.cached_words().await.unwrap();
        words.sort();
        assert_eq!(words, vec!["one", "two"]);
    }

    #[test]
    fn test_codec_preserves_file_order() {
        let original = record(3, &["z", "a", "m"]);
        let bytes = encode_record(&original).unwrap();
        let decoded = decode_record("w", &bytes).unwrap();

        assert_eq!(decoded.files, vec!["z", "a", "m"]);
    }

    // ============================================================
    // STORE NODE + REMOTE STORE
    // ============================================================

    #[tokio::test]
    async fn test_remote_store_against_node() {
        let (url, node) = spawn_store_node().await;
        let remote = RemoteStore::new(&url, Duration::from_millis(500), 3).unwrap();

        remote.ping().await.unwrap();
        remote.set("hello", vec![4, 5, 6]).await.unwrap();

        assert_eq!(remote.get("hello").await.unwrap(), Some(vec![4, 5, 6]));
        assert_eq!(remote.get("absent").await.unwrap(), None);
        assert_eq!(node.get_local("hello"), Some(vec![4, 5, 6]));
        assert_eq!(remote.keys().await.unwrap(), vec!["hello".to_string()]);
    }

    #[tokio::test]
    async fn test_remote_store_round_trips_awkward_keys() {
        let (url, node) = spawn_store_node().await;
        let remote = RemoteStore::new(&url, Duration::from_millis(500), 1).unwrap();

        for (i, key) in [".", "..", "a/b", "%", "two words/and?more", "x&key=y"]
            .into_iter()
            .enumerate()
        {
            let value = vec![i as u8, 42];
            remote.set(key, value.clone()).await.unwrap();

            assert_eq!(node.get_local(key), Some(value.clone()), "key {:?}", key);
            assert_eq!(remote.get(key).await.unwrap(), Some(value), "key {:?}", key);
        }
    }

    #[tokio::test]
    async fn test_cache_hit_for_dot_words_over_remote_store() {
        let (url, _node) = spawn_store_node().await;
        let remote = RemoteStore::new(&url, Duration::from_millis(500), 1).unwrap();
        let cache = CacheStore::new(std::sync::Arc::new(remote));

        cache.store("..", &record(2, &["a"])).await.unwrap();

        assert_eq!(cache.lookup("..").await.unwrap(), Some(record(2, &["a"])));
        assert!(cache.lookup(".").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_remote_store_wrong_path_is_not_a_miss() {
        let (url, _node) = spawn_store_node().await;
        let remote =
            RemoteStore::new(&format!("{}/nowhere", url), Duration::from_millis(500), 1).unwrap();

        let result = remote.get("word").await;

        assert!(matches!(result, Err(StoreError::Protocol(_))));
    }

    #[tokio::test]
    async fn test_cache_over_remote_store() {
        let (url, _node) = spawn_store_node().await;
        let remote = RemoteStore::new(&url, Duration::from_millis(500), 1).unwrap();
        let cache = CacheStore::new(std::sync::Arc::new(remote));

        cache.store("foo", &record(5, &["a", "b"])).await.unwrap();

        assert_eq!(cache.lookup("foo").await.unwrap(), Some(record(5, &["a", "b"])));
    }

    #[tokio::test]
    async fn test_remote_store_unavailable() {
        // Bind and release a port so nothing is listening on it
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let remote =
            RemoteStore::new(&format!("http://{}", addr), Duration::from_millis(200), 1).unwrap();

        let result = remote.get("anything").await;
        assert!(matches!(result, Err(StoreError::Unavailable(_))));
    }

    #[test]
    fn test_remote_store_rejects_bad_url() {
        let result = RemoteStore::new("not a url", Duration::from_millis(100), 1);
        assert!(matches!(result, Err(StoreError::Protocol(_))));
    }
}
