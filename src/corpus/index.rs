use parking_lot::RwLock;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The set of files known to belong to the corpus.
///
/// Only paths are held, never content. Readers take a [`snapshot`](Self::snapshot)
/// and do their I/O against the copy, so a long scan never blocks a writer.
pub struct CorpusIndex {
    inner: RwLock<IndexInner>,
}

#[derive(Default)]
struct IndexInner {
    paths: Vec<PathBuf>,
    members: HashSet<PathBuf>,
}

impl CorpusIndex {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: RwLock::new(IndexInner::default()),
        })
    }

    pub fn from_paths(paths: impl IntoIterator<Item = PathBuf>) -> Arc<Self> {
        let index = Self::new();
        index.add_all(paths);
        index
    }

    /// A copy of the current paths, in insertion order.
    pub fn snapshot(&self) -> Vec<PathBuf> {
        self.inner.read().paths.clone()
    }

    /// Adds `path` unless it is already known. Returns whether it was added.
    pub fn add(&self, path: PathBuf) -> bool {
        let mut inner = self.inner.write();
        if inner.members.contains(&path) {
            return false;
        }
        inner.members.insert(path.clone());
        inner.paths.push(path);
        true
    }

    /// Adds every path not already known. Returns how many were added.
    pub fn add_all(&self, paths: impl IntoIterator<Item = PathBuf>) -> usize {
        let mut inner = self.inner.write();
        let mut added = 0;
        for path in paths {
            if inner.members.insert(path.clone()) {
                inner.paths.push(path);
                added += 1;
            }
        }
        added
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.inner.read().members.contains(path)
    }

    pub fn len(&self) -> usize {
        self.inner.read().paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
