//! Corpus Module
//!
//! Tracks which files make up the corpus and keeps cached records in step with
//! files that appear after startup.
//!
//! ## Workflow
//! 1. **Startup scan**: `walker` lists every file under the root once.
//! 2. **Index**: `CorpusIndex` holds the paths; queries scan a snapshot of it.
//! 3. **Watch**: `CorpusWatcher` receives OS notifications for the root.
//! 4. **Reconcile**: on creation, `Reconciler` adds the new file's occurrences to
//!    every already-cached word, then adds the path to the index.
//!
//! Modifications, removals, and renames are observed but not reconciled.

pub mod events;
pub mod index;
pub mod reconcile;
pub mod walker;
pub mod watcher;
