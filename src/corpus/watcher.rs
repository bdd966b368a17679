//! Corpus watching via notify.
//!
//! The notify callback runs on its own thread; it only classifies events and
//! forwards them over a channel. A single tokio task consumes the channel and
//! reconciles creations one at a time, in delivery order.

use super::events::{FileEvent, classify};
use super::reconcile::Reconciler;

use anyhow::{Context, Result};
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher, recommended_watcher};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Background watcher feeding creation events into the [`Reconciler`].
///
/// Dropping it stops the subscription; the event loop then drains and exits.
pub struct CorpusWatcher {
    _watcher: RecommendedWatcher,
    task: JoinHandle<()>,
}

impl CorpusWatcher {
    /// Subscribes to `root` and spawns the event loop.
    ///
    /// Failing to create or register the watcher is an error: without it the
    /// cache cannot be kept consistent with new files.
    pub fn start(root: &Path, recursive: bool, reconciler: Arc<Reconciler>) -> Result<Self> {
        let (tx, rx) = mpsc::unbounded_channel::<FileEvent>();

        let mut watcher = recommended_watcher(move |result: notify::Result<Event>| match result {
            Ok(event) => {
                for file_event in classify(&event.kind, event.paths) {
                    if tx.send(file_event).is_err() {
                        return;
                    }
                }
            }
            Err(e) => tracing::error!("Watcher error: {}", e),
        })
        .context("failed to create filesystem watcher")?;

        let mode = if recursive {
            RecursiveMode::Recursive
        } else {
            RecursiveMode::NonRecursive
        };
        watcher
            .watch(root, mode)
            .with_context(|| format!("failed to watch {}", root.display()))?;

        tracing::info!(
            "Watching {} for new files ({})",
            root.display(),
            if recursive { "recursive" } else { "top level only" }
        );

        let task = tokio::spawn(run_event_loop(rx, reconciler));

        Ok(Self {
            _watcher: watcher,
            task,
        })
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

async fn run_event_loop(mut rx: mpsc::UnboundedReceiver<FileEvent>, reconciler: Arc<Reconciler>) {
    while let Some(event) = rx.recv().await {
        handle_event(&reconciler, event).await;
    }
    tracing::info!("Watcher event channel closed");
}

async fn handle_event(reconciler: &Reconciler, event: FileEvent) {
    match event {
        FileEvent::Created(path) => {
            tracing::info!("New file {}", path.display());
            reconciler.on_created(&path).await;
        }
        // Not reconciled: cached records may go stale for these.
        other => {
            tracing::debug!(
                "Ignoring {} event for {}",
                other.kind_name(),
                other.path().display()
            );
        }
    }
}
