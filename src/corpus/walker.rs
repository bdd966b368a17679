use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively lists every regular file under `root`.
///
/// An unreadable or missing root fails the scan. Entries below the root that
/// cannot be read are logged and skipped.
pub fn scan_corpus(root: &Path) -> Result<Vec<PathBuf>> {
    let metadata = std::fs::metadata(root)
        .with_context(|| format!("corpus root {} is not accessible", root.display()))?;
    if !metadata.is_dir() {
        anyhow::bail!("corpus root {} is not a directory", root.display());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        match entry {
            Ok(entry) if entry.file_type().is_file() => files.push(entry.into_path()),
            Ok(_) => {}
            Err(e) => {
                tracing::warn!("Skipping entry while scanning {}: {}", root.display(), e);
            }
        }
    }

    Ok(files)
}
