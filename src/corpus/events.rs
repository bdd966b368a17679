use notify::event::{EventKind, ModifyKind, RenameMode};
use std::path::PathBuf;

/// A file lifecycle change observed under the corpus root.
///
/// Only [`FileEvent::Created`] has reconciliation semantics. The other variants
/// are recognised so they can be reported, but cached records are not adjusted
/// for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileEvent {
    Created(PathBuf),
    Modified(PathBuf),
    Removed(PathBuf),
    Renamed(PathBuf),
}

impl FileEvent {
    pub fn path(&self) -> &PathBuf {
        match self {
            FileEvent::Created(path)
            | FileEvent::Modified(path)
            | FileEvent::Removed(path)
            | FileEvent::Renamed(path) => path,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            FileEvent::Created(_) => "created",
            FileEvent::Modified(_) => "modified",
            FileEvent::Removed(_) => "removed",
            FileEvent::Renamed(_) => "renamed",
        }
    }
}

/// Translates a raw notify event into one [`FileEvent`] per affected path.
///
/// A file moved into the root arrives as a rename and counts as a creation:
/// `RenameMode::To` names the destination, and `RenameMode::Both` carries
/// `[from, to]`. Access notifications and unclassified events yield nothing.
pub fn classify(kind: &EventKind, mut paths: Vec<PathBuf>) -> Vec<FileEvent> {
    let make: fn(PathBuf) -> FileEvent = match kind {
        EventKind::Create(_) => FileEvent::Created,
        EventKind::Modify(ModifyKind::Name(RenameMode::To)) => FileEvent::Created,
        EventKind::Modify(ModifyKind::Name(RenameMode::Both)) if paths.len() == 2 => {
            let to = paths.pop().unwrap_or_default();
            let from = paths.pop().unwrap_or_default();
            return vec![FileEvent::Renamed(from), FileEvent::Created(to)];
        }
        EventKind::Modify(ModifyKind::Name(_)) => FileEvent::Renamed,
        EventKind::Modify(_) => FileEvent::Modified,
        EventKind::Remove(_) => FileEvent::Removed,
        EventKind::Access(_) | EventKind::Any | EventKind::Other => return Vec::new(),
    };
    paths.into_iter().map(make).collect()
}
