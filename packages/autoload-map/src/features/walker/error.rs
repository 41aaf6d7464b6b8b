use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubtreeErrorKind {
    /// Reading a directory (or an entry's metadata) failed
    Io,
    /// A followed symlink points back at one of its ancestors
    SymlinkLoop,
}

/// A subtree that could not be scanned.
///
/// Recoverable: the subtree is skipped and siblings are still walked.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Failed to scan {}: {message}", path.display())]
pub struct SubtreeScanError {
    pub path: PathBuf,
    pub kind: SubtreeErrorKind,
    pub message: String,
}

impl SubtreeScanError {
    pub(crate) fn from_walk_error(err: &walkdir::Error, root: &Path) -> Self {
        let kind = if err.loop_ancestor().is_some() {
            SubtreeErrorKind::SymlinkLoop
        } else {
            SubtreeErrorKind::Io
        };
        let message = match err.io_error() {
            Some(io) => io.to_string(),
            None => err.to_string(),
        };
        Self {
            path: err.path().unwrap_or(root).to_path_buf(),
            kind,
            message,
        }
    }
}
