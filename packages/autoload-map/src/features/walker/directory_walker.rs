//! Depth-first recursive scan of one root
//!
//! Directories matched by an exclude rule are pruned before descent, so
//! nothing beneath them is ever read. Eligible files are offered to a
//! [`FileVisitor`]; the result is sorted by full path.

use super::error::SubtreeScanError;
use crate::features::path_filter::{normalize_root, PathFilterSet};
use crate::shared::ports::{BuildObserver, ProgressPhase};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Per-file decision taken after path filtering
pub trait FileVisitor {
    /// Returns false to leave `path` out of the results. Traversal continues either way.
    fn visit(&mut self, path: &Path) -> bool;
}

impl<F> FileVisitor for F
where
    F: FnMut(&Path) -> bool,
{
    fn visit(&mut self, path: &Path) -> bool {
        self(path)
    }
}

/// Visitor that keeps every eligible file
#[derive(Debug, Default, Clone, Copy)]
pub struct AcceptAll;

impl FileVisitor for AcceptAll {
    fn visit(&mut self, _path: &Path) -> bool {
        true
    }
}

/// Result of one walk
#[derive(Debug, Default)]
pub struct WalkOutcome {
    /// Accepted files, sorted by full path
    pub matches: Vec<PathBuf>,
    pub count: usize,
    /// Subtrees that could not be read
    pub errors: Vec<SubtreeScanError>,
}

/// Follows symlinks by default; cycles surface as [`SubtreeErrorKind::SymlinkLoop`].
///
/// [`SubtreeErrorKind::SymlinkLoop`]: super::SubtreeErrorKind::SymlinkLoop
#[derive(Debug, Clone)]
pub struct DirectoryWalker {
    follow_links: bool,
}

impl Default for DirectoryWalker {
    fn default() -> Self {
        Self { follow_links: true }
    }
}

impl DirectoryWalker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn follow_links(mut self, enabled: bool) -> Self {
        self.follow_links = enabled;
        self
    }

    pub fn walk(
        &self,
        root: &Path,
        filters: &PathFilterSet,
        visitor: &mut dyn FileVisitor,
        observer: &mut dyn BuildObserver,
    ) -> WalkOutcome {
        let root = PathBuf::from(normalize_root(root));
        let mut outcome = WalkOutcome::default();

        info!("Scanning {} for source files", root.display());
        observer.log(&format!("Scanning {} for source files.", root.display()));
        observer.start_phase(ProgressPhase::FileSearch);

        let entries = WalkDir::new(&root)
            .follow_links(self.follow_links)
            .into_iter()
            .filter_entry(|entry| {
                entry.depth() == 0
                    || !entry.file_type().is_dir()
                    || !filters.prunes_dir(entry.path())
            });

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let err = SubtreeScanError::from_walk_error(&err, &root);
                    warn!("{}", err);
                    observer.log(&err.to_string());
                    outcome.errors.push(err);
                    continue;
                }
            };

            let file_type = entry.file_type();
            if file_type.is_dir() {
                continue;
            }
            // Unfollowed links only count when they point at a regular file
            if file_type.is_symlink() && !entry.path().is_file() {
                debug!("Not following link {}", entry.path().display());
                continue;
            }

            let path = entry.path();
            if !filters.eligible_path(path) {
                continue;
            }

            if visitor.visit(path) {
                outcome.matches.push(path.to_path_buf());
                outcome.count += 1;
                observer.update_phase(ProgressPhase::FileSearch);
            }
        }

        outcome
            .matches
            .sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));

        observer.stop_phase(ProgressPhase::FileSearch);
        info!(
            "Scan of {} complete: {} files, {} unreadable subtrees",
            root.display(),
            outcome.count,
            outcome.errors.len()
        );
        observer.log(&format!("Scan complete. Found {} files.", outcome.count));

        outcome
    }
}
