//! Recursive directory walking with subtree pruning

mod directory_walker;
mod error;

pub use directory_walker::{AcceptAll, DirectoryWalker, FileVisitor, WalkOutcome};
pub use error::{SubtreeErrorKind, SubtreeScanError};
