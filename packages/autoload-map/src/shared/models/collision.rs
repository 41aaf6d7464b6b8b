//! Collision reporting

use super::{ComponentName, GenerationMode};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// How a collision was settled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionOutcome {
    /// The new definition replaced the existing entry
    Overridden,
    /// The existing entry was kept; the new definition is shadowed
    Shadowed,
}

/// Two definitions of the same class name. Used only for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollisionRecord {
    pub class_name: String,
    /// Mode whose map held the existing entry
    pub check_mode: GenerationMode,
    /// Mode being generated when the collision was found
    pub generating_mode: GenerationMode,
    pub winning_file: PathBuf,
    pub losing_file: PathBuf,
    pub winning_component: Option<ComponentName>,
    pub losing_component: Option<ComponentName>,
    pub outcome: CollisionOutcome,
}

impl fmt::Display for CollisionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            CollisionOutcome::Overridden => write!(
                f,
                "Class {} in file {} will override:\n{}",
                self.class_name,
                self.winning_file.display(),
                self.losing_file.display()
            ),
            CollisionOutcome::Shadowed => write!(
                f,
                "Class {} in file {} is already defined in {} ({} autoload map); skipping",
                self.class_name,
                self.losing_file.display(),
                self.winning_file.display(),
                self.check_mode
            ),
        }
    }
}
