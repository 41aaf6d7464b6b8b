//! Error types for autoload-map
//!
//! Only configuration problems are errors at this level. Per-subtree and
//! per-file failures are collected into [`BuildOutput`](crate::pipeline::BuildOutput)
//! and never abort a build.

use crate::config::ConfigError;
use thiserror::Error;

/// Main error type for autoload-map operations
#[derive(Debug, Error)]
pub enum AutoloadError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl AutoloadError {
    /// Whether the build was refused before scanning
    pub fn is_config(&self) -> bool {
        matches!(self, AutoloadError::Config(_))
    }
}

/// Result type alias for autoload-map operations
pub type Result<T> = std::result::Result<T, AutoloadError>;
