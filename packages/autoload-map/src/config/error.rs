//! Configuration error types

use crate::shared::models::GenerationMode;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration error type.
///
/// Every variant is fatal: a build never starts scanning with one of these.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Missing version field in YAML
    #[error("Missing 'version' field in configuration file. Add 'version: 1' to the top of your YAML file.")]
    MissingVersion,

    /// Unsupported version
    #[error("Unsupported configuration version {found}. Supported versions: {}", supported.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", "))]
    UnsupportedVersion { found: u32, supported: Vec<u32> },

    /// No generation mode configured
    #[error("No generation modes configured. Add at least one entry under 'modes'.")]
    NoModes,

    /// Same mode listed twice
    #[error("Generation mode '{0}' is configured more than once")]
    DuplicateMode(GenerationMode),

    /// Mode without scan roots
    #[error("Generation mode '{mode}' has no scan roots")]
    EmptyRoots { mode: GenerationMode },

    /// Blank root path
    #[error("Generation mode '{mode}' has an empty scan root path")]
    EmptyRootPath { mode: GenerationMode },

    /// Root path does not exist
    #[error("Scan root does not exist for mode '{mode}': {}", root.display())]
    RootNotFound { mode: GenerationMode, root: PathBuf },

    /// Root path is not a directory
    #[error("Scan root is not a directory for mode '{mode}': {}", root.display())]
    RootNotDirectory { mode: GenerationMode, root: PathBuf },

    /// Active component listed twice
    #[error("Active component '{0}' is listed more than once")]
    DuplicateComponent(String),

    /// Blank active component name
    #[error("Invalid active component name '{0}'")]
    InvalidComponentName(String),

    /// No path segment introduces a component subtree
    #[error("'component_markers' must name at least one path segment")]
    NoComponentMarkers,

    /// No include pattern, so nothing could ever be eligible
    #[error("'include_patterns' must contain at least one pattern")]
    NoIncludePatterns,

    /// Include or exclude pattern does not compile
    #[error("Invalid path pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Configuration file could not be read
    #[error("Cannot read configuration file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;

impl ConfigError {
    /// Create a pattern error
    pub fn invalid_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }
}
