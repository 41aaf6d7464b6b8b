//! Ports - class declaration extraction

use std::path::{Path, PathBuf};
use thiserror::Error;

/// A candidate file whose declarations could not be read
#[derive(Debug, Error)]
#[error("Cannot read {}: {source}", path.display())]
pub struct ExtractionError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Finds the class-like names a source file declares
pub trait ClassExtractor {
    /// Declared names in declaration order
    fn extract(&self, source: &str) -> Vec<String>;

    /// Read `path` (lossy UTF-8) and extract from its contents
    fn extract_file(&self, path: &Path) -> Result<Vec<String>, ExtractionError> {
        let bytes = std::fs::read(path).map_err(|source| ExtractionError {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.extract(&String::from_utf8_lossy(&bytes)))
    }
}
