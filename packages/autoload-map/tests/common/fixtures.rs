//! On-disk site fixtures

use autoload_map::{BuildConfig, BuildOutput, MapBuilder, MemoryObserver, ReferenceMaps};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Minimal PHP file declaring one class
pub fn php_class(name: &str) -> String {
    format!("<?php\n\nclass {name}\n{{\n}}\n")
}

/// Temporary installation tree
pub struct Site {
    dir: TempDir,
}

impl Site {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    pub fn write(&self, rel: &str, body: &str) -> PathBuf {
        let path = self.path(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, body).unwrap();
        path
    }

    pub fn class_file(&self, rel: &str, class_name: &str) -> PathBuf {
        self.write(rel, &php_class(class_name))
    }

    pub fn mkdir(&self, rel: &str) -> PathBuf {
        let path = self.path(rel);
        fs::create_dir_all(&path).unwrap();
        path
    }
}

/// Validate, build and run with a recording observer
pub fn run(config: BuildConfig, reference: &ReferenceMaps) -> (BuildOutput, MemoryObserver) {
    let builder = MapBuilder::new(config.build().unwrap()).unwrap();
    let mut observer = MemoryObserver::new();
    let output = builder.build(reference, &mut observer);
    (output, observer)
}
