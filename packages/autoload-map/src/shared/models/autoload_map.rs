//! Class-name to file-path index

use super::GenerationMode;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

/// Mapping from class name to the file defining it.
///
/// Backed by a `BTreeMap` so iteration order (and any serialized form) is
/// identical across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AutoloadMap {
    entries: BTreeMap<String, PathBuf>,
}

impl AutoloadMap {
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn get(&self, class_name: &str) -> Option<&Path> {
        self.entries.get(class_name).map(PathBuf::as_path)
    }

    pub fn contains(&self, class_name: &str) -> bool {
        self.entries.contains_key(class_name)
    }

    /// Insert or replace an entry, returning the previous file if any.
    pub fn insert(
        &mut self,
        class_name: impl Into<String>,
        file: impl Into<PathBuf>,
    ) -> Option<PathBuf> {
        self.entries.insert(class_name.into(), file.into())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.entries
            .iter()
            .map(|(class_name, file)| (class_name.as_str(), file.as_path()))
    }
}

impl<K: Into<String>, V: Into<PathBuf>> FromIterator<(K, V)> for AutoloadMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(class_name, file)| (class_name.into(), file.into()))
                .collect(),
        }
    }
}

static EMPTY_MAP: AutoloadMap = AutoloadMap::new();

/// Previously persisted maps, keyed by generation mode. Read-only during a build.
#[derive(Debug, Clone, Default)]
pub struct ReferenceMaps {
    maps: HashMap<GenerationMode, AutoloadMap>,
}

impl ReferenceMaps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, mode: GenerationMode, map: AutoloadMap) -> Self {
        self.maps.insert(mode, map);
        self
    }

    /// Reference map for `mode`; a mode never generated before has an empty map.
    pub fn get(&self, mode: GenerationMode) -> &AutoloadMap {
        self.maps.get(&mode).unwrap_or(&EMPTY_MAP)
    }
}
