//! Derives the owning component from a file path
//!
//! Rule: after stripping the optional install root, the first path segment
//! equal to a marker (`extension` by default) introduces a component
//! subtree, and the segment right after it names the component. That
//! segment must be a directory, so at least one more segment has to follow.
//!
//! Without an install root the whole path is searched. A site installed
//! below a directory named like a marker (`/srv/extension/site`) must set
//! the install root, otherwise its kernel files resolve to component `site`.

use crate::shared::models::{ComponentLookup, ComponentName};
use std::path::{Component, Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentResolver {
    install_root: Option<PathBuf>,
    markers: Vec<String>,
}

impl Default for ComponentResolver {
    fn default() -> Self {
        Self::new(["extension"])
    }
}

impl ComponentResolver {
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            install_root: None,
            markers: markers
                .into_iter()
                .map(Into::into)
                .filter(|marker: &String| !marker.trim().is_empty())
                .collect(),
        }
    }

    pub fn with_install_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.install_root = Some(root.into());
        self
    }

    pub fn resolve(&self, path: &Path) -> ComponentLookup {
        let relative = match &self.install_root {
            Some(root) => path.strip_prefix(root).unwrap_or(path),
            None => path,
        };

        let segments: Vec<&std::ffi::OsStr> = relative
            .components()
            .filter_map(|component| match component {
                Component::Normal(segment) => Some(segment),
                _ => None,
            })
            .collect();

        let Some(marker_at) = segments.iter().position(|segment| {
            self.markers
                .iter()
                .any(|marker| segment.to_str() == Some(marker.as_str()))
        }) else {
            return ComponentLookup::Core;
        };

        // Component segment plus at least one segment beneath it
        if marker_at + 2 >= segments.len() {
            return ComponentLookup::Malformed;
        }
        match segments[marker_at + 1].to_str() {
            Some(name) if !name.trim().is_empty() => {
                ComponentLookup::Component(ComponentName::new(name))
            }
            _ => ComponentLookup::Malformed,
        }
    }
}
