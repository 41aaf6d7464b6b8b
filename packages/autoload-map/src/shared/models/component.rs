//! Components and the prioritized active-component list

use crate::config::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Name of an independently activatable unit of code (an extension)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentName(String);

impl ComponentName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ComponentName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ComponentName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Result of deriving the owning component from a file path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ComponentLookup {
    /// The path lies outside every component subtree (kernel/platform code)
    Core,
    /// The path lies inside the named component's subtree
    Component(ComponentName),
    /// A component marker was found but no component segment follows it
    Malformed,
}

impl ComponentLookup {
    pub fn name(&self) -> Option<&ComponentName> {
        match self {
            ComponentLookup::Component(name) => Some(name),
            ComponentLookup::Core | ComponentLookup::Malformed => None,
        }
    }
}

/// Ordered, duplicate-free list of enabled components.
///
/// Position encodes priority: index 0 ranks ahead of every later entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ActiveComponentList {
    names: Vec<ComponentName>,
}

impl ActiveComponentList {
    /// Build the list, rejecting blank names and duplicates.
    pub fn new<I, S>(names: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<ComponentName>,
    {
        let mut list = Vec::new();
        for name in names {
            let name = name.into();
            if name.as_str().trim().is_empty() {
                return Err(ConfigError::InvalidComponentName(name.as_str().to_string()));
            }
            if list.contains(&name) {
                return Err(ConfigError::DuplicateComponent(name.as_str().to_string()));
            }
            list.push(name);
        }
        Ok(Self { names: list })
    }

    /// Priority rank of `name`; lower is higher priority.
    pub fn position(&self, name: &ComponentName) -> Option<usize> {
        self.names.iter().position(|candidate| candidate == name)
    }

    pub fn contains(&self, name: &ComponentName) -> bool {
        self.position(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ComponentName> {
        self.names.iter()
    }
}

/// A file accepted by the walk, tagged with its owning component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub path: PathBuf,
    pub component: ComponentLookup,
}
