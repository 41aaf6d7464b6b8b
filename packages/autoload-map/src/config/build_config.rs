//! Build configuration: builder API, YAML schema v1, validation

use super::error::{ConfigError, ConfigResult};
use crate::features::path_filter::FilterRule;
use crate::shared::models::{ActiveComponentList, GenerationMode};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Supported schema versions
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// Selects the scanning pipeline for a whole build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanStrategy {
    /// Default excludes, activation checks, priority-based collision resolution
    #[default]
    Fine,
    /// Include patterns and caller excludes only; first definition wins
    Legacy,
}

/// Scan roots and policy for one generation mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModeConfig {
    pub mode: GenerationMode,

    pub roots: Vec<PathBuf>,

    /// Overrides [`GenerationMode::activation_check_default`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activation_check: Option<bool>,

    /// Overrides [`GenerationMode::default_check_against`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_against: Option<Vec<GenerationMode>>,
}

impl ModeConfig {
    pub fn new<I, P>(mode: GenerationMode, roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            mode,
            roots: roots.into_iter().map(Into::into).collect(),
            activation_check: None,
            check_against: None,
        }
    }

    pub fn activation_check(mut self, enabled: bool) -> Self {
        self.activation_check = Some(enabled);
        self
    }

    pub fn check_against(mut self, modes: Vec<GenerationMode>) -> Self {
        self.check_against = Some(modes);
        self
    }

    pub fn effective_activation_check(&self) -> bool {
        self.activation_check
            .unwrap_or_else(|| self.mode.activation_check_default())
    }

    /// Modes to check against, deduplicated, always ending with the mode itself.
    pub fn effective_check_against(&self) -> Vec<GenerationMode> {
        let requested = self
            .check_against
            .clone()
            .unwrap_or_else(|| self.mode.default_check_against());

        let mut seen = HashSet::new();
        let mut modes: Vec<GenerationMode> = requested
            .into_iter()
            .filter(|mode| *mode != self.mode && seen.insert(*mode))
            .collect();
        modes.push(self.mode);
        modes
    }
}

/// Build configuration (YAML schema v1)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Schema version (always 1 for v1)
    #[serde(default)]
    pub version: Option<u32>,

    #[serde(default)]
    pub strategy: ScanStrategy,

    /// Enabled components, highest priority first
    #[serde(default)]
    pub active_components: Vec<String>,

    /// Prefix stripped from paths before the component is derived. Required
    /// when the site itself lives below a directory named like a marker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub install_root: Option<PathBuf>,

    /// Path segments that introduce a component subtree
    #[serde(default = "default_component_markers")]
    pub component_markers: Vec<String>,

    #[serde(default = "default_include_patterns")]
    pub include_patterns: Vec<String>,

    /// Appended to the default exclude set of every root
    #[serde(default)]
    pub extra_excludes: Vec<String>,

    /// Descend through symlinked directories (site extensions are often links)
    #[serde(default = "default_follow_links")]
    pub follow_links: bool,

    #[serde(default)]
    pub modes: Vec<ModeConfig>,
}

fn default_follow_links() -> bool {
    true
}

fn default_component_markers() -> Vec<String> {
    vec!["extension".to_string()]
}

fn default_include_patterns() -> Vec<String> {
    vec![r"\.php$".to_string()]
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            version: Some(1),
            strategy: ScanStrategy::default(),
            active_components: Vec::new(),
            install_root: None,
            component_markers: default_component_markers(),
            include_patterns: default_include_patterns(),
            extra_excludes: Vec::new(),
            follow_links: default_follow_links(),
            modes: Vec::new(),
        }
    }
}

impl BuildConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strategy(mut self, strategy: ScanStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn active_components<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.active_components = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn install_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.install_root = Some(root.into());
        self
    }

    pub fn component_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.component_markers = markers.into_iter().map(Into::into).collect();
        self
    }

    pub fn include_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    pub fn extra_exclude(mut self, pattern: impl Into<String>) -> Self {
        self.extra_excludes.push(pattern.into());
        self
    }

    pub fn follow_links(mut self, enabled: bool) -> Self {
        self.follow_links = enabled;
        self
    }

    pub fn mode(mut self, mode: ModeConfig) -> Self {
        self.modes.push(mode);
        self
    }

    /// Load and validate a YAML configuration file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<ValidatedBuildConfig> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Parse and validate a YAML document
    pub fn from_yaml_str(content: &str) -> ConfigResult<ValidatedBuildConfig> {
        let config: BuildConfig = serde_yaml::from_str(content)?;
        config.build()
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Validate everything a build depends on before any scanning starts
    pub fn build(self) -> ConfigResult<ValidatedBuildConfig> {
        match self.version {
            None => return Err(ConfigError::MissingVersion),
            Some(found) if !SUPPORTED_VERSIONS.contains(&found) => {
                return Err(ConfigError::UnsupportedVersion {
                    found,
                    supported: SUPPORTED_VERSIONS.to_vec(),
                })
            }
            Some(_) => {}
        }

        let active = ActiveComponentList::new(self.active_components.iter().map(String::as_str))?;

        if self.component_markers.iter().all(|marker| marker.trim().is_empty()) {
            return Err(ConfigError::NoComponentMarkers);
        }
        if self.include_patterns.is_empty() {
            return Err(ConfigError::NoIncludePatterns);
        }
        for pattern in &self.include_patterns {
            FilterRule::include(pattern)?;
        }
        for pattern in &self.extra_excludes {
            FilterRule::exclude(pattern)?;
        }

        if self.modes.is_empty() {
            return Err(ConfigError::NoModes);
        }
        let mut seen = HashSet::new();
        for mode in &self.modes {
            if !seen.insert(mode.mode) {
                return Err(ConfigError::DuplicateMode(mode.mode));
            }
            validate_roots(mode)?;
        }

        Ok(ValidatedBuildConfig {
            config: self,
            active,
        })
    }
}

fn validate_roots(mode: &ModeConfig) -> ConfigResult<()> {
    if mode.roots.is_empty() {
        return Err(ConfigError::EmptyRoots { mode: mode.mode });
    }
    for root in &mode.roots {
        if root.as_os_str().is_empty() {
            return Err(ConfigError::EmptyRootPath { mode: mode.mode });
        }
        if !root.exists() {
            return Err(ConfigError::RootNotFound {
                mode: mode.mode,
                root: root.clone(),
            });
        }
        if !root.is_dir() {
            return Err(ConfigError::RootNotDirectory {
                mode: mode.mode,
                root: root.clone(),
            });
        }
    }
    Ok(())
}

/// A configuration that passed [`BuildConfig::build`]
#[derive(Debug, Clone)]
pub struct ValidatedBuildConfig {
    config: BuildConfig,
    active: ActiveComponentList,
}

impl ValidatedBuildConfig {
    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    pub fn active_components(&self) -> &ActiveComponentList {
        &self.active
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        self.config.to_yaml()
    }
}
