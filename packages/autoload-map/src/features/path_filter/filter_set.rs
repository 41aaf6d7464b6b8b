//! Include/exclude path rules
//!
//! A path is eligible iff it matches at least one include rule and no
//! exclude rule. Exclusion always wins.

use crate::config::{ConfigError, ConfigResult};
use regex::Regex;
use std::borrow::Cow;
use std::path::{Path, MAIN_SEPARATOR, MAIN_SEPARATOR_STR};

/// Directory names (relative to a scan root) that never hold autoloadable sources
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    "var",
    "settings",
    "benchmarks",
    "bin",
    "autoload",
    "port_info",
    "update",
    "templates",
    "tmp",
    "UnitTest",
    "lib/ezc",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Include,
    Exclude,
}

/// A compiled pattern plus its classification
#[derive(Debug, Clone)]
pub struct FilterRule {
    pattern: Regex,
    kind: RuleKind,
}

impl FilterRule {
    pub fn new(pattern: &str, kind: RuleKind) -> ConfigResult<Self> {
        let compiled =
            Regex::new(pattern).map_err(|source| ConfigError::invalid_pattern(pattern, source))?;
        Ok(Self {
            pattern: compiled,
            kind,
        })
    }

    pub fn include(pattern: &str) -> ConfigResult<Self> {
        Self::new(pattern, RuleKind::Include)
    }

    pub fn exclude(pattern: &str) -> ConfigResult<Self> {
        Self::new(pattern, RuleKind::Exclude)
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    pub fn matches(&self, path: &str) -> bool {
        self.pattern.is_match(path)
    }
}

/// Ordered include and exclude rules for one scan
#[derive(Debug, Clone, Default)]
pub struct PathFilterSet {
    includes: Vec<FilterRule>,
    excludes: Vec<FilterRule>,
}

impl PathFilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rules for a fine-filtered scan of `root`: the default exclude set
    /// anchored at the root, then `extra_excludes`, with `includes`.
    pub fn for_root(
        root: &Path,
        includes: &[String],
        extra_excludes: &[String],
    ) -> ConfigResult<Self> {
        let mut set = Self::new().exclude(&default_exclude_pattern(root))?;
        for pattern in includes {
            set = set.include(pattern)?;
        }
        for pattern in extra_excludes {
            set = set.exclude(pattern)?;
        }
        Ok(set)
    }

    pub fn include(mut self, pattern: &str) -> ConfigResult<Self> {
        self.push(FilterRule::include(pattern)?);
        Ok(self)
    }

    pub fn exclude(mut self, pattern: &str) -> ConfigResult<Self> {
        self.push(FilterRule::exclude(pattern)?);
        Ok(self)
    }

    pub fn push(&mut self, rule: FilterRule) {
        match rule.kind() {
            RuleKind::Include => self.includes.push(rule),
            RuleKind::Exclude => self.excludes.push(rule),
        }
    }

    pub fn excludes(&self) -> &[FilterRule] {
        &self.excludes
    }

    pub fn is_excluded(&self, path: &str) -> bool {
        self.excludes.iter().any(|rule| rule.matches(path))
    }

    pub fn eligible(&self, path: &str) -> bool {
        !self.is_excluded(path) && self.includes.iter().any(|rule| rule.matches(path))
    }

    pub fn eligible_path(&self, path: &Path) -> bool {
        self.eligible(&path_str(path))
    }

    /// Whether the subtree under `dir` is cut from the walk.
    ///
    /// Directories are tested with a trailing separator so segment-boundary
    /// patterns like `^root/var/` match the directory itself.
    pub fn prunes_dir(&self, dir: &Path) -> bool {
        let mut dir = path_str(dir).into_owned();
        if !dir.ends_with(MAIN_SEPARATOR) {
            dir.push(MAIN_SEPARATOR);
        }
        self.is_excluded(&dir)
    }
}

/// Lossy string form of a path, as seen by the filter patterns
pub fn path_str(path: &Path) -> Cow<'_, str> {
    path.to_string_lossy()
}

/// Root path with trailing separators removed (a bare separator stays as is)
pub fn normalize_root(root: &Path) -> String {
    let raw = path_str(root);
    let trimmed = raw.trim_end_matches(MAIN_SEPARATOR);
    if trimmed.is_empty() && !raw.is_empty() {
        MAIN_SEPARATOR_STR.to_string()
    } else {
        trimmed.to_string()
    }
}

/// `^<root>/(var|settings|...|lib/ezc)/`, with root and separators escaped
pub fn default_exclude_pattern(root: &Path) -> String {
    let sep = regex::escape(MAIN_SEPARATOR_STR);
    let root = normalize_root(root);
    let mut prefix = regex::escape(&root);
    if !root.ends_with(MAIN_SEPARATOR) {
        prefix.push_str(&sep);
    }
    let dirs = DEFAULT_EXCLUDED_DIRS
        .iter()
        .map(|dir| {
            dir.split('/')
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(&sep)
        })
        .collect::<Vec<_>>()
        .join("|");
    format!("^{prefix}({dirs}){sep}")
}
