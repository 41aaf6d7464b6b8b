//! Generation modes

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named scanning pass with its own autoload map and reference map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationMode {
    /// Kernel/platform classes
    Kernel,
    /// Classes defined by all active extensions
    Extension,
    /// Test-suite classes
    Tests,
    /// Classes of one extension, generated in isolation
    SingleExtension,
    /// Extension classes that replace kernel classes
    KernelOverride,
}

impl GenerationMode {
    pub const ALL: [GenerationMode; 5] = [
        GenerationMode::Kernel,
        GenerationMode::Extension,
        GenerationMode::Tests,
        GenerationMode::SingleExtension,
        GenerationMode::KernelOverride,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GenerationMode::Kernel => "kernel",
            GenerationMode::Extension => "extension",
            GenerationMode::Tests => "tests",
            GenerationMode::SingleExtension => "single_extension",
            GenerationMode::KernelOverride => "kernel_override",
        }
    }

    /// Component-scoped and override-scoped passes check activation by default.
    pub fn activation_check_default(self) -> bool {
        matches!(
            self,
            GenerationMode::Extension | GenerationMode::KernelOverride
        )
    }

    /// Modes whose maps a class from this pass is checked against by default.
    ///
    /// The last entry is always the mode itself (its in-progress map).
    pub fn default_check_against(self) -> Vec<GenerationMode> {
        match self {
            GenerationMode::Kernel => vec![GenerationMode::Kernel],
            GenerationMode::Extension => vec![GenerationMode::Kernel, GenerationMode::Extension],
            GenerationMode::SingleExtension => {
                vec![GenerationMode::Kernel, GenerationMode::SingleExtension]
            }
            GenerationMode::Tests => vec![GenerationMode::Tests],
            GenerationMode::KernelOverride => vec![GenerationMode::KernelOverride],
        }
    }
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
