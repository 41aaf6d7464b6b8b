//! Build configuration
//!
//! Two ways to configure a build:
//!
//! ```rust,ignore
//! use autoload_map::config::{BuildConfig, ModeConfig};
//! use autoload_map::shared::models::GenerationMode;
//!
//! // Programmatic
//! let config = BuildConfig::new()
//!     .active_components(["ezfind", "ezjscore"])
//!     .mode(ModeConfig::new(GenerationMode::Extension, ["/srv/site/extension"]))
//!     .build()?;
//!
//! // YAML (schema v1)
//! let config = BuildConfig::from_yaml("autoload.yaml")?;
//! ```
//!
//! Validation happens in `build()`; everything it rejects is fatal and
//! surfaces before any directory is read.

pub mod build_config;
pub mod error;

pub use build_config::{
    BuildConfig, ModeConfig, ScanStrategy, ValidatedBuildConfig, SUPPORTED_VERSIONS,
};
pub use error::{ConfigError, ConfigResult};
