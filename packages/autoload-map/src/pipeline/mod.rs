//! Map build orchestration
//!
//! The scan strategy is decided once per build from the configuration and
//! held by [`MapBuilder`]; see [`ScanStrategy`](crate::config::ScanStrategy).

mod map_builder;
mod output;
mod strategy;

pub use map_builder::MapBuilder;
pub use output::BuildOutput;

use crate::config::BuildConfig;
use crate::errors::Result;
use crate::shared::models::ReferenceMaps;
use crate::shared::ports::BuildObserver;
use std::path::Path;

/// Load `config_path`, then build every configured mode.
pub fn generate(
    config_path: impl AsRef<Path>,
    reference: &ReferenceMaps,
    observer: &mut dyn BuildObserver,
) -> Result<BuildOutput> {
    let config = BuildConfig::from_yaml(config_path)?;
    let builder = MapBuilder::new(config)?;
    Ok(builder.build(reference, observer))
}
