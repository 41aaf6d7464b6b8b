//! Core data model: components, generation modes, autoload maps, collisions

mod autoload_map;
mod collision;
mod component;
mod mode;

pub use autoload_map::{AutoloadMap, ReferenceMaps};
pub use collision::{CollisionOutcome, CollisionRecord};
pub use component::{ActiveComponentList, CandidateFile, ComponentLookup, ComponentName};
pub use mode::GenerationMode;
