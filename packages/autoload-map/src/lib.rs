/*
 * Autoload Map - class-name to file-path index builder
 *
 * Feature-First Layout:
 * - shared/      : Models (components, modes, maps, collisions) and observer port
 * - features/    : path_filter → walker → activation → collision, class_extraction
 * - pipeline/    : MapBuilder orchestration and scan strategy
 * - config/      : Versioned YAML / builder configuration
 *
 * A build is single-threaded and deterministic: roots are walked depth-first,
 * candidates sorted by path, collisions settled by active-component priority.
 */

#![allow(clippy::new_without_default)] // Builder-style constructors kept explicit
#![allow(clippy::module_inception)] // Module naming intentional

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and ports
pub mod shared;

/// Feature modules (scan-filter-resolve stages)
pub mod features;

/// Map build orchestration
pub mod pipeline;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{BuildConfig, ConfigError, ModeConfig, ScanStrategy};
pub use errors::{AutoloadError, Result};
pub use pipeline::{generate, BuildOutput, MapBuilder};
pub use shared::models::{
    ActiveComponentList, AutoloadMap, CollisionOutcome, CollisionRecord, ComponentName,
    GenerationMode, ReferenceMaps,
};
pub use shared::ports::{BuildObserver, MemoryObserver, NullObserver};
