//! Result of a map build

use crate::features::class_extraction::ExtractionError;
use crate::features::walker::SubtreeScanError;
use crate::shared::models::{AutoloadMap, CollisionOutcome, CollisionRecord, GenerationMode};
use std::collections::BTreeMap;

/// Maps per generation mode plus everything worth telling the user
#[derive(Debug, Default)]
pub struct BuildOutput {
    pub maps: BTreeMap<GenerationMode, AutoloadMap>,
    /// In discovery order
    pub collisions: Vec<CollisionRecord>,
    pub scan_errors: Vec<SubtreeScanError>,
    pub extraction_errors: Vec<ExtractionError>,
    /// Candidate files accepted across all roots and modes
    pub files_scanned: usize,
}

impl BuildOutput {
    pub fn map(&self, mode: GenerationMode) -> Option<&AutoloadMap> {
        self.maps.get(&mode)
    }

    /// Records where the new definition lost
    pub fn shadowed(&self) -> impl Iterator<Item = &CollisionRecord> {
        self.collisions
            .iter()
            .filter(|record| record.outcome == CollisionOutcome::Shadowed)
    }

    /// Records where the new definition replaced an existing entry
    pub fn overridden(&self) -> impl Iterator<Item = &CollisionRecord> {
        self.collisions
            .iter()
            .filter(|record| record.outcome == CollisionOutcome::Overridden)
    }

    /// True when every root and every candidate file was read
    pub fn is_complete(&self) -> bool {
        self.scan_errors.is_empty() && self.extraction_errors.is_empty()
    }
}
