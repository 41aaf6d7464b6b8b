//! Rejects files owned by inactive components

use super::ComponentResolver;
use crate::features::walker::FileVisitor;
use crate::shared::models::{ActiveComponentList, ComponentLookup};
use std::path::Path;
use tracing::debug;

pub struct ActivationFilter<'a> {
    resolver: &'a ComponentResolver,
    active: &'a ActiveComponentList,
    rejected: usize,
}

impl<'a> ActivationFilter<'a> {
    pub fn new(resolver: &'a ComponentResolver, active: &'a ActiveComponentList) -> Self {
        Self {
            resolver,
            active,
            rejected: 0,
        }
    }

    /// Core files are always active; malformed component paths never are.
    pub fn is_active(&self, path: &Path) -> bool {
        match self.resolver.resolve(path) {
            ComponentLookup::Core => true,
            ComponentLookup::Component(name) => self.active.contains(&name),
            ComponentLookup::Malformed => false,
        }
    }

    /// Files turned away so far
    pub fn rejected(&self) -> usize {
        self.rejected
    }
}

impl FileVisitor for ActivationFilter<'_> {
    fn visit(&mut self, path: &Path) -> bool {
        let active = self.is_active(path);
        if !active {
            self.rejected += 1;
            debug!("Skipping {}: component not active", path.display());
        }
        active
    }
}
