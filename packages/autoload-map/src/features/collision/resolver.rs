//! Decides what happens when a class name is already mapped
//!
//! Priority is positional in the active-component list (lower index wins).
//! A new definition replaces an existing one only when both components are
//! active and the new one ranks strictly ahead. Ties, unknown components
//! and core files all keep the existing entry, so the first definition in
//! scan order wins.

use crate::features::activation::ComponentResolver;
use crate::shared::models::{
    ActiveComponentList, AutoloadMap, CollisionOutcome, CollisionRecord, ComponentLookup,
    GenerationMode, ReferenceMaps,
};
use std::path::Path;

/// How an existing entry is weighed against a new definition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// Active-component priority decides; ties keep the existing entry
    #[default]
    Priority,
    /// Any existing entry is kept
    FirstDefinedWins,
}

/// Outcome for one (class, check mode) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// No competing entry
    Accept,
    /// Keep the existing entry; the record names the shadowed file
    Reject(CollisionRecord),
    /// Replace the existing entry; the record names the overridden file
    Overwrite(CollisionRecord),
}

impl Decision {
    pub fn record(&self) -> Option<&CollisionRecord> {
        match self {
            Decision::Accept => None,
            Decision::Reject(record) | Decision::Overwrite(record) => Some(record),
        }
    }
}

/// A class declaration found in a candidate file
#[derive(Debug, Clone, Copy)]
pub struct ClassCandidate<'a> {
    pub class_name: &'a str,
    pub file: &'a Path,
    pub component: &'a ComponentLookup,
}

pub struct CollisionResolver<'a> {
    active: &'a ActiveComponentList,
    components: &'a ComponentResolver,
    policy: CollisionPolicy,
}

impl<'a> CollisionResolver<'a> {
    pub fn new(
        active: &'a ActiveComponentList,
        components: &'a ComponentResolver,
        policy: CollisionPolicy,
    ) -> Self {
        Self {
            active,
            components,
            policy,
        }
    }

    /// Resolve `candidate` against the map for `check_mode`.
    ///
    /// When `check_mode` is the mode being generated the in-progress map is
    /// consulted, otherwise the reference map for `check_mode`.
    pub fn resolve(
        &self,
        candidate: &ClassCandidate<'_>,
        check_mode: GenerationMode,
        generating_mode: GenerationMode,
        in_progress: &AutoloadMap,
        reference: &ReferenceMaps,
    ) -> Decision {
        let comparison = if check_mode == generating_mode {
            in_progress
        } else {
            reference.get(check_mode)
        };

        let Some(existing) = comparison.get(candidate.class_name) else {
            return Decision::Accept;
        };
        // Re-registering the same file is not a collision
        if existing == candidate.file {
            return Decision::Accept;
        }

        let existing_component = self.components.resolve(existing);
        type Side<'s> = (&'s Path, &'s ComponentLookup);
        let record = |outcome, winner: Side<'_>, loser: Side<'_>| {
            CollisionRecord {
                class_name: candidate.class_name.to_string(),
                check_mode,
                generating_mode,
                winning_file: winner.0.to_path_buf(),
                losing_file: loser.0.to_path_buf(),
                winning_component: winner.1.name().cloned(),
                losing_component: loser.1.name().cloned(),
                outcome,
            }
        };
        let incoming = (candidate.file, candidate.component);
        let current = (existing, &existing_component);

        if self.policy == CollisionPolicy::Priority
            && self.ranks_ahead(candidate.component, &existing_component)
        {
            Decision::Overwrite(record(CollisionOutcome::Overridden, incoming, current))
        } else {
            Decision::Reject(record(CollisionOutcome::Shadowed, current, incoming))
        }
    }

    fn rank(&self, component: &ComponentLookup) -> Option<usize> {
        component.name().and_then(|name| self.active.position(name))
    }

    /// Strictly ahead; unknown rank on either side is never ahead.
    fn ranks_ahead(&self, incoming: &ComponentLookup, existing: &ComponentLookup) -> bool {
        match (self.rank(incoming), self.rank(existing)) {
            (Some(new_rank), Some(old_rank)) => new_rank < old_rank,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    struct Fixture {
        active: ActiveComponentList,
        components: ComponentResolver,
    }

    impl Fixture {
        fn new(active: &[&str]) -> Self {
            Self {
                active: ActiveComponentList::new(active.iter().copied()).unwrap(),
                components: ComponentResolver::default(),
            }
        }

        fn resolver(&self, policy: CollisionPolicy) -> CollisionResolver<'_> {
            CollisionResolver::new(&self.active, &self.components, policy)
        }

        fn resolve_in_progress(
            &self,
            policy: CollisionPolicy,
            file: &str,
            map: &AutoloadMap,
        ) -> Decision {
            let path = PathBuf::from(file);
            let component = self.components.resolve(&path);
            let candidate = ClassCandidate {
                class_name: "Widget",
                file: &path,
                component: &component,
            };
            self.resolver(policy).resolve(
                &candidate,
                GenerationMode::Extension,
                GenerationMode::Extension,
                map,
                &ReferenceMaps::new(),
            )
        }
    }

    fn map_with(file: &str) -> AutoloadMap {
        [("Widget", file)].into_iter().collect()
    }

    #[test]
    fn test_absent_class_accepted() {
        let fx = Fixture::new(&["bar", "foo"]);
        let decision = fx.resolve_in_progress(
            CollisionPolicy::Priority,
            "/s/extension/foo/classes/widget.php",
            &AutoloadMap::new(),
        );
        assert_eq!(decision, Decision::Accept);
    }

    #[test]
    fn test_higher_priority_overwrites() {
        let fx = Fixture::new(&["bar", "foo"]);
        let decision = fx.resolve_in_progress(
            CollisionPolicy::Priority,
            "/s/extension/bar/classes/widget.php",
            &map_with("/s/extension/foo/classes/widget.php"),
        );

        let record = match decision {
            Decision::Overwrite(record) => record,
            other => panic!("expected overwrite, got {other:?}"),
        };
        assert_eq!(record.outcome, CollisionOutcome::Overridden);
        assert_eq!(record.winning_file, PathBuf::from("/s/extension/bar/classes/widget.php"));
        assert_eq!(record.losing_file, PathBuf::from("/s/extension/foo/classes/widget.php"));
        assert_eq!(record.losing_component, Some("foo".into()));
    }

    #[test]
    fn test_lower_priority_rejected_and_reported() {
        let fx = Fixture::new(&["bar", "foo"]);
        let decision = fx.resolve_in_progress(
            CollisionPolicy::Priority,
            "/s/extension/foo/classes/widget.php",
            &map_with("/s/extension/bar/classes/widget.php"),
        );

        let record = match decision {
            Decision::Reject(record) => record,
            other => panic!("expected reject, got {other:?}"),
        };
        assert_eq!(record.outcome, CollisionOutcome::Shadowed);
        assert_eq!(record.losing_file, PathBuf::from("/s/extension/foo/classes/widget.php"));
        assert_eq!(record.winning_component, Some("bar".into()));
    }

    #[test]
    fn test_same_component_first_wins() {
        let fx = Fixture::new(&["foo"]);
        let decision = fx.resolve_in_progress(
            CollisionPolicy::Priority,
            "/s/extension/foo/classes/b.php",
            &map_with("/s/extension/foo/classes/a.php"),
        );
        assert!(matches!(decision, Decision::Reject(_)));
    }

    #[test]
    fn test_unknown_priority_rejects() {
        let fx = Fixture::new(&["foo"]);

        // Existing entry from a component missing from the active list
        let decision = fx.resolve_in_progress(
            CollisionPolicy::Priority,
            "/s/extension/foo/classes/widget.php",
            &map_with("/s/extension/gone/classes/widget.php"),
        );
        assert!(matches!(decision, Decision::Reject(_)));

        // Existing entry from the kernel
        let decision = fx.resolve_in_progress(
            CollisionPolicy::Priority,
            "/s/extension/foo/classes/widget.php",
            &map_with("/s/kernel/classes/widget.php"),
        );
        assert!(matches!(decision, Decision::Reject(_)));
    }

    #[test]
    fn test_first_defined_wins_policy_never_overwrites() {
        let fx = Fixture::new(&["bar", "foo"]);
        let decision = fx.resolve_in_progress(
            CollisionPolicy::FirstDefinedWins,
            "/s/extension/bar/classes/widget.php",
            &map_with("/s/extension/foo/classes/widget.php"),
        );
        assert!(matches!(decision, Decision::Reject(_)));
    }

    #[test]
    fn test_same_file_reaccept_is_idempotent() {
        let fx = Fixture::new(&["foo"]);
        let file = "/s/extension/foo/classes/widget.php";
        let map = map_with(file);

        let first = fx.resolve_in_progress(CollisionPolicy::Priority, file, &map);
        let second = fx.resolve_in_progress(CollisionPolicy::Priority, file, &map);

        assert_eq!(first, Decision::Accept);
        assert_eq!(second, Decision::Accept);
        assert_eq!(map, map_with(file));
    }

    #[test]
    fn test_other_mode_uses_reference_map() {
        let fx = Fixture::new(&["foo"]);
        let path = PathBuf::from("/s/extension/foo/classes/widget.php");
        let component = fx.components.resolve(&path);
        let candidate = ClassCandidate {
            class_name: "Widget",
            file: &path,
            component: &component,
        };
        let reference = ReferenceMaps::new()
            .with(GenerationMode::Kernel, map_with("/s/kernel/classes/widget.php"));

        let decision = fx.resolver(CollisionPolicy::Priority).resolve(
            &candidate,
            GenerationMode::Kernel,
            GenerationMode::Extension,
            &AutoloadMap::new(),
            &reference,
        );

        let record = decision.record().unwrap();
        assert_eq!(record.check_mode, GenerationMode::Kernel);
        assert_eq!(record.winning_file, PathBuf::from("/s/kernel/classes/widget.php"));

        // Same mode ignores the reference map
        let decision = fx.resolver(CollisionPolicy::Priority).resolve(
            &candidate,
            GenerationMode::Extension,
            GenerationMode::Extension,
            &AutoloadMap::new(),
            &reference,
        );
        assert_eq!(decision, Decision::Accept);
    }
}
