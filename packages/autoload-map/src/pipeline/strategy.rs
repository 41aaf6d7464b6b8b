//! What each scan strategy changes at the pipeline's decision points

use crate::config::{ConfigResult, ScanStrategy};
use crate::features::collision::CollisionPolicy;
use crate::features::path_filter::PathFilterSet;
use std::path::Path;

impl ScanStrategy {
    pub(crate) fn collision_policy(self) -> CollisionPolicy {
        match self {
            ScanStrategy::Fine => CollisionPolicy::Priority,
            ScanStrategy::Legacy => CollisionPolicy::FirstDefinedWins,
        }
    }

    /// The legacy strategy has no default exclude set
    pub(crate) fn filters_for_root(
        self,
        root: &Path,
        includes: &[String],
        extra_excludes: &[String],
    ) -> ConfigResult<PathFilterSet> {
        match self {
            ScanStrategy::Fine => PathFilterSet::for_root(root, includes, extra_excludes),
            ScanStrategy::Legacy => {
                let mut set = PathFilterSet::new();
                for pattern in includes {
                    set = set.include(pattern)?;
                }
                for pattern in extra_excludes {
                    set = set.exclude(pattern)?;
                }
                Ok(set)
            }
        }
    }

    pub(crate) fn checks_activation(self, mode_requests_it: bool) -> bool {
        self == ScanStrategy::Fine && mode_requests_it
    }
}
